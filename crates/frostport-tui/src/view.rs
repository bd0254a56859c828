#![forbid(unsafe_code)]

//! Frame rendering.
//!
//! Pure function of the [`App`] state: each frame clears the screen and
//! redraws header, search row, filter pills, the grouped doc list (or the
//! no-match affordance), and the footer. With the palette open, an overlay
//! panel is drawn over the middle of the screen. Column math uses display
//! width, not byte or char counts, so CJK titles clip cleanly.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthStr;

use frostport_core::catalog::DocLevel;
use frostport_core::filter::{
    CategoryFilter, LevelFilter, RankedDoc, category_counts, docs_by_category,
};
use frostport_core::highlight::highlight;
use frostport_core::theme::ResolvedTheme;
use frostport_palette::EntryKind;

use crate::app::{App, Focus};
use crate::copy;

/// Accent color per resolved theme.
fn accent(theme: ResolvedTheme) -> Color {
    match theme {
        ResolvedTheme::Dark => Color::Cyan,
        ResolvedTheme::Light => Color::Blue,
    }
}

/// Clip `text` to at most `max` display columns.
fn clip(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Draw one full frame.
pub fn draw(out: &mut impl Write, app: &App, width: u16, height: u16) -> io::Result<()> {
    let width = width as usize;
    let theme = app.theme();
    let locale = app.locale;
    let tokens = app.search_tokens();
    let results = app.results();

    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

    let mut row: u16 = 0;
    fn put(out: &mut impl Write, r: &mut u16, text: &str, width: usize) -> io::Result<()> {
        queue!(out, MoveTo(0, *r), Print(clip(text, width)))?;
        *r += 1;
        Ok(())
    }

    // Header.
    queue!(out, SetAttribute(Attribute::Bold), SetForegroundColor(accent(theme)))?;
    put(out, &mut row, copy::APP_TITLE.get(locale), width)?;
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;

    // Search row.
    let cursor = if app.focus == Focus::Search && app.cursor_visible() {
        "_"
    } else {
        ""
    };
    let query_display = if app.filter.query.is_empty() && app.focus != Focus::Search {
        copy::SEARCH_PLACEHOLDER.get(locale).to_string()
    } else {
        format!("{}{}", app.filter.query, cursor)
    };
    put(
        out,
        &mut row,
        &format!("{}: {}", copy::SEARCH_LABEL.get(locale), query_display),
        width,
    )?;

    // Category pills with live counts.
    let counts = category_counts(app.catalog(), &app.filter, &tokens, locale);
    let mut pills = vec![format!(
        "[{}]{}",
        copy::ALL_CATEGORIES.get(locale),
        if app.filter.category == CategoryFilter::All { "*" } else { "" }
    )];
    for (category, count) in counts {
        let marker = if app.filter.category == CategoryFilter::Only(category) {
            "*"
        } else {
            ""
        };
        pills.push(format!("[{} {}]{}", category.label(locale), count, marker));
    }
    put(out, &mut row, &pills.join(" "), width)?;

    // Level row.
    let mut levels = vec![format!(
        "({}){}",
        copy::ALL_LEVELS.get(locale),
        if app.filter.level == LevelFilter::All { "*" } else { "" }
    )];
    for level in [DocLevel::Core, DocLevel::Advanced] {
        let marker = if app.filter.level == LevelFilter::Only(level) {
            "*"
        } else {
            ""
        };
        levels.push(format!("({}){}", level.label(locale), marker));
    }
    put(out, &mut row, &levels.join(" "), width)?;
    put(out, &mut row, "", width)?;

    let body_rows = height.saturating_sub(row + 1);
    if results.is_empty() {
        draw_no_match(out, app, &mut row)?;
    } else {
        draw_results(out, app, &results, &tokens, &mut row, body_rows, width)?;
    }

    // Footer.
    queue!(
        out,
        MoveTo(0, height.saturating_sub(1)),
        SetAttribute(Attribute::Dim),
        Print(clip(copy::FOOTER_HINTS.get(locale), width)),
        SetAttribute(Attribute::Reset),
    )?;

    if app.palette.is_open() {
        draw_palette(out, app, width, height)?;
    }

    out.flush()
}

fn draw_no_match(out: &mut impl Write, app: &App, row: &mut u16) -> io::Result<()> {
    let locale = app.locale;
    queue!(out, MoveTo(0, *row), SetAttribute(Attribute::Bold))?;
    queue!(out, Print(copy::NO_MATCH_TITLE.get(locale)), SetAttribute(Attribute::Reset))?;
    *row += 1;
    queue!(out, MoveTo(0, *row), Print(copy::NO_MATCH_HINT.get(locale)))?;
    *row += 1;
    for suggestion in copy::NO_MATCH_SUGGESTIONS {
        queue!(out, MoveTo(2, *row), Print(format!("· {suggestion}")))?;
        *row += 1;
    }
    queue!(
        out,
        MoveTo(0, *row),
        SetAttribute(Attribute::Dim),
        Print(copy::NO_MATCH_RESET.get(locale)),
        SetAttribute(Attribute::Reset),
    )?;
    *row += 1;
    Ok(())
}

fn draw_results(
    out: &mut impl Write,
    app: &App,
    results: &[RankedDoc],
    tokens: &[String],
    row: &mut u16,
    body_rows: u16,
    width: usize,
) -> io::Result<()> {
    let locale = app.locale;
    let theme = app.theme();
    let limit = *row + body_rows;

    // Capped preview while a filter is active, featured strip otherwise.
    let top = app.top_matches(results);
    if !top.is_empty() {
        queue!(out, MoveTo(0, *row), SetAttribute(Attribute::Bold))?;
        queue!(
            out,
            Print(format!(
                "{} ({} {})",
                copy::TOP_MATCHES_HEADING.get(locale),
                results.len(),
                copy::RESULT_COUNT.get(locale)
            )),
            SetAttribute(Attribute::Reset),
        )?;
        *row += 1;
        for ranked in top {
            if *row >= limit {
                return Ok(());
            }
            queue!(out, MoveTo(2, *row))?;
            draw_highlighted(
                out,
                ranked.doc.title.get(locale),
                tokens,
                theme,
                width.saturating_sub(2),
            )?;
            *row += 1;
        }
        queue!(out, MoveTo(0, *row), Print(""))?;
        *row += 1;
    } else if !app.filter.is_active() {
        queue!(out, MoveTo(0, *row), SetAttribute(Attribute::Bold))?;
        queue!(out, Print(copy::FEATURED_HEADING.get(locale)), SetAttribute(Attribute::Reset))?;
        *row += 1;
        for doc in app.catalog().featured(5) {
            if *row >= limit {
                return Ok(());
            }
            queue!(
                out,
                MoveTo(2, *row),
                Print(clip(
                    &format!("★ {} · {}", doc.title.get(locale), doc.summary.get(locale)),
                    width.saturating_sub(2),
                )),
            )?;
            *row += 1;
        }
        queue!(out, MoveTo(0, *row), Print(""))?;
        *row += 1;
    }

    // Grouped list, skipping `doc_scroll` leading rows.
    let groups = docs_by_category(results);
    let mut skip = app.doc_scroll;
    for (category, docs) in &groups {
        if docs.is_empty() {
            continue;
        }
        if *row >= limit {
            break;
        }
        if skip == 0 {
            queue!(
                out,
                MoveTo(0, *row),
                SetForegroundColor(accent(theme)),
                Print(clip(category.label(locale), width)),
                ResetColor,
            )?;
            *row += 1;
        }
        for ranked in docs {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            if *row >= limit {
                break;
            }
            let level = ranked.doc.level.label(locale);
            queue!(out, MoveTo(2, *row))?;
            draw_highlighted(
                out,
                ranked.doc.title.get(locale),
                tokens,
                theme,
                width.saturating_sub(2),
            )?;
            queue!(
                out,
                SetAttribute(Attribute::Dim),
                Print(clip(&format!("  [{level}] {}", ranked.doc.path), width / 2)),
                SetAttribute(Attribute::Reset),
            )?;
            *row += 1;
        }
    }
    Ok(())
}

/// Print `text` with query-token spans emphasized.
fn draw_highlighted(
    out: &mut impl Write,
    text: &str,
    tokens: &[String],
    theme: ResolvedTheme,
    max: usize,
) -> io::Result<()> {
    let clipped = clip(text, max);
    for segment in highlight(&clipped, tokens) {
        if segment.emphasized {
            queue!(
                out,
                SetAttribute(Attribute::Bold),
                SetForegroundColor(accent(theme)),
                Print(&segment.text),
                SetAttribute(Attribute::Reset),
                ResetColor,
            )?;
        } else {
            queue!(out, Print(&segment.text))?;
        }
    }
    Ok(())
}

fn draw_palette(out: &mut impl Write, app: &App, width: usize, height: u16) -> io::Result<()> {
    let locale = app.locale;
    let theme = app.theme();
    let entries = app.palette_entries();

    let panel_w = width.clamp(20, 72);
    let left = ((width.saturating_sub(panel_w)) / 2) as u16;
    let mut row: u16 = 2;
    let bottom = height.saturating_sub(3);

    fn panel_line(
        out: &mut impl Write,
        r: &mut u16,
        text: &str,
        left: u16,
        panel_w: usize,
    ) -> io::Result<()> {
        queue!(
            out,
            MoveTo(left, *r),
            Print(format!("│ {:<w$} │", clip(text, panel_w - 4), w = panel_w - 4)),
        )?;
        *r += 1;
        Ok(())
    }

    queue!(
        out,
        MoveTo(left, row),
        SetForegroundColor(accent(theme)),
        Print(format!("┌─ {} {}", copy::PALETTE_TITLE.get(locale), "─".repeat(panel_w.saturating_sub(copy::PALETTE_TITLE.get(locale).width() + 5)))),
        ResetColor,
    )?;
    row += 1;
    panel_line(out, &mut row, &format!("> {}_", app.palette.query()), left, panel_w)?;
    panel_line(out, &mut row, "", left, panel_w)?;

    if entries.is_empty() {
        panel_line(out, &mut row, copy::PALETTE_EMPTY.get(locale), left, panel_w)?;
    }

    let mut last_kind: Option<EntryKind> = None;
    for (index, entry) in entries.iter().enumerate() {
        if row >= bottom {
            break;
        }
        if last_kind != Some(entry.kind) {
            let heading = match entry.kind {
                EntryKind::Action => copy::PALETTE_ACTIONS_HEADING.get(locale),
                EntryKind::Doc => copy::PALETTE_DOCS_HEADING.get(locale),
            };
            panel_line(out, &mut row, &format!("— {heading} —"), left, panel_w)?;
            last_kind = Some(entry.kind);
        }
        if row >= bottom {
            break;
        }
        let marker = if index == app.palette.active() { ">" } else { " " };
        let meta = entry.meta.map(|m| format!("  ({m})")).unwrap_or_default();
        let line = format!("{marker} {} · {}{meta}", entry.label, entry.hint);
        if index == app.palette.active() {
            queue!(out, SetAttribute(Attribute::Bold), SetForegroundColor(accent(theme)))?;
            panel_line(out, &mut row, &line, left, panel_w)?;
            queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
        } else {
            panel_line(out, &mut row, &line, left, panel_w)?;
        }
    }

    queue!(
        out,
        MoveTo(left, row),
        Print(format!("└{}┘", "─".repeat(panel_w.saturating_sub(2)))),
    )?;
    Ok(())
}
