#![forbid(unsafe_code)]

//! The portal session model.
//!
//! One [`App`] owns all mutable state for a run: the active locale and theme,
//! the browse-view filter state, and the palette. Derived collections (ranked
//! docs, category counts, palette entries) are pure recomputations queried by
//! the view after each event; there is no background work in the ranking
//! path.
//!
//! # Invariants
//!
//! 1. `FilterState` and `PaletteState` each have exactly one owner; every
//!    mutation goes through [`App::handle_key`] or an [`Effect`].
//! 2. The palette selection index is re-clamped against the freshly
//!    aggregated sequence before any navigation or commit touches it.
//! 3. Opening the palette engages the scroll lock and arms the focus
//!    deferral; every close path releases and cancels them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use frostport_core::catalog::CatalogIndex;
use frostport_core::filter::{FilterState, RankedDoc, ranked_docs, top_matches};
use frostport_core::locale::Locale;
use frostport_core::theme::{ResolvedTheme, ThemeMode};
use frostport_core::tokenizer::tokenize;
use frostport_palette::{ActionRegistry, Effect, PaletteEntry, PaletteState, aggregate};

use crate::launch;
use crate::prefs::{Prefs, PrefsStore};
use crate::viewsync::{FocusDeferral, ScrollLock, scroll_into_view};

/// Which surface receives printable keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Browsing the doc list; printable keys are ignored except shortcuts.
    Browse,
    /// The main search field is focused.
    Search,
    /// The palette query is focused (set one tick after opening).
    Palette,
}

/// The whole session state.
pub struct App {
    pub locale: Locale,
    pub theme_mode: ThemeMode,
    pub system_theme: ResolvedTheme,
    pub filter: FilterState,
    pub palette: PaletteState,
    pub focus: Focus,
    pub doc_scroll: usize,
    pub should_quit: bool,
    pub reduced_motion: bool,
    frame: u64,
    registry: ActionRegistry,
    catalog: CatalogIndex,
    prefs: PrefsStore,
    scroll_lock: ScrollLock,
    palette_focus: FocusDeferral,
}

impl App {
    #[must_use]
    pub fn new(
        locale: Locale,
        theme_mode: ThemeMode,
        system_theme: ResolvedTheme,
        prefs: PrefsStore,
    ) -> Self {
        Self {
            locale,
            theme_mode,
            system_theme,
            filter: FilterState::default(),
            palette: PaletteState::new(),
            focus: Focus::Browse,
            doc_scroll: 0,
            should_quit: false,
            reduced_motion: false,
            frame: 0,
            registry: ActionRegistry::standard(),
            catalog: CatalogIndex::builtin(),
            prefs,
            scroll_lock: ScrollLock::default(),
            palette_focus: FocusDeferral::default(),
        }
    }

    // ── Derived state ────────────────────────────────────────────────────

    #[must_use]
    pub fn catalog(&self) -> CatalogIndex {
        self.catalog
    }

    #[must_use]
    pub fn theme(&self) -> ResolvedTheme {
        self.theme_mode.resolve(self.system_theme)
    }

    /// Tokens of the main search query.
    #[must_use]
    pub fn search_tokens(&self) -> Vec<String> {
        tokenize(&self.filter.query)
    }

    /// The filtered, ranked doc list for the browse view.
    #[must_use]
    pub fn results(&self) -> Vec<RankedDoc> {
        ranked_docs(self.catalog, &self.filter, &self.search_tokens(), self.locale)
    }

    /// The capped top-matches preview, empty unless a filter is active.
    #[must_use]
    pub fn top_matches<'a>(&self, results: &'a [RankedDoc]) -> &'a [RankedDoc] {
        top_matches(results, &self.filter)
    }

    /// The aggregated palette sequence for the current palette query.
    #[must_use]
    pub fn palette_entries(&self) -> Vec<PaletteEntry> {
        aggregate(
            &self.registry,
            self.catalog,
            &tokenize(self.palette.query()),
            self.locale,
        )
    }

    // ── Event-loop hooks ─────────────────────────────────────────────────

    /// Run once per event-loop iteration, before polling for input.
    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if self.palette_focus.fire() && self.palette.is_open() {
            self.focus = Focus::Palette;
        }
    }

    /// Whether the focused-field cursor is in its visible blink phase.
    /// Steady when reduced motion is requested.
    #[must_use]
    pub fn cursor_visible(&self) -> bool {
        self.reduced_motion || self.frame % 10 < 5
    }

    /// Dispatch a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('k') => {
                    self.toggle_palette();
                    return;
                }
                KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                _ => {}
            }
        }

        if self.palette.is_open() {
            self.handle_palette_key(key);
        } else {
            self.handle_browse_key(key);
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        let entries = self.palette_entries();
        self.palette.sync_len(entries.len());
        match key.code {
            KeyCode::Esc => self.close_palette(),
            KeyCode::Down | KeyCode::Tab => self.palette.next(entries.len()),
            KeyCode::Up | KeyCode::BackTab => self.palette.previous(entries.len()),
            KeyCode::Enter => {
                if let Some(effect) = self.palette.commit(&entries) {
                    self.on_palette_closed();
                    self.run_effect(effect);
                }
            }
            KeyCode::Backspace => self.palette.pop_query_char(),
            KeyCode::Char(c) if self.focus == Focus::Palette => {
                self.palette.push_query_char(c);
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.focus == Focus::Search || self.filter.is_active() {
                    if self.filter.is_active() {
                        self.filter.reset();
                        self.doc_scroll = 0;
                    }
                    self.focus = Focus::Browse;
                }
            }
            KeyCode::Char('/') if self.focus != Focus::Search => {
                self.focus = Focus::Search;
            }
            KeyCode::Char('q') if self.focus != Focus::Search => {
                self.should_quit = true;
            }
            KeyCode::Down => self.scroll_docs(1),
            KeyCode::Up => self.scroll_docs(-1),
            KeyCode::Enter if self.focus == Focus::Search => {
                let results = self.results();
                if let Some(top) = results.first() {
                    self.run_effect(Effect::OpenUrl(top.doc.url()));
                }
            }
            KeyCode::Backspace if self.focus == Focus::Search => {
                self.filter.query.pop();
                self.doc_scroll = 0;
            }
            KeyCode::Char(c) if self.focus == Focus::Search => {
                self.filter.query.push(c);
                self.doc_scroll = 0;
            }
            _ => {}
        }
    }

    fn scroll_docs(&mut self, delta: isize) {
        let len = self.results().len();
        if len == 0 {
            self.doc_scroll = 0;
            return;
        }
        let next = self.doc_scroll.saturating_add_signed(delta);
        self.doc_scroll = next.min(len - 1);
    }

    /// Clamp the doc scroll so the given row is visible in `viewport` rows.
    pub fn ensure_doc_visible(&mut self, row: usize, viewport: usize) {
        self.doc_scroll = scroll_into_view(self.doc_scroll, row, viewport);
    }

    // ── Palette lifecycle ────────────────────────────────────────────────

    pub fn toggle_palette(&mut self) {
        if self.palette.is_open() {
            self.close_palette();
        } else {
            self.palette.open_palette();
            self.scroll_lock.engage(self.doc_scroll);
            self.palette_focus.arm();
        }
    }

    fn close_palette(&mut self) {
        self.palette.close();
        self.on_palette_closed();
    }

    fn on_palette_closed(&mut self) {
        self.palette_focus.cancel();
        if let Some(offset) = self.scroll_lock.release() {
            self.doc_scroll = offset;
        }
        if self.focus == Focus::Palette {
            self.focus = Focus::Browse;
        }
    }

    // ── Effects ──────────────────────────────────────────────────────────

    /// Apply a committed palette effect.
    pub fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::JumpToDocs => {
                self.doc_scroll = 0;
                self.focus = Focus::Browse;
            }
            Effect::OpenUrl(url) => {
                if let Err(e) = launch::open_url(&url) {
                    tracing::warn!(url, error = %e, "browser launch failed");
                }
            }
            Effect::ToggleLocale => {
                self.locale = self.locale.other();
                self.persist();
            }
            Effect::SetTheme(mode) => {
                self.theme_mode = mode;
                self.persist();
            }
        }
    }

    fn persist(&self) {
        let prefs = Prefs {
            theme: Some(self.theme_mode.as_str().to_string()),
            locale: Some(self.locale.as_str().to_string()),
        };
        if let Err(e) = self.prefs.save(&prefs) {
            tracing::warn!(error = %e, "cannot save preferences");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use tempfile::tempdir;

    fn app() -> (App, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let store = PrefsStore::new(dir.path().join("prefs.json"));
        let app = App::new(
            Locale::En,
            ThemeMode::System,
            ResolvedTheme::Dark,
            store,
        );
        (app, dir)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn ctrl_k_toggles_palette() {
        let (mut app, _dir) = app();
        ctrl(&mut app, 'k');
        assert!(app.palette.is_open());
        ctrl(&mut app, 'k');
        assert!(!app.palette.is_open());
    }

    #[test]
    fn palette_focus_arrives_one_tick_late() {
        let (mut app, _dir) = app();
        ctrl(&mut app, 'k');
        assert_ne!(app.focus, Focus::Palette);
        app.tick();
        assert_eq!(app.focus, Focus::Palette);
    }

    #[test]
    fn closing_before_tick_cancels_deferred_focus() {
        let (mut app, _dir) = app();
        ctrl(&mut app, 'k');
        press(&mut app, KeyCode::Esc);
        app.tick();
        assert_eq!(app.focus, Focus::Browse);
    }

    #[test]
    fn scroll_lock_restores_offset_across_palette() {
        let (mut app, _dir) = app();
        app.doc_scroll = 5;
        ctrl(&mut app, 'k');
        app.doc_scroll = 0;
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.doc_scroll, 5);
    }

    #[test]
    fn esc_clears_active_filters_and_blurs_search() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.focus, Focus::Search);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('f'));
        assert!(app.filter.is_active());
        press(&mut app, KeyCode::Esc);
        assert!(!app.filter.is_active());
        assert_eq!(app.focus, Focus::Browse);
    }

    #[test]
    fn slash_only_focuses_search_when_not_editing() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.filter.query, "/");
    }

    #[test]
    fn palette_navigation_wraps_over_entries() {
        let (mut app, _dir) = app();
        ctrl(&mut app, 'k');
        app.tick();
        let len = app.palette_entries().len();
        assert!(len > 0);
        for _ in 0..len {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.palette.active(), 0);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.palette.active(), len - 1);
    }

    #[test]
    fn committing_toggle_locale_flips_and_persists() {
        let (mut app, _dir) = app();
        ctrl(&mut app, 'k');
        app.tick();
        for c in "language".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let entries = app.palette_entries();
        assert!(!entries.is_empty());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.locale, Locale::Zh);
        assert!(!app.palette.is_open());
        let saved = app.prefs.load();
        assert_eq!(saved.locale.as_deref(), Some("zh"));
    }

    #[test]
    fn committing_theme_updates_resolution() {
        let (mut app, _dir) = app();
        app.run_effect(Effect::SetTheme(ThemeMode::Light));
        assert_eq!(app.theme(), ResolvedTheme::Light);
        let saved = app.prefs.load();
        assert_eq!(saved.theme.as_deref(), Some("light"));
    }

    #[test]
    fn palette_query_edits_reset_selection() {
        let (mut app, _dir) = app();
        ctrl(&mut app, 'k');
        app.tick();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.palette.active(), 1);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.palette.active(), 0);
    }

    #[test]
    fn selection_clamps_when_query_shrinks_sequence() {
        let (mut app, _dir) = app();
        ctrl(&mut app, 'k');
        app.tick();
        let full = app.palette_entries().len();
        for _ in 0..full - 1 {
            press(&mut app, KeyCode::Down);
        }
        // Narrow to the theme actions; next navigation re-clamps first.
        for c in "theme".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        let narrowed = app.palette_entries().len();
        assert!(narrowed < full);
        press(&mut app, KeyCode::Down);
        assert!(app.palette.active() < narrowed);
    }

    #[test]
    fn typing_in_search_resets_doc_scroll() {
        let (mut app, _dir) = app();
        app.doc_scroll = 7;
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.doc_scroll, 0);
    }

    #[test]
    fn quit_keys_set_flag() {
        let (mut first, _first_dir) = app();
        press(&mut first, KeyCode::Char('q'));
        assert!(first.should_quit);
        let (mut second, _second_dir) = app();
        ctrl(&mut second, 'c');
        assert!(second.should_quit);
    }

    #[test]
    fn q_in_search_is_a_query_character() {
        let (mut app, _dir) = app();
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.filter.query, "q");
    }

    #[test]
    fn reduced_motion_pins_cursor_visible() {
        let (mut app, _dir) = app();
        app.reduced_motion = true;
        for _ in 0..20 {
            app.tick();
            assert!(app.cursor_visible());
        }
    }

    #[test]
    fn cursor_blinks_without_reduced_motion() {
        let (mut app, _dir) = app();
        let mut seen_hidden = false;
        for _ in 0..20 {
            app.tick();
            seen_hidden |= !app.cursor_visible();
        }
        assert!(seen_hidden);
    }

    #[test]
    fn jump_to_docs_resets_scroll() {
        let (mut app, _dir) = app();
        app.doc_scroll = 9;
        app.run_effect(Effect::JumpToDocs);
        assert_eq!(app.doc_scroll, 0);
    }
}
