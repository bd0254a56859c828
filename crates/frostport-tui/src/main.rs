#![forbid(unsafe_code)]

//! Frostport portal binary entry point.

use std::env;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use frostport_core::locale::resolve_locale;
use frostport_core::theme::{ThemeMode, detect_system_theme, reduced_motion};
use frostport_tui::app::App;
use frostport_tui::cli;
use frostport_tui::logging;
use frostport_tui::prefs::{PrefsStore, default_path};
use frostport_tui::view;
use frostport_tui::viewsync::TerminalGuard;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() {
    let opts = cli::Opts::parse();
    logging::init_from_env();

    let store = PrefsStore::new(default_path(opts.prefs.as_deref()));
    let saved = store.load();

    let env_lang = env::var("LC_ALL").or_else(|_| env::var("LANG")).ok();
    let locale = resolve_locale(
        opts.lang.as_deref(),
        saved.locale.as_deref(),
        env_lang.as_deref(),
    );
    let theme_mode = opts
        .theme
        .as_deref()
        .and_then(ThemeMode::parse)
        .or_else(|| saved.theme.as_deref().and_then(ThemeMode::parse))
        .unwrap_or_default();
    let system_theme = detect_system_theme(env::var("COLORFGBG").ok().as_deref());

    let mut app = App::new(locale, theme_mode, system_theme, store);
    app.reduced_motion = reduced_motion(env::var("FROSTPORT_REDUCED_MOTION").ok().as_deref());
    if let Err(e) = run(app) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}

fn run(mut app: App) -> io::Result<()> {
    let mut guard = TerminalGuard::acquire()?;
    tracing::info!(locale = app.locale.as_str(), "portal started");

    while !app.should_quit {
        app.tick();
        let (width, height) = terminal::size()?;
        view::draw(guard.writer(), &app, width, height)?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(..) => {}
                _ => {}
            }
        }
    }

    tracing::info!("portal exiting");
    Ok(())
}
