use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event;
use wordgrid::app::App;
use wordgrid::kernel::settings::{self, Settings};
use wordgrid::tui::crossterm::into_input_event;
use wordgrid::tui::terminal_guard::{install_termination_signals, TerminalGuard};
use wordgrid::ui::backend::terminal::RatatuiTerminal;

mod logging;

/// Frame interval while cells are fading in.
const ANIMATION_POLL: Duration = Duration::from_millis(16);
/// Idle poll, so termination signals are noticed without input.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    let logging = logging::init();
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    let mut settings = load_settings();
    settings.apply_args(std::env::args().skip(1));

    let mut app = App::new(&settings);

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    let _signals = install_termination_signals(guard.restorer(), signal_tx)?;
    let mut terminal = RatatuiTerminal::new(io::stdout())?;

    let mut last_tick = Instant::now();
    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            tracing::info!(?signal, "exiting on signal");
            break;
        }

        if app.needs_redraw() {
            terminal.draw(|backend, area| app.render(backend, area))?;
        }

        let timeout = if app.animating() {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            let input = into_input_event(event::read()?);
            if app.handle_input(&input).is_quit() {
                break;
            }
        }

        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;
    }

    drop(terminal);
    drop(guard);
    tracing::info!("bye");
    Ok(())
}

fn load_settings() -> Settings {
    let path = match settings::ensure_settings_file() {
        Ok(path) => path,
        Err(err) => {
            tracing::warn!(error = %err, "settings file unavailable, using defaults");
            return Settings::default();
        }
    };
    match settings::load_settings_from(&path) {
        Some(settings) => {
            tracing::info!(path = %path.display(), "settings loaded");
            settings
        }
        None => {
            tracing::warn!(path = %path.display(), "using default settings");
            Settings::default()
        }
    }
}
