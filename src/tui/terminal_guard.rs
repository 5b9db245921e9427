use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

/// Terminal mode switches the guard performs.
pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen and mouse capture (motion events included, so
/// hover works without a button held).
#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::event::{EnableBracketedPaste, EnableMouseCapture};
        use crossterm::execute;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )
    }

    fn restore(&self) -> io::Result<()> {
        use crossterm::event::{DisableBracketedPaste, DisableMouseCapture};
        use crossterm::execute;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        // Run every step; report the first failure.
        let raw = disable_raw_mode();
        let screen = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        raw.and(screen)
    }
}

/// Restores the terminal at most once, from whichever thread gets there first.
#[derive(Clone)]
pub struct TerminalRestorer {
    restored: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.restored.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.restored.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        let restorer = TerminalRestorer {
            restored: Arc::new(AtomicBool::new(false)),
            ops,
        };
        if let Err(err) = restorer.ops.setup() {
            // Undo whatever part of setup succeeded.
            let _ = restorer.restore();
            return Err(err);
        }
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Forwards SIGINT/SIGTERM to `tx`. If the main loop has not exited after a
/// grace period the watcher restores the terminal and exits itself.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;
    use std::time::Duration;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("wordgrid-signals".to_string())
        .spawn(move || {
            for sig in signals.forever() {
                let signal = match sig {
                    SIGINT => TerminationSignal::SigInt,
                    SIGTERM => TerminationSignal::SigTerm,
                    _ => continue,
                };
                tracing::info!(?signal, "termination signal");
                let _ = tx.send(signal);

                std::thread::sleep(Duration::from_secs(2));
                let _ = restorer.restore();
                std::process::exit(signal.exit_code());
            }
        })
}

#[cfg(not(unix))]
pub fn install_termination_signals(
    _restorer: TerminalRestorer,
    _tx: Sender<TerminationSignal>,
) -> io::Result<std::thread::JoinHandle<()>> {
    Ok(std::thread::spawn(|| {}))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
