use super::*;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
    fail_setup: bool,
}

impl RecordingOps {
    fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

impl TerminalOps for RecordingOps {
    fn setup(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        if self.fail_setup {
            return Err(io::Error::new(io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

#[test]
fn drop_restores_the_terminal() {
    let ops = Arc::new(RecordingOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        assert_eq!(ops.calls(), vec!["setup"]);
    }
    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn restore_runs_once() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    assert!(restorer.is_restored());
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn failed_setup_is_undone() {
    let ops = Arc::new(RecordingOps {
        fail_setup: true,
        ..RecordingOps::default()
    });
    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(ops.calls(), vec!["setup", "restore"]);
}

#[test]
fn signal_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}
