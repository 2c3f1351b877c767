//! What to do with the pid the compositor reported

use std::io::Write;

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;

use crate::error::ActionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the pid
    Report,
    /// Send SIGKILL to the pid
    Kill,
}

/// Print `pid`, or kill it in [`Mode::Kill`]
///
/// A pid of zero or less is the compositor's "unknown owner" sentinel and is
/// never signalled.
pub fn act_on_pid<W: Write>(pid: i32, mode: Mode, out: &mut W) -> Result<(), ActionError> {
    if pid <= 0 {
        writeln!(out, "Client PID: UNKNOWN")?;
        return Ok(());
    }

    match mode {
        Mode::Kill => {
            kill(Pid::from_raw(pid), Signal::SIGKILL)
                .map_err(|source| ActionError::Signal { pid, source })?;
            tracing::debug!(pid, "Sent SIGKILL");
            writeln!(out, "Sent SIGKILL to PID: {}", pid)?;
        }
        Mode::Report => {
            writeln!(out, "Client PID: {}", pid)?;
        }
    }

    Ok(())
}
