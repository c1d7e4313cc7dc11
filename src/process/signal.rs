use libc::{SIGINT, SIGQUIT, SIGTSTP, SIGTTIN, SIGTTOU, SIG_DFL, SIG_IGN};

use super::ProcessError;

/// The signals terminal-driven job control delivers to the foreground
/// process group.
const JOB_CONTROL_SIGNALS: [libc::c_int; 5] = [SIGINT, SIGQUIT, SIGTSTP, SIGTTIN, SIGTTOU];

/// Make the shell itself immune to job-control signals. Installed once
/// at startup, so a Ctrl-C aimed at a foreground child never takes the
/// shell down with it.
pub fn ignore_in_shell() -> Result<(), ProcessError> {
    for sig in JOB_CONTROL_SIGNALS {
        let previous = unsafe { libc::signal(sig, SIG_IGN) };
        if previous == libc::SIG_ERR {
            return Err(ProcessError::SignalError(format!(
                "failed to ignore signal {}",
                sig
            )));
        }
    }
    Ok(())
}

/// Restore default dispositions for all job-control signals. Runs in a
/// freshly forked child before exec, so the spawned program starts out
/// exactly as if it had been launched from a signal-default shell.
/// Restricted to async-signal-safe calls.
pub fn reset_for_child() -> std::io::Result<()> {
    for sig in JOB_CONTROL_SIGNALS {
        let previous = unsafe { libc::signal(sig, SIG_DFL) };
        if previous == libc::SIG_ERR {
            return Err(std::io::Error::last_os_error());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispositions_install_cleanly() {
        ignore_in_shell().unwrap();
        reset_for_child().unwrap();
    }
}
