use std::os::unix::process::CommandExt;
use std::process::{Child, Command, Stdio};

use super::{signal, ProcessError};

/// Spawns external programs with the child-side signal reset applied
/// between fork and exec.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }

    /// Spawn the command and block until it finishes. The exit status is
    /// discarded; only failures of the wait itself are surfaced.
    pub fn run_foreground(&self, argv: &[String]) -> Result<(), ProcessError> {
        let mut child = self.spawn(argv)?;
        child.wait()?;
        Ok(())
    }

    /// Spawn the command without waiting. The caller takes ownership of
    /// the child for job tracking.
    pub fn spawn_background(&self, argv: &[String]) -> Result<Child, ProcessError> {
        self.spawn(argv)
    }

    fn spawn(&self, argv: &[String]) -> Result<Child, ProcessError> {
        let mut command = Command::new(&argv[0]);
        command
            .args(&argv[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Runs in the child after fork, before exec. The shell ignores
        // the job-control signals and the child must not inherit that,
        // or it would be unkillable from the terminal.
        unsafe {
            command.pre_exec(signal::reset_for_child);
        }

        command.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProcessError::CommandNotFound(argv[0].clone())
            } else {
                ProcessError::Io(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::time::{Duration, Instant};

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_foreground_completes() {
        let launcher = ProcessLauncher::new();
        launcher.run_foreground(&argv(&["true"])).unwrap();
    }

    #[test]
    fn test_unknown_program_is_reported() {
        let launcher = ProcessLauncher::new();
        let result = launcher.run_foreground(&argv(&["vena-no-such-program"]));
        match result {
            Err(ProcessError::CommandNotFound(name)) => {
                assert_eq!(name, "vena-no-such-program")
            }
            other => panic!("expected CommandNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_spawn_background_does_not_block() {
        let launcher = ProcessLauncher::new();
        let start = Instant::now();
        let mut child = launcher.spawn_background(&argv(&["sleep", "5"])).unwrap();
        assert!(start.elapsed() < Duration::from_secs(1));

        child.kill().unwrap();
        child.wait().unwrap();
    }

    #[test]
    fn test_child_signals_reset_to_default() {
        // The shell's own disposition ignores SIGINT and SIGQUIT; a child
        // that kills itself with either must still die from it.
        signal::ignore_in_shell().unwrap();

        for (sig, name) in [(libc::SIGINT, "INT"), (libc::SIGQUIT, "QUIT")] {
            let launcher = ProcessLauncher::new();
            let mut child = launcher
                .spawn_background(&argv(&["sh", "-c", &format!("kill -{} $$", name)]))
                .unwrap();
            let status = child.wait().unwrap();
            assert_eq!(status.signal(), Some(sig));
        }

        signal::reset_for_child().unwrap();
    }
}
