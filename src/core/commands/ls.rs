use super::{Command, CommandError};
use crate::process::launcher::ProcessLauncher;

/// Dispatched as a builtin name, but the listing itself comes from the
/// external `ls` program: a pass-through spawn with a foreground wait.
#[derive(Debug, Clone, Copy)]
pub struct LsCommand {
    launcher: ProcessLauncher,
}

impl LsCommand {
    pub fn new(launcher: ProcessLauncher) -> Self {
        Self { launcher }
    }
}

impl Command for LsCommand {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        let mut argv = Vec::with_capacity(args.len() + 1);
        argv.push("ls".to_string());
        argv.extend(args.iter().cloned());

        self.launcher
            .run_foreground(&argv)
            .map_err(CommandError::ProcessError)
    }
}
