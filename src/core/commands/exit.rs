use super::{Command, CommandError};

#[derive(Debug, Clone, Copy)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    /// Ends the session with status 0. History is already on disk (it is
    /// appended per line), so there is nothing left to flush.
    fn execute(&self, _args: &[String]) -> Result<(), CommandError> {
        std::process::exit(0);
    }
}
