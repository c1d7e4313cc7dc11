use std::env;

use super::{Command, CommandError};
use crate::path::PathExpander;

#[derive(Debug, Clone, Copy)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        // no argument means home, same as a bare `~`
        let target = args.first().map(String::as_str).unwrap_or("~");
        let expanded = self
            .path_expander
            .expand(target)
            .map_err(|e| CommandError::ExecutionError(e.to_string()))?;

        env::set_current_dir(&expanded).map_err(|e| {
            CommandError::ExecutionError(format!("cd: {}: {}", expanded.display(), e))
        })
    }
}
