use std::env;

use super::{Command, CommandError};

#[derive(Debug, Clone, Copy)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _args: &[String]) -> Result<(), CommandError> {
        let cwd = env::current_dir()
            .map_err(|e| CommandError::ExecutionError(format!("pwd: {}", e)))?;
        println!("{}", cwd.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pwd_succeeds() {
        let cmd = PwdCommand::new();
        assert!(cmd.execute(&[]).is_ok());
    }
}
