use std::sync::{Arc, Mutex};

use super::{Command, CommandError};
use crate::input::History;

#[derive(Clone)]
pub struct HistoryCommand {
    history: Arc<Mutex<History>>,
}

impl HistoryCommand {
    pub fn new(history: Arc<Mutex<History>>) -> Self {
        Self { history }
    }
}

impl Command for HistoryCommand {
    fn execute(&self, _args: &[String]) -> Result<(), CommandError> {
        let history = self
            .history
            .lock()
            .map_err(|_| CommandError::ExecutionError("Failed to lock history".to_string()))?;

        if history.is_empty() {
            println!("No history yet.");
            return Ok(());
        }

        for (index, line) in history.entries().iter().enumerate() {
            println!("{:5}  {}", index + 1, line);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_lists_without_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut history = History::new(dir.path().join("history"), 100).unwrap();
        history.add("ls -a").unwrap();
        history.add("pwd").unwrap();

        let cmd = HistoryCommand::new(Arc::new(Mutex::new(history)));
        assert!(cmd.execute(&[]).is_ok());
    }

    #[test]
    fn test_empty_history_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let history = History::new(dir.path().join("history"), 100).unwrap();

        let cmd = HistoryCommand::new(Arc::new(Mutex::new(history)));
        assert!(cmd.execute(&[]).is_ok());
    }
}
