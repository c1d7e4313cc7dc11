use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

mod cd;
mod exit;
mod history;
mod ls;
mod pwd;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use history::HistoryCommand;
pub use ls::LsCommand;
pub use pwd::PwdCommand;

use crate::input::History;
use crate::process::launcher::ProcessLauncher;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum CommandError {
    ExecutionError(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

pub trait Command {
    fn execute(&self, args: &[String]) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
    History(HistoryCommand),
    Ls(LsCommand),
    Pwd(PwdCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String]) -> Result<(), CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args),
            CommandType::Exit(cmd) => cmd.execute(args),
            CommandType::History(cmd) => cmd.execute(args),
            CommandType::Ls(cmd) => cmd.execute(args),
            CommandType::Pwd(cmd) => cmd.execute(args),
        }
    }
}

/// Fixed name-to-handler table, built once at startup and read-only
/// during dispatch.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<String, CommandType>,
}

impl BuiltinRegistry {
    pub fn new(history: Arc<Mutex<History>>, launcher: ProcessLauncher) -> Self {
        let mut commands = BTreeMap::new();

        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert(
            "history".to_string(),
            CommandType::History(HistoryCommand::new(history)),
        );
        commands.insert("ls".to_string(), CommandType::Ls(LsCommand::new(launcher)));
        commands.insert("pwd".to_string(), CommandType::Pwd(PwdCommand::new()));

        Self { commands }
    }

    /// First-token dispatch: `None` when the name is no builtin (and
    /// nothing ran), so the caller falls through to the launcher. A
    /// failing builtin still counts as handled and carries its error.
    pub fn dispatch(&self, program: &str, args: &[String]) -> Option<Result<(), CommandError>> {
        self.commands.get(program).map(|cmd| cmd.execute(args))
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_registry() -> (BuiltinRegistry, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let history = History::new(dir.path().join("history"), 100).unwrap();
        let registry =
            BuiltinRegistry::new(Arc::new(Mutex::new(history)), ProcessLauncher::new());
        (registry, dir)
    }

    #[test]
    fn test_builtin_names_are_registered() {
        let (registry, _dir) = setup_registry();

        for name in ["exit", "cd", "pwd", "history", "ls"] {
            assert!(registry.is_builtin(name), "{} should be a builtin", name);
        }
        assert!(!registry.is_builtin("cat"));
        assert!(!registry.is_builtin(""));
        // matching is exact and case-sensitive
        assert!(!registry.is_builtin("CD"));
        assert!(!registry.is_builtin("exit "));
    }

    #[test]
    fn test_dispatch_unknown_name_is_not_handled() {
        let (registry, _dir) = setup_registry();
        assert!(registry.dispatch("not-a-builtin", &[]).is_none());
    }

    #[test]
    fn test_dispatch_runs_builtin() {
        let (registry, _dir) = setup_registry();
        let result = registry.dispatch("pwd", &[]);
        assert!(matches!(result, Some(Ok(()))));
    }

    #[test]
    fn test_failing_builtin_is_still_handled() {
        let (registry, _dir) = setup_registry();
        let result = registry.dispatch("cd", &["/vena/no/such/dir".to_string()]);
        assert!(matches!(result, Some(Err(_))));
    }
}
