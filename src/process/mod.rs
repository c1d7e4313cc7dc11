use std::fmt;

pub mod jobs;
pub mod launcher;
pub mod signal;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    SignalError(String),
    Io(std::io::Error),
}

impl From<std::io::Error> for ProcessError {
    fn from(e: std::io::Error) -> Self {
        ProcessError::Io(e)
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "command not found: {}", cmd),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
            ProcessError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
