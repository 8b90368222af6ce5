use thiserror::Error;

/// Unified error type for workspace-status operations
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Query `{command}` failed: {}", describe_code(.code))]
    QueryFailed { command: String, code: Option<i32> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in workspace-status
pub type Result<T> = std::result::Result<T, StatusError>;

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl StatusError {
    /// Create a query failure for the given command line
    pub fn query_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        StatusError::QueryFailed {
            command: command.into(),
            code,
        }
    }
}
