use thiserror::Error;

/// Main error type for linedex operations
#[derive(Error, Debug)]
pub enum LinedexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid record count: {0}")]
    InvalidRecordCount(String),
}

/// Result type alias for linedex operations
pub type Result<T> = std::result::Result<T, LinedexError>;

impl LinedexError {
    /// Check if this error came from user input, so the console loop can
    /// report it and keep prompting instead of shutting down
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            LinedexError::UnknownStrategy(_) | LinedexError::InvalidRecordCount(_)
        )
    }
}
