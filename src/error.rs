use std::path::PathBuf;
use thiserror::Error;

/// Exit code for successful execution and informational actions
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when processing an input fails
pub const EXIT_PROCESSING: i32 = 3;

/// Custom error type for hype
#[derive(Error, Debug)]
pub enum HypeError {
    /// Input could not be read
    #[error("error reading from '{path}': {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// The tokenizer rejected the input
    #[error("error highlighting '{path}': {source}")]
    Highlight {
        #[source]
        source: syntect::Error,
        path: PathBuf,
    },

    /// The output formatter rejected the token stream
    #[error("error rendering output: {0}")]
    Render(#[from] syntect::Error),

    /// Writing to standard output failed
    #[error("error writing output: {0}")]
    Output(#[source] std::io::Error),
}

impl HypeError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HypeError::Io { .. }
            | HypeError::Highlight { .. }
            | HypeError::Render(_)
            | HypeError::Output(_) => EXIT_PROCESSING,
        }
    }
}

impl From<std::io::Error> for HypeError {
    fn from(source: std::io::Error) -> Self {
        HypeError::Output(source)
    }
}
