/// Envsift error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// Output stream failure
    #[error("io error: {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// printf delegation failure (spawn, wait, or exit status)
    #[error("quote error: {message}")]
    Quote { message: String },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using envsift Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Matching entries (possibly none) were emitted
    Success = 0,
    /// Runtime failure: subprocess or output stream
    Failure = 1,
    /// Bad command-line usage
    UsageError = 2,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Argument(_) => ExitCode::UsageError,
            Error::Io { .. } | Error::Quote { .. } | Error::Internal(_) => ExitCode::Failure,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
