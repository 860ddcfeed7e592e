//! Error types for calificar.

use std::path::PathBuf;

/// Result type alias for calificar operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in calificar operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred, if known.
        path: Option<PathBuf>,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input contained no usable matrix rows.
    #[error("Empty matrix: {reason}")]
    EmptyMatrix {
        /// Why the input was rejected.
        reason: String,
    },

    /// A matrix line violated the 0/1 wire contract.
    #[error("Malformed matrix at line {line_number}: {reason} (line: {line:?})")]
    MalformedMatrix {
        /// 1-based line number of the offending line.
        line_number: usize,
        /// The offending line, verbatim.
        line: String,
        /// Why the line was rejected.
        reason: String,
    },

    /// Computation-domain edge case with no defined result.
    #[error("Degenerate input: {message}")]
    DegenerateInput {
        /// Description of the degenerate condition.
        message: String,
    },

    /// Serialization or deserialization of a result artifact failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Create an I/O error without path context.
    pub fn io_no_path(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Create an empty matrix error.
    pub fn empty_matrix(reason: impl Into<String>) -> Self {
        Self::EmptyMatrix {
            reason: reason.into(),
        }
    }

    /// Create a malformed matrix error carrying the offending line.
    pub fn malformed_matrix(
        line_number: usize,
        line: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedMatrix {
            line_number,
            line: line.into(),
            reason: reason.into(),
        }
    }

    /// Create a degenerate input error.
    pub fn degenerate_input(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}
