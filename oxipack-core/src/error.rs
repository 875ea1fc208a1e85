//! Error types for OxiPack operations.
//!
//! Every codec operation is a pure function over an in-memory buffer and
//! reports failures through [`OxiPackError`]. The variants form a small,
//! closed taxonomy so callers can tell bad input from a damaged artifact.

use std::io;
use thiserror::Error;

/// The main error type for OxiPack operations.
#[derive(Debug, Error)]
pub enum OxiPackError {
    /// Operation invoked on input it cannot process (e.g. empty data where
    /// at least one symbol is required).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what was wrong with the input.
        message: String,
    },

    /// A persisted artifact violates its structural invariants.
    #[error("Corrupt archive: {message}")]
    CorruptArchive {
        /// Description of the violated invariant.
        message: String,
    },

    /// An LZ77 back-reference points outside the bytes emitted so far.
    #[error("Invalid back-reference distance: {distance} outside history of {history_size} bytes")]
    CorruptData {
        /// The offending distance.
        distance: usize,
        /// Number of bytes in the output when the reference was replayed.
        history_size: usize,
    },

    /// I/O error from the collaborator performing file access.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for OxiPack operations.
pub type Result<T> = std::result::Result<T, OxiPackError>;

/// Fieldless category of an [`OxiPackError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`OxiPackError::InvalidInput`].
    InvalidInput,
    /// See [`OxiPackError::CorruptArchive`].
    CorruptArchive,
    /// See [`OxiPackError::CorruptData`].
    CorruptData,
    /// See [`OxiPackError::Io`].
    Io,
}

impl OxiPackError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a corrupt archive error.
    pub fn corrupt_archive(message: impl Into<String>) -> Self {
        Self::CorruptArchive {
            message: message.into(),
        }
    }

    /// Create a corrupt data error for an out-of-range back-reference.
    pub fn corrupt_data(distance: usize, history_size: usize) -> Self {
        Self::CorruptData {
            distance,
            history_size,
        }
    }

    /// Get the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::CorruptArchive { .. } => ErrorKind::CorruptArchive,
            Self::CorruptData { .. } => ErrorKind::CorruptData,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OxiPackError::invalid_input("empty data");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("empty data"));

        let err = OxiPackError::corrupt_archive("table length mismatch");
        assert!(err.to_string().contains("Corrupt archive"));

        let err = OxiPackError::corrupt_data(9, 4);
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            OxiPackError::invalid_input("x").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            OxiPackError::corrupt_archive("x").kind(),
            ErrorKind::CorruptArchive
        );
        assert_eq!(OxiPackError::corrupt_data(1, 0).kind(), ErrorKind::CorruptData);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: OxiPackError = io_err.into();
        assert!(matches!(err, OxiPackError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
