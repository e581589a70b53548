//! # Responder Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Responder crate.
//! There are two layers:
//! - `ResponderError`: A `thiserror` enum describing what went wrong while reading
//!   or parsing a response source, or while validating configuration.
//! - `Result<T>`: A type alias for `anyhow::Result<T>` used by application-level
//!   code (configuration loading, command handlers, `main`).
//!
//! The source parsers return `SourceResult<T>` instead of the anyhow alias so that
//! callers can match on the exact failure kind. The Responder facade relies on
//! this to tell a malformed default-response source apart from an unreadable one.
//!
//! ## Examples
//!
//! ```rust
//! use responder::core::error::ResponderError;
//! use responder::responder::defaults::parse_default_responses;
//! use std::io::Cursor;
//! use std::path::Path;
//!
//! let source = Cursor::new("A\n\n\nB\n");
//! match parse_default_responses(source, Path::new("default.txt")) {
//!     Err(ResponderError::MalformedDefaultSection { line, .. }) => assert_eq!(line, 3),
//!     other => panic!("unexpected outcome: {:?}", other),
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Message carried by `MalformedDefaultSection` when blank lines repeat.
pub const CONSECUTIVE_BLANK_LINES: &str = "Two or more consecutive blank lines detected";

/// Custom error type for the Responder crate.
// No PartialEq: `std::io::Error` does not implement it.
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("Failed to read source '{}': {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed default responses in '{}' at line {line}: {message}", .path.display())]
    MalformedDefaultSection {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ResponderError {
    /// Wraps an I/O failure for the source at `path`.
    pub fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ResponderError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// Result of reading or parsing a response source.
pub type SourceResult<T> = std::result::Result<T, ResponderError>;

/// Type alias for Result using anyhow::Error for application-level code.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let config_err = ResponderError::Config("Empty fallback response".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Empty fallback response"
        );

        let malformed = ResponderError::MalformedDefaultSection {
            path: PathBuf::from("default.txt"),
            line: 4,
            message: CONSECUTIVE_BLANK_LINES.to_string(),
        };
        assert_eq!(
            malformed.to_string(),
            "Malformed default responses in 'default.txt' at line 4: \
             Two or more consecutive blank lines detected"
        );
    }

    #[test]
    fn test_unavailable_keeps_io_source() {
        let err = ResponderError::unavailable(
            "responses.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().starts_with("Failed to read source 'responses.txt'"));
        let source = std::error::Error::source(&err).expect("io error should be the source");
        assert_eq!(source.to_string(), "no such file");
    }
}
