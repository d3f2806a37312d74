// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Misuse of the snackbar queue (calls from the wrong thread) fails fast with
//! [`Error::PreconditionViolation`]. Environmental problems such as a surface
//! that is gone are not errors at this level; the surface logs them and keeps
//! the queue moving.

use std::thread::ThreadId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An operation reserved for the designated consumer thread was invoked
    /// from another thread.
    #[error("Precondition Violation: expected consumer thread {expected:?}, called from {actual:?}")]
    PreconditionViolation { expected: ThreadId, actual: ThreadId },

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn precondition_violation_names_both_threads() {
        let expected = std::thread::current().id();
        let actual = std::thread::spawn(|| std::thread::current().id())
            .join()
            .expect("thread panicked");
        let err = Error::PreconditionViolation { expected, actual };

        let message = err.to_string();
        assert!(message.starts_with("Precondition Violation"));
        assert!(message.contains(&format!("{expected:?}")));
        assert!(message.contains(&format!("{actual:?}")));
    }
}
