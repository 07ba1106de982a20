//! Error types for the greeting engine.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while building a greeting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The name was empty (after trimming, when enabled).
    #[error("name must not be empty")]
    EmptyName,

    /// The name exceeded the configured limit.
    #[error("name too long: {len} bytes, limit is {max}")]
    NameTooLong {
        /// Length of the rejected name in bytes.
        len: usize,
        /// Configured maximum in bytes.
        max: usize,
    },

    /// The text contains a NUL byte and cannot become a C string.
    #[error("interior NUL byte at offset {position}")]
    InteriorNul {
        /// Byte offset of the first NUL.
        position: usize,
    },

    /// The greeter configuration is unusable.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem.
        message: String,
    },
}

impl CoreError {
    /// Creates a name-too-long error.
    pub fn name_too_long(len: usize, max: usize) -> Self {
        Self::NameTooLong { len, max }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Checks `text` for a NUL byte.
    pub fn check_nul(text: &str) -> CoreResult<()> {
        match text.bytes().position(|b| b == 0) {
            Some(position) => Err(Self::InteriorNul { position }),
            None => Ok(()),
        }
    }
}
