//! Greeter configuration.

use crate::error::{CoreError, CoreResult};

/// Configuration for a [`crate::Greeter`].
///
/// The defaults accept every name verbatim, which is what the C ABI relies
/// on. Trimming, empty-name rejection and length limits are opt-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreeterConfig {
    /// Word placed before the name.
    pub salutation: String,

    /// Text placed after the name.
    pub punctuation: String,

    /// Longest accepted name in bytes, measured after trimming. `None` means unlimited.
    pub max_name_len: Option<usize>,

    /// Whether to strip surrounding whitespace from names.
    pub trim_whitespace: bool,

    /// Whether an empty name (after trimming, when enabled) is an error.
    pub reject_empty: bool,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            salutation: "Hello".to_string(),
            punctuation: "!".to_string(),
            max_name_len: None,
            trim_whitespace: false,
            reject_empty: false,
        }
    }
}

impl GreeterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the salutation.
    #[must_use]
    pub fn salutation(mut self, value: impl Into<String>) -> Self {
        self.salutation = value.into();
        self
    }

    /// Sets the trailing punctuation.
    #[must_use]
    pub fn punctuation(mut self, value: impl Into<String>) -> Self {
        self.punctuation = value.into();
        self
    }

    /// Limits names to `len` bytes.
    #[must_use]
    pub const fn max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = Some(len);
        self
    }

    /// Sets whether names are trimmed.
    #[must_use]
    pub const fn trim_whitespace(mut self, value: bool) -> Self {
        self.trim_whitespace = value;
        self
    }

    /// Sets whether empty names are rejected.
    #[must_use]
    pub const fn reject_empty(mut self, value: bool) -> Self {
        self.reject_empty = value;
        self
    }

    /// Checks that every greeting this config produces can cross the C boundary.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_name_len == Some(0) {
            return Err(CoreError::invalid_config("max_name_len must be positive"));
        }
        if self.salutation.contains('\0') {
            return Err(CoreError::invalid_config("salutation contains a NUL byte"));
        }
        if self.punctuation.contains('\0') {
            return Err(CoreError::invalid_config("punctuation contains a NUL byte"));
        }
        Ok(())
    }
}
