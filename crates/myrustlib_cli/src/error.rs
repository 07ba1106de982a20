//! CLI error type.

use myrustlib_core::CoreError;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The greeting engine rejected the input or configuration.
    #[error(transparent)]
    Greeting(#[from] CoreError),

    /// A C ABI call failed.
    #[error("{call} failed: {message}")]
    Ffi {
        /// Name of the failing function.
        call: &'static str,
        /// Last error reported by the library.
        message: String,
    },

    /// Greetings were still live after the check freed them all.
    #[error("{live} greeting(s) still live after freeing")]
    Leak {
        /// Number of greetings not freed.
        live: usize,
    },

    /// Output could not be serialised.
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
