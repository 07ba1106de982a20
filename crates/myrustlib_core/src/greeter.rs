//! Greeting construction.

use std::ffi::CStr;

use tracing::debug;

use crate::config::GreeterConfig;
use crate::error::{CoreError, CoreResult};
use crate::stats::{GreeterStats, StatsSnapshot};

/// The input-free greeting. Lives for the whole process.
pub const HELLO_MESSAGE: &CStr = c"Hello from Rust!";

/// Builds greetings from a validated [`GreeterConfig`].
///
/// A greeter is immutable apart from its counters, so one instance can be
/// shared between threads.
#[derive(Debug)]
pub struct Greeter {
    config: GreeterConfig,
    stats: GreeterStats,
}

impl Greeter {
    /// Creates a greeter, rejecting configurations that could not produce a C string.
    pub fn new(config: GreeterConfig) -> CoreResult<Self> {
        config.validate()?;
        debug!(
            salutation = %config.salutation,
            max_name_len = ?config.max_name_len,
            trim = config.trim_whitespace,
            "greeter created"
        );
        Ok(Self {
            config,
            stats: GreeterStats::new(),
        })
    }

    /// Creates a greeter with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: GreeterConfig::default(),
            stats: GreeterStats::new(),
        }
    }

    /// Builds the greeting for `name`.
    ///
    /// The result is `"{salutation}, {name}{punctuation}"` and contains no
    /// NUL bytes. With the default configuration every NUL-free name,
    /// including the empty one, is accepted verbatim.
    pub fn greet(&self, name: &str) -> CoreResult<String> {
        match self.normalize(name) {
            Ok(name) => {
                let greeting = format!(
                    "{}, {}{}",
                    self.config.salutation, name, self.config.punctuation
                );
                self.stats.record_greeting(greeting.len() as u64);
                Ok(greeting)
            }
            Err(err) => {
                debug!(error = %err, "name rejected");
                self.stats.record_rejected();
                Err(err)
            }
        }
    }

    /// Returns the static greeting.
    pub fn hello(&self) -> &'static CStr {
        HELLO_MESSAGE
    }

    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    fn normalize<'a>(&self, name: &'a str) -> CoreResult<&'a str> {
        let name = if self.config.trim_whitespace {
            name.trim()
        } else {
            name
        };
        if self.config.reject_empty && name.is_empty() {
            return Err(CoreError::EmptyName);
        }
        if let Some(max) = self.config.max_name_len {
            if name.len() > max {
                return Err(CoreError::name_too_long(name.len(), max));
            }
        }
        CoreError::check_nul(name)?;
        Ok(name)
    }
}

impl Default for Greeter {
    fn default() -> Self {
        Self::with_defaults()
    }
}
