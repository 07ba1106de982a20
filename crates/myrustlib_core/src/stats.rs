//! Greeter usage counters.
//!
//! All counters are atomic and can be read while greetings are being built
//! on other threads.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live usage counters for a [`crate::Greeter`].
#[derive(Debug, Default)]
pub struct GreeterStats {
    /// Number of greetings produced.
    greetings: AtomicU64,
    /// Number of names rejected by validation.
    rejected: AtomicU64,
    /// Total bytes of produced greetings, without terminators.
    bytes_out: AtomicU64,
}

impl GreeterStats {
    /// Creates a zeroed stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_greeting(&self, bytes: u64) {
        self.greetings.fetch_add(1, Ordering::Relaxed);
        self.bytes_out.fetch_add(bytes, Ordering::Relaxed);
    }

    pub(crate) fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the number of greetings produced.
    pub fn greetings(&self) -> u64 {
        self.greetings.load(Ordering::Relaxed)
    }

    /// Returns the number of rejected names.
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Returns the total bytes produced.
    pub fn bytes_out(&self) -> u64 {
        self.bytes_out.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            greetings: self.greetings(),
            rejected: self.rejected(),
            bytes_out: self.bytes_out(),
        }
    }
}

/// A point-in-time copy of [`GreeterStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatsSnapshot {
    /// Number of greetings produced.
    pub greetings: u64,
    /// Number of rejected names.
    pub rejected: u64,
    /// Total bytes produced.
    pub bytes_out: u64,
}
