//! Plain-data types shared with C callers.

use myrustlib_core::StatsSnapshot;

/// Greeting statistics snapshot.
///
/// Filled by `myrustlib_stats()`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MyRustLibStats {
    /// Number of greetings produced by `rust_greeting`.
    pub greetings: u64,
    /// Number of names rejected.
    pub rejected: u64,
    /// Total bytes of produced greetings, without terminators.
    pub bytes_out: u64,
    /// Greetings returned to callers and not yet freed.
    pub live_strings: u64,
}

impl MyRustLibStats {
    /// Builds the C view from a core snapshot and the live-string count.
    pub fn new(snapshot: StatsSnapshot, live_strings: usize) -> Self {
        Self {
            greetings: snapshot.greetings,
            rejected: snapshot.rejected,
            bytes_out: snapshot.bytes_out,
            live_strings: live_strings as u64,
        }
    }
}
