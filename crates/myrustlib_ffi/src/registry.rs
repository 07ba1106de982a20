//! Registry of greetings currently owned by callers.
//!
//! Every pointer handed out by `rust_greeting` is recorded here and removed
//! when it comes back through `rust_greeting_free`. A free of anything not in
//! the set (a double free, a foreign pointer, the static `hello_from_rust`
//! string) is refused instead of reaching the allocator.
//!
//! Entries are addresses, so detection is best-effort: once the allocator
//! reuses a freed address for a new greeting, a stale free of the old
//! pointer releases the new one.

use std::collections::BTreeSet;
use std::ffi::c_char;

use parking_lot::{const_mutex, Mutex};

static LIVE: Mutex<BTreeSet<usize>> = const_mutex(BTreeSet::new());

/// Records `ptr` as owned by a caller.
pub(crate) fn register(ptr: *const c_char) {
    LIVE.lock().insert(ptr as usize);
}

/// Removes `ptr`, returning whether it was live.
///
/// Only one caller can win the removal, so concurrent double frees release
/// the buffer at most once.
pub(crate) fn unregister(ptr: *const c_char) -> bool {
    LIVE.lock().remove(&(ptr as usize))
}

/// Returns whether `ptr` is a live greeting.
pub fn is_live(ptr: *const c_char) -> bool {
    LIVE.lock().contains(&(ptr as usize))
}

/// Number of greetings not yet freed.
pub fn live_count() -> usize {
    LIVE.lock().len()
}
