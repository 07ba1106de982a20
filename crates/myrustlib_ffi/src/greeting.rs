//! Greeting FFI functions.

use std::ffi::c_char;
use std::sync::OnceLock;

use myrustlib_core::Greeter;
use tracing::warn;

use crate::error::{clear_last_error, set_last_error, FfiError, MyRustLibResult};
use crate::registry;
use crate::string::{into_raw, read_lossy, release};
use crate::types::MyRustLibStats;

/// ABI version reported by `myrustlib_abi_version`.
pub const ABI_VERSION: u32 = 1;

static GREETER: OnceLock<Greeter> = OnceLock::new();

/// Process-wide greeter behind the C ABI. Its configuration never changes,
/// so the same input always yields the same greeting.
pub(crate) fn greeter() -> &'static Greeter {
    GREETER.get_or_init(Greeter::with_defaults)
}

/// Returns the ABI version so callers can detect mismatched headers.
#[no_mangle]
pub extern "C" fn myrustlib_abi_version() -> u32 {
    ABI_VERSION
}

/// Builds a greeting for `to`.
///
/// # Arguments
///
/// * `to` - Null-terminated name. Borrowed; the caller keeps ownership.
///   Any terminated string is accepted, including the empty one. Bytes that
///   are not UTF-8 appear as U+FFFD in the greeting.
///
/// # Returns
///
/// A newly allocated null-terminated string such as `"Hello, World!"`, owned
/// by the caller and released with `rust_greeting_free`. Returns null only
/// when `to` is null; `myrustlib_get_last_error` then describes the problem.
///
/// # Safety
///
/// `to` must be null or a valid null-terminated string.
#[no_mangle]
pub unsafe extern "C" fn rust_greeting(to: *const c_char) -> *const c_char {
    clear_last_error();

    let result = read_lossy(to, "to")
        .and_then(|name| greeter().greet(&name).map_err(FfiError::from))
        .and_then(into_raw);

    match result {
        Ok(ptr) => {
            registry::register(ptr);
            ptr.cast_const()
        }
        Err(e) => {
            set_last_error(&e);
            std::ptr::null()
        }
    }
}

/// Frees a greeting returned by `rust_greeting`.
///
/// Null is ignored. A pointer that is not a live greeting (already freed,
/// not from this library, or the `hello_from_rust` string) is left
/// untouched and reported through the last error. Detection is by address,
/// so a stale pointer whose address was reused by a newer greeting cannot
/// be told apart from that greeting.
///
/// # Safety
///
/// `ptr` must not be used after a successful free.
#[no_mangle]
pub unsafe extern "C" fn rust_greeting_free(ptr: *mut c_char) {
    clear_last_error();

    if ptr.is_null() {
        return;
    }

    if registry::unregister(ptr) {
        release(ptr);
    } else {
        warn!(?ptr, "refusing to free pointer not owned by myrustlib");
        set_last_error(&FfiError::UnknownPointer);
    }
}

/// Returns the static greeting `"Hello from Rust!"`.
///
/// The string lives for the whole process. Do not free it.
#[no_mangle]
pub extern "C" fn hello_from_rust() -> *const c_char {
    greeter().hello().as_ptr()
}

/// Returns the number of greetings handed out and not yet freed.
#[no_mangle]
pub extern "C" fn myrustlib_live_strings() -> usize {
    registry::live_count()
}

/// Copies the greeting counters into `out`.
///
/// # Safety
///
/// `out` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn myrustlib_stats(out: *mut MyRustLibStats) -> MyRustLibResult {
    clear_last_error();

    if out.is_null() {
        return set_last_error(&FfiError::NullPointer("out"));
    }

    *out = MyRustLibStats::new(greeter().stats(), registry::live_count());
    MyRustLibResult::Ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{myrustlib_get_last_error, myrustlib_last_error_code};
    use std::ffi::{CStr, CString};

    #[test]
    fn abi_version() {
        assert_eq!(myrustlib_abi_version(), 1);
    }

    #[test]
    fn greeting_lifecycle() {
        let name = CString::new("World").unwrap();

        unsafe {
            let ptr = rust_greeting(name.as_ptr());
            assert!(!ptr.is_null());
            assert!(myrustlib_get_last_error().is_null());
            assert!(registry::is_live(ptr));
            assert_eq!(CStr::from_ptr(ptr).to_str().unwrap(), "Hello, World!");

            rust_greeting_free(ptr as *mut c_char);
            assert!(!registry::is_live(ptr));
            assert!(myrustlib_get_last_error().is_null());
        }
    }

    #[test]
    fn empty_name_is_greeted() {
        let name = CString::new("").unwrap();

        unsafe {
            let ptr = rust_greeting(name.as_ptr());
            assert!(!ptr.is_null());
            assert_eq!(CStr::from_ptr(ptr).to_str().unwrap(), "Hello, !");
            rust_greeting_free(ptr as *mut c_char);
        }
    }

    #[test]
    fn null_name() {
        let ptr = unsafe { rust_greeting(std::ptr::null()) };
        assert!(ptr.is_null());
        assert_eq!(myrustlib_last_error_code(), MyRustLibResult::NullPointer);
    }

    #[test]
    fn free_null_is_noop() {
        unsafe { rust_greeting_free(std::ptr::null_mut()) };
        assert!(myrustlib_get_last_error().is_null());
    }

    #[test]
    fn hello_is_stable() {
        let first = hello_from_rust();
        let second = hello_from_rust();
        assert!(!first.is_null());
        assert_eq!(first, second);

        let text = unsafe { CStr::from_ptr(first) };
        assert_eq!(text.to_str().unwrap(), "Hello from Rust!");
    }

    #[test]
    fn freeing_hello_is_refused() {
        unsafe { rust_greeting_free(hello_from_rust() as *mut c_char) };
        assert_eq!(myrustlib_last_error_code(), MyRustLibResult::InvalidArgument);

        let text = unsafe { CStr::from_ptr(hello_from_rust()) };
        assert_eq!(text.to_str().unwrap(), "Hello from Rust!");
    }

    #[test]
    fn stats_null_out() {
        let code = unsafe { myrustlib_stats(std::ptr::null_mut()) };
        assert_eq!(code, MyRustLibResult::NullPointer);
    }
}
