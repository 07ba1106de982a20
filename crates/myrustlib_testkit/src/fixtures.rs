//! C string fixtures.

use std::ffi::{c_char, CStr, CString};

/// Builds a `CString` from test input.
///
/// # Panics
///
/// Panics if `s` contains a NUL byte.
pub fn c_string(s: &str) -> CString {
    CString::new(s).expect("test string must not contain NUL")
}

/// Builds a null-terminated buffer from arbitrary bytes, e.g. invalid UTF-8.
///
/// # Panics
///
/// Panics if `bytes` contains a NUL byte.
pub fn c_bytes(bytes: &[u8]) -> CString {
    CString::new(bytes.to_vec()).expect("test bytes must not contain NUL")
}

/// Copies a C string returned across the ABI into an owned `String`.
///
/// # Panics
///
/// Panics if `ptr` is null or the contents are not UTF-8.
///
/// # Safety
///
/// `ptr` must point to a valid null-terminated buffer.
#[allow(unsafe_code)]
pub unsafe fn read_c_str(ptr: *const c_char) -> String {
    assert!(!ptr.is_null(), "expected a non-null C string");
    CStr::from_ptr(ptr)
        .to_str()
        .expect("C string must be UTF-8")
        .to_owned()
}
