//! Conversions between Rust strings and caller-owned C strings.

use std::borrow::Cow;
use std::ffi::{c_char, CStr, CString};

use myrustlib_core::CoreError;

use crate::error::FfiError;

/// Reads a caller-provided C string.
///
/// Any terminated byte sequence is accepted; bytes that are not UTF-8 are
/// replaced with U+FFFD. Only a null pointer is an error.
///
/// # Safety
///
/// `ptr` must be null or point to a null-terminated buffer that stays
/// valid and unmodified for `'a`.
pub(crate) unsafe fn read_lossy<'a>(
    ptr: *const c_char,
    arg: &'static str,
) -> Result<Cow<'a, str>, FfiError> {
    if ptr.is_null() {
        return Err(FfiError::NullPointer(arg));
    }
    Ok(CStr::from_ptr(ptr).to_string_lossy())
}

/// Hands `s` to the caller as a null-terminated buffer.
///
/// The buffer must come back through [`release`].
pub(crate) fn into_raw(s: String) -> Result<*mut c_char, FfiError> {
    let cstring = CString::new(s).map_err(|e| CoreError::InteriorNul {
        position: e.nul_position(),
    })?;
    Ok(cstring.into_raw())
}

/// Frees a buffer produced by [`into_raw`].
///
/// # Safety
///
/// `ptr` must come from [`into_raw`] and must not have been released before.
pub(crate) unsafe fn release(ptr: *mut c_char) {
    drop(CString::from_raw(ptr));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_valid() {
        let owned = CString::new("hello").unwrap();
        // Safety: owned outlives the borrow
        let s = unsafe { read_lossy(owned.as_ptr(), "to") }.unwrap();
        assert!(matches!(s, Cow::Borrowed("hello")));
    }

    #[test]
    fn read_empty() {
        let owned = CString::new("").unwrap();
        let s = unsafe { read_lossy(owned.as_ptr(), "to") }.unwrap();
        assert_eq!(s, "");
    }

    #[test]
    fn read_null() {
        let err = unsafe { read_lossy(std::ptr::null(), "to") }.unwrap_err();
        assert!(matches!(err, FfiError::NullPointer("to")));
    }

    #[test]
    fn read_invalid_utf8_is_lossy() {
        let owned = CString::new(vec![b'J', b'o', 0xE9]).unwrap();
        let s = unsafe { read_lossy(owned.as_ptr(), "to") }.unwrap();
        assert_eq!(s, "Jo\u{FFFD}");
    }

    #[test]
    fn raw_round_trip() {
        let ptr = into_raw("greeting".to_string()).unwrap();
        assert!(!ptr.is_null());

        // Safety: we just created it
        let s = unsafe { CStr::from_ptr(ptr) };
        assert_eq!(s.to_str().unwrap(), "greeting");

        unsafe { release(ptr) };
    }

    #[test]
    fn raw_with_nul_fails() {
        let err = into_raw("hello\0world".to_string()).unwrap_err();
        assert!(matches!(
            err,
            FfiError::Core(CoreError::InteriorNul { position: 5 })
        ));
    }
}
