//! Error codes and last-error reporting.

use std::cell::{Cell, RefCell};
use std::ffi::CString;

use myrustlib_core::CoreError;
use thiserror::Error;

/// Result code for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MyRustLibResult {
    /// Operation succeeded.
    Ok = 0,
    /// Generic error.
    Error = 1,
    /// Invalid argument.
    InvalidArgument = 2,
    /// Null pointer.
    NullPointer = 3,
}

impl MyRustLibResult {
    /// Returns true if the result indicates success.
    pub fn is_ok(self) -> bool {
        self == MyRustLibResult::Ok
    }

    /// Returns true if the result indicates an error.
    pub fn is_err(self) -> bool {
        self != MyRustLibResult::Ok
    }
}

/// Error code type for C compatibility.
pub type ErrorCode = i32;

impl From<MyRustLibResult> for ErrorCode {
    fn from(result: MyRustLibResult) -> Self {
        result as ErrorCode
    }
}

impl From<ErrorCode> for MyRustLibResult {
    fn from(code: ErrorCode) -> Self {
        match code {
            0 => MyRustLibResult::Ok,
            2 => MyRustLibResult::InvalidArgument,
            3 => MyRustLibResult::NullPointer,
            _ => MyRustLibResult::Error,
        }
    }
}

/// Failures raised at the ABI boundary.
#[derive(Debug, Error)]
pub enum FfiError {
    /// A required pointer argument was null.
    #[error("null pointer argument: {0}")]
    NullPointer(&'static str),

    /// The pointer was not returned by `rust_greeting`, or was already freed.
    #[error("pointer was not allocated by rust_greeting or was already freed")]
    UnknownPointer,

    /// The greeting engine rejected the input.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FfiError {
    /// Maps the error to its C result code.
    pub fn code(&self) -> MyRustLibResult {
        match self {
            FfiError::NullPointer(_) => MyRustLibResult::NullPointer,
            FfiError::UnknownPointer | FfiError::Core(_) => MyRustLibResult::InvalidArgument,
        }
    }
}

// Thread-local storage for the last error
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
    static LAST_CODE: Cell<MyRustLibResult> = const { Cell::new(MyRustLibResult::Ok) };
}

/// Records `err` as the last error and returns its code.
pub fn set_last_error(err: &FfiError) -> MyRustLibResult {
    let code = err.code();
    let msg = CString::new(err.to_string()).ok();
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = msg;
    });
    LAST_CODE.with(|c| c.set(code));
    code
}

/// Clears the last error.
pub fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
    LAST_CODE.with(|c| c.set(MyRustLibResult::Ok));
}

/// Gets the last error message as a C string.
///
/// Returns null if the last call on this thread succeeded.
///
/// # Lifetime
///
/// The returned pointer is valid until the next FFI call on this thread.
#[no_mangle]
pub extern "C" fn myrustlib_get_last_error() -> *const std::ffi::c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(cstr) => cstr.as_ptr(),
        None => std::ptr::null(),
    })
}

/// Gets the result code of the last failed call on this thread.
#[no_mangle]
pub extern "C" fn myrustlib_last_error_code() -> MyRustLibResult {
    LAST_CODE.with(Cell::get)
}

/// Clears the last error message.
#[no_mangle]
pub extern "C" fn myrustlib_clear_error() {
    clear_last_error();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_codes() {
        assert_eq!(MyRustLibResult::Ok as i32, 0);
        assert_eq!(MyRustLibResult::Error as i32, 1);
        assert_eq!(MyRustLibResult::InvalidArgument as i32, 2);
        assert_eq!(MyRustLibResult::NullPointer as i32, 3);
        assert!(MyRustLibResult::Ok.is_ok());
        assert!(MyRustLibResult::Error.is_err());
    }

    #[test]
    fn error_code_conversion() {
        let code: ErrorCode = MyRustLibResult::NullPointer.into();
        assert_eq!(code, 3);

        let back: MyRustLibResult = code.into();
        assert_eq!(back, MyRustLibResult::NullPointer);

        assert_eq!(MyRustLibResult::from(99), MyRustLibResult::Error);
    }

    #[test]
    fn error_mapping() {
        assert_eq!(FfiError::NullPointer("to").code(), MyRustLibResult::NullPointer);
        assert_eq!(FfiError::UnknownPointer.code(), MyRustLibResult::InvalidArgument);
        assert_eq!(
            FfiError::from(CoreError::EmptyName).code(),
            MyRustLibResult::InvalidArgument
        );
    }

    #[test]
    fn last_error() {
        clear_last_error();
        assert!(myrustlib_get_last_error().is_null());
        assert_eq!(myrustlib_last_error_code(), MyRustLibResult::Ok);

        let code = set_last_error(&FfiError::NullPointer("to"));
        assert_eq!(code, MyRustLibResult::NullPointer);
        let ptr = myrustlib_get_last_error();
        assert!(!ptr.is_null());

        // Safety: we just set it
        let msg = unsafe { std::ffi::CStr::from_ptr(ptr) };
        assert_eq!(msg.to_str().unwrap(), "null pointer argument: to");
        assert_eq!(myrustlib_last_error_code(), MyRustLibResult::NullPointer);

        myrustlib_clear_error();
        assert!(myrustlib_get_last_error().is_null());
        assert_eq!(myrustlib_last_error_code(), MyRustLibResult::Ok);
    }

    #[test]
    fn last_error_is_thread_local() {
        set_last_error(&FfiError::UnknownPointer);
        let other = std::thread::spawn(|| myrustlib_get_last_error().is_null())
            .join()
            .unwrap();
        assert!(other);
        clear_last_error();
    }
}
