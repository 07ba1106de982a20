//! # myrustlib FFI
//!
//! C ABI for the `myrustlib` greeting library, declared in
//! `include/myrustlib.h`.
//!
//! This crate provides:
//! - The `rust_greeting` / `rust_greeting_free` constructor and destructor pair
//! - `hello_from_rust`, which returns static storage the caller must not free
//! - Thread-local last-error reporting
//! - A registry of live greetings so bad frees are detected instead of
//!   corrupting the heap
//!
//! # Ownership
//!
//! Every pointer returned by `rust_greeting` is allocated by Rust's global
//! allocator and must go back through `rust_greeting_free` exactly once.
//! Callers never pass these pointers to C `free`.

#![warn(missing_docs)]

pub mod error;
pub mod greeting;
pub mod registry;
mod string;
pub mod types;

pub use error::{
    myrustlib_clear_error, myrustlib_get_last_error, myrustlib_last_error_code, FfiError,
    MyRustLibResult,
};
pub use greeting::{
    hello_from_rust, myrustlib_abi_version, myrustlib_live_strings, myrustlib_stats,
    rust_greeting, rust_greeting_free, ABI_VERSION,
};
pub use types::MyRustLibStats;
