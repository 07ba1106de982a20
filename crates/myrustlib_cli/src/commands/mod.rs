//! CLI command implementations.

pub mod ffi_check;
pub mod greet;
pub mod hello;
