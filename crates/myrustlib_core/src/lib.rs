//! # myrustlib core
//!
//! Safe Rust side of the `myrustlib` greeting library.
//!
//! This crate provides:
//! - Greeting configuration with validation
//! - The [`Greeter`] that builds owned greetings and exposes the static one
//! - Atomic usage counters
//!
//! Nothing here touches raw pointers; the C ABI lives in `myrustlib_ffi`.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod greeter;
mod stats;

pub use config::GreeterConfig;
pub use error::{CoreError, CoreResult};
pub use greeter::{Greeter, HELLO_MESSAGE};
pub use stats::{GreeterStats, StatsSnapshot};

/// Crate version, as reported by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
