//! # myrustlib testkit
//!
//! Test utilities for myrustlib.
//!
//! This crate provides:
//! - An allocation-tracking global allocator for leak checks
//! - C string fixtures
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use myrustlib_testkit::prelude::*;
//!
//! #[global_allocator]
//! static ALLOC: CountingAllocator = CountingAllocator::new();
//!
//! #[test]
//! fn no_leaks() {
//!     let delta = measure(|| drop(vec![1u8; 64]));
//!     assert!(delta.is_balanced());
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod allocator;
pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::allocator::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use allocator::*;
pub use fixtures::*;
pub use generators::*;
