//! FFI check command implementation.
//!
//! Calls the exported C functions exactly as a foreign caller would and
//! verifies every greeting handed out was released.

#![allow(unsafe_code)]

use std::ffi::{c_char, CStr, CString};

use myrustlib::{
    hello_from_rust, myrustlib_get_last_error, myrustlib_live_strings, myrustlib_stats,
    rust_greeting, rust_greeting_free, MyRustLibStats,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::CliError;

/// Result of an FFI check run.
#[derive(Debug, Serialize)]
pub struct FfiCheckResult {
    /// Greeting returned for the requested name.
    pub greeting: String,
    /// Static greeting from `hello_from_rust`.
    pub hello: String,
    /// Number of allocate/free round trips performed.
    pub iterations: usize,
    /// Greetings still live after the run.
    pub live_strings: usize,
    /// Greetings produced by the library so far.
    pub greetings: u64,
    /// Names rejected by the library so far.
    pub rejected: u64,
}

/// Runs the ffi-check command.
pub fn run(name: &str, iterations: usize, format: &str) -> Result<(), CliError> {
    info!(iterations, "driving the C ABI");
    let result = check(name, iterations)?;

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => print_text_output(&result),
    }

    if result.live_strings > 0 {
        return Err(CliError::Leak {
            live: result.live_strings,
        });
    }
    Ok(())
}

fn check(name: &str, iterations: usize) -> Result<FfiCheckResult, CliError> {
    let c_name = CString::new(name).map_err(|e| CliError::Ffi {
        call: "rust_greeting",
        message: format!("name contains NUL at offset {}", e.nul_position()),
    })?;

    let mut greeting = String::new();
    for round in 0..iterations.max(1) {
        // Safety: c_name outlives the call; the result is freed exactly once below.
        let ptr = unsafe { rust_greeting(c_name.as_ptr()) };
        if ptr.is_null() {
            return Err(ffi_failure("rust_greeting"));
        }
        if round == 0 {
            greeting = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
            debug!(%greeting, "first greeting");
        }
        unsafe { rust_greeting_free(ptr.cast_mut()) };
    }

    let hello = unsafe { CStr::from_ptr(hello_from_rust()) }
        .to_string_lossy()
        .into_owned();

    let mut stats = MyRustLibStats::default();
    // Safety: stats is a valid, writable MyRustLibStats
    if unsafe { myrustlib_stats(&mut stats) }.is_err() {
        return Err(ffi_failure("myrustlib_stats"));
    }

    Ok(FfiCheckResult {
        greeting,
        hello,
        iterations: iterations.max(1),
        live_strings: myrustlib_live_strings(),
        greetings: stats.greetings,
        rejected: stats.rejected,
    })
}

fn ffi_failure(call: &'static str) -> CliError {
    let ptr: *const c_char = myrustlib_get_last_error();
    let message = if ptr.is_null() {
        "unknown error".to_string()
    } else {
        // Safety: the library keeps the message alive until the next call on this thread
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    };
    CliError::Ffi { call, message }
}

fn print_text_output(result: &FfiCheckResult) {
    println!("myrustlib FFI check");
    println!("===================");
    println!();
    println!("Greeting:      {}", result.greeting);
    println!("Static hello:  {}", result.hello);
    println!("Round trips:   {}", result.iterations);
    println!("Live strings:  {}", result.live_strings);
    println!("Greetings:     {}", result.greetings);
    println!("Rejected:      {}", result.rejected);
}
