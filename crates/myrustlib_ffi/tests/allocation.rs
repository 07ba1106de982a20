//! Leak checks for the greeting constructor/destructor pair.
//!
//! This binary installs the counting allocator, so every allocation made by
//! the library on the test thread is visible here.

use myrustlib::{hello_from_rust, rust_greeting, rust_greeting_free};
use myrustlib_testkit::prelude::*;
use parking_lot::Mutex;
use std::ffi::c_char;

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator::new();

// Greetings share one registry; serialise so its storage is not resized
// under another test's measurement.
static SERIAL: Mutex<()> = parking_lot::const_mutex(());

/// Pays one-time costs (greeter init, registry node) outside the measurement.
fn warm_up() {
    let name = c_string("warm-up");
    unsafe {
        let ptr = rust_greeting(name.as_ptr());
        assert!(!ptr.is_null());
        rust_greeting_free(ptr as *mut c_char);
    }
}

#[test]
fn single_round_trip_leaks_nothing() {
    let _guard = SERIAL.lock();
    warm_up();
    let name = c_string("World");

    let delta = measure(|| unsafe {
        let ptr = rust_greeting(name.as_ptr());
        assert!(!ptr.is_null());
        rust_greeting_free(ptr as *mut c_char);
    });

    assert!(delta.allocations > 0, "greeting should allocate");
    assert!(delta.is_balanced(), "leaked: {delta:?}");
}

#[test]
fn empty_name_round_trip_leaks_nothing() {
    let _guard = SERIAL.lock();
    warm_up();
    let name = c_string("");

    let delta = measure(|| unsafe {
        let ptr = rust_greeting(name.as_ptr());
        assert!(!ptr.is_null());
        rust_greeting_free(ptr as *mut c_char);
    });

    assert!(delta.allocations > 0, "greeting should allocate");
    assert!(delta.is_balanced(), "leaked: {delta:?}");
}

#[test]
fn repeated_round_trips_leak_nothing() {
    let _guard = SERIAL.lock();
    warm_up();
    let name = c_string("Repeat");

    let delta = measure(|| {
        for _ in 0..1_000 {
            unsafe {
                let ptr = rust_greeting(name.as_ptr());
                assert!(!ptr.is_null());
                rust_greeting_free(ptr as *mut c_char);
            }
        }
    });

    assert_eq!(delta.net_bytes(), 0, "leaked: {delta:?}");
    assert_eq!(delta.net_allocations(), 0);
}

#[test]
fn unfreed_greeting_is_reported() {
    let _guard = SERIAL.lock();
    warm_up();
    let name = c_string("Leaky");

    let mut held = std::ptr::null();
    let delta = measure(|| {
        held = unsafe { rust_greeting(name.as_ptr()) };
    });
    assert!(delta.net_bytes() > 0);

    let delta = measure(|| unsafe { rust_greeting_free(held as *mut c_char) });
    assert!(delta.net_bytes() < 0);
}

#[test]
fn hello_from_rust_does_not_allocate() {
    let _guard = SERIAL.lock();
    warm_up();

    let delta = measure(|| {
        for _ in 0..100 {
            assert!(!hello_from_rust().is_null());
        }
    });

    assert_eq!(delta.allocations, 0);
}
