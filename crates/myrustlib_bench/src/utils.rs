//! Benchmark input generators.

use rand::distributions::Alphanumeric;
use rand::Rng;
use std::ffi::CString;

/// Generate a random ASCII name of `len` characters.
pub fn random_name(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len.max(1))
        .map(char::from)
        .collect()
}

/// Generate a batch of names as C strings.
pub fn c_names(count: usize, len: usize) -> Vec<CString> {
    (0..count)
        .map(|_| CString::new(random_name(len)).expect("alphanumeric names have no NUL"))
        .collect()
}
