// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment snapshot and well-known variable names.
//!
//! The rest of the pipeline never reads ambient process state; it consumes
//! the raw `NAME=value` byte strings produced here as an explicit argument.

use std::ffi::OsString;

/// Well-known environment variable names (generated by `build.rs`).
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

/// Snapshot the process environment as raw `NAME=value` byte strings,
/// in environment order.
pub fn snapshot() -> Vec<Vec<u8>> {
    std::env::vars_os()
        .map(|(name, value)| {
            let mut raw = into_bytes(name);
            raw.push(b'=');
            raw.extend(into_bytes(value));
            raw
        })
        .collect()
}

#[cfg(unix)]
fn into_bytes(os: OsString) -> Vec<u8> {
    use std::os::unix::ffi::OsStringExt;
    os.into_vec()
}

/// Non-unix platforms have no byte view of `OsString`; fall back to lossy UTF-8.
#[cfg(not(unix))]
fn into_bytes(os: OsString) -> Vec<u8> {
    os.to_string_lossy().into_owned().into_bytes()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
