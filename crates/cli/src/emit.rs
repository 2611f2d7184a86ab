// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Streams matching entries through the selected encoder to a sink.

use std::io::Write;

use crate::envvar::EnvVar;
use crate::error::{Error, Result};
use crate::matcher::NameFilter;
use crate::options::Options;

/// Emit every matching entry from `entries` to `out`.
///
/// `entries` are raw `NAME=value` byte strings; the environment snapshot is
/// passed in explicitly rather than read from ambient process state, so the
/// pipeline can be driven from tests. Malformed entries with no `=` are
/// skipped. A line is either fully emitted (encoded bytes plus the delimiter
/// byte) or not emitted at all. Returns the number of lines emitted.
pub fn emit<W: Write>(entries: &[Vec<u8>], opts: &Options, out: &mut W) -> Result<usize> {
    let filter = NameFilter::new(opts.pattern.as_bytes());
    let delimiter = [opts.delimiter.as_byte()];
    let mut emitted = 0usize;

    for raw in entries {
        let Some(var) = EnvVar::split(raw) else {
            tracing::debug!("skipping malformed entry (no '=')");
            continue;
        };
        if !filter.matches(var.name) {
            continue;
        }

        let line = opts.encoding.encode(var.name, var.value)?;
        out.write_all(&line).map_err(write_error)?;
        out.write_all(&delimiter).map_err(write_error)?;
        emitted += 1;
    }

    Ok(emitted)
}

fn write_error(source: std::io::Error) -> Error {
    Error::Io {
        context: "output",
        source,
    }
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;
