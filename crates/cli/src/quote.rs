// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Encoders that render one name/value pair as an output line.
//!
//! The quoting encoders guarantee that evaluating the result as a POSIX
//! shell assignment reconstructs a value byte-equal to the input.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Output encoding policy, selected once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// `name=value` with no escaping. Display-only.
    #[default]
    Plain,
    /// Shell-quoted by delegating to `printf(1)` `%q`.
    Shell,
    /// ANSI-C quoting with every value byte hex-escaped: `name=$'\xHH...'`.
    Hex,
    /// POSIX single-quote escaping: `name='...'` with `'` as `'\''`.
    SingleQuote,
}

impl Encoding {
    /// Encode one entry as an output line, without the trailing delimiter.
    pub fn encode(self, name: &[u8], value: &[u8]) -> Result<Vec<u8>> {
        match self {
            Encoding::Plain => Ok(plain(name, value)),
            Encoding::Shell => shell_quote(name, value),
            Encoding::Hex => Ok(hex_escape(name, value)),
            Encoding::SingleQuote => Ok(single_quote_escape(name, value)),
        }
    }
}

/// `name=value`, verbatim.
fn plain(name: &[u8], value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.len() + 1 + value.len());
    out.extend_from_slice(name);
    out.push(b'=');
    out.extend_from_slice(value);
    out
}

/// `name=$'...'` with every value byte rendered as `\xHH`.
///
/// Two lowercase hex digits per byte, so all 256 byte values round-trip
/// through `$'\xHH'` shell syntax. Output length is exactly
/// `name.len() + 3 + 4 * value.len() + 1`. This is the only encoder that
/// can represent NUL bytes in the value.
fn hex_escape(name: &[u8], value: &[u8]) -> Vec<u8> {
    const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

    let mut out = Vec::with_capacity(name.len() + 3 + value.len() * 4 + 1);
    out.extend_from_slice(name);
    out.extend_from_slice(b"=$'");
    for &byte in value {
        out.extend_from_slice(b"\\x");
        out.push(HEX_DIGITS[usize::from(byte >> 4)]);
        out.push(HEX_DIGITS[usize::from(byte & 0x0f)]);
    }
    out.push(b'\'');
    out
}

/// `name='...'` with each embedded `'` rewritten as `'\''`.
///
/// Output length is `name.len() + 3 + value.len() + 3 * quote_count`:
/// two bytes for `='`, one closing `'`, and three extra bytes per quote.
fn single_quote_escape(name: &[u8], value: &[u8]) -> Vec<u8> {
    let quotes = memchr::memchr_iter(b'\'', value).count();

    let mut out = Vec::with_capacity(name.len() + 3 + value.len() + 3 * quotes);
    out.extend_from_slice(name);
    out.extend_from_slice(b"='");
    for &byte in value {
        if byte == b'\'' {
            out.extend_from_slice(b"'\\''");
        } else {
            out.push(byte);
        }
    }
    out.push(b'\'');
    out
}

/// Delegate to `printf "%s=%q" name value` and capture its stdout.
///
/// One child per call, stdin and stderr detached, stdout captured in full,
/// the child reaped exactly once. Spawn failures and non-zero exit statuses
/// are fatal; zero-byte output is valid output, not an error.
fn shell_quote(name: &[u8], value: &[u8]) -> Result<Vec<u8>> {
    let output = Command::new("printf")
        .arg("%s=%q")
        .arg(os_arg(name))
        .arg(os_arg(value))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| Error::Quote {
            message: format!("failed to run printf: {e}"),
        })?;

    if !output.status.success() {
        return Err(Error::Quote {
            message: format!("printf failed: {}", output.status),
        });
    }

    Ok(output.stdout)
}

#[cfg(unix)]
fn os_arg(bytes: &[u8]) -> Cow<'_, OsStr> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(OsStr::from_bytes(bytes))
}

/// Non-unix platforms have no byte view of `OsStr`; fall back to lossy UTF-8.
#[cfg(not(unix))]
fn os_arg(bytes: &[u8]) -> Cow<'_, OsStr> {
    use std::ffi::OsString;
    Cow::Owned(OsString::from(String::from_utf8_lossy(bytes).into_owned()))
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
