// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.
//!
//! Flags are independent; within a conflicting group (delimiters, encoders)
//! the last flag on the command line wins, via clap's POSIX-style
//! `overrides_with` rules.

use clap::Parser;
use clap_complete::Shell;

/// Search the process environment and print matching variables
#[derive(Parser)]
#[command(name = "envsift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Substring to look for in variable names (default: match every name)
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// End each output line with NUL instead of newline
    #[arg(short = 'z', long = "null", overrides_with = "newline")]
    pub null: bool,

    /// End each output line with newline (default)
    #[arg(short = 'Z', long = "newline", overrides_with = "null")]
    pub newline: bool,

    /// Print entries verbatim with no quoting (default)
    #[arg(short = 'n', long = "plain", overrides_with_all = ["quote", "hex", "single_quote"])]
    pub plain: bool,

    /// Shell-quote values by delegating to printf(1) %q
    #[arg(short = 'q', long = "quote", overrides_with_all = ["plain", "hex", "single_quote"])]
    pub quote: bool,

    /// Hex-escape every value byte inside $'...' quoting
    #[arg(short = 'x', long = "hex", overrides_with_all = ["plain", "quote", "single_quote"])]
    pub hex: bool,

    /// Single-quote values, rewriting embedded quotes for POSIX shells
    #[arg(short = 's', long = "single-quote", overrides_with_all = ["plain", "quote", "hex"])]
    pub single_quote: bool,

    /// Sort entries byte-lexicographically before printing
    #[arg(short = 'S', long = "sort", env = "ENVSIFT_SORT")]
    pub sort: bool,

    /// Print a completion script for the given shell and exit
    #[arg(long = "completions", value_name = "SHELL")]
    pub completions: Option<Shell>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
