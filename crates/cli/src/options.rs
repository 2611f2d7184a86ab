//! Runtime options resolved once at startup.

use crate::cli::Cli;
use crate::quote::Encoding;

/// Delimiter written after each emitted line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// `\n` (default).
    #[default]
    Newline,
    /// `\0`, for consumers that split records on NUL.
    Nul,
}

impl Delimiter {
    /// The byte written after each line.
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Newline => b'\n',
            Delimiter::Nul => b'\0',
        }
    }
}

/// Immutable configuration for one run.
#[derive(Debug, Clone)]
pub struct Options {
    /// Substring to look for in variable names; empty matches every name.
    pub pattern: String,
    /// Selected encoder.
    pub encoding: Encoding,
    /// Line delimiter.
    pub delimiter: Delimiter,
    /// Sort raw entries byte-lexicographically before emission.
    pub sort: bool,
}

impl Options {
    /// Resolve options from parsed CLI arguments.
    ///
    /// Conflicting flags have already been reduced by clap's override rules,
    /// so at most one flag per group is still set here.
    pub fn from_cli(cli: &Cli) -> Self {
        let encoding = if cli.quote {
            Encoding::Shell
        } else if cli.hex {
            Encoding::Hex
        } else if cli.single_quote {
            Encoding::SingleQuote
        } else {
            Encoding::Plain
        };

        let delimiter = if cli.null {
            Delimiter::Nul
        } else {
            Delimiter::Newline
        };

        Self {
            pattern: cli.pattern.clone().unwrap_or_default(),
            encoding,
            delimiter,
            sort: cli.sort,
        }
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
