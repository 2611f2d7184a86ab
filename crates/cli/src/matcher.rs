//! Variable name filtering by literal substring.
//!
//! A single literal compiled once into memchr's SIMD memmem finder.
//! Byte-oriented, so names containing high-bit or non-UTF-8 bytes are
//! matched correctly.

use memchr::memmem::Finder;

/// Compiled substring filter over variable names.
pub struct NameFilter {
    needle: Vec<u8>,
    finder: Finder<'static>,
}

impl NameFilter {
    /// Compile a filter from a literal needle.
    ///
    /// The empty needle matches every name, including the empty one.
    pub fn new(needle: &[u8]) -> Self {
        Self {
            needle: needle.to_vec(),
            finder: Finder::new(needle).into_owned(),
        }
    }

    /// True iff the needle occurs as a contiguous substring of `name`.
    pub fn matches(&self, name: &[u8]) -> bool {
        self.finder.find(name).is_some()
    }

    /// The literal this filter was compiled from.
    pub fn needle(&self) -> &[u8] {
        &self.needle
    }
}

impl std::fmt::Debug for NameFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameFilter")
            .field("needle", &String::from_utf8_lossy(&self.needle))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
