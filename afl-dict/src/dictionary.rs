//! Dictionary Output
//!
//! The fuzzer dictionary produced by the generator, and its text rendering.

use std::fmt;
use std::io::{self, Write};

/// Name used for the fixed punctuation entries.
pub const EXTRA_TOKEN_NAME: &str = "extra_token";

/// One `name=" token "` line of a fuzzer dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DictEntry {
    /// Entry name, the lowercased directive keyword.
    pub name: String,
    /// The normalized token.
    pub token: String,
}

impl DictEntry {
    /// Creates a new entry.
    pub fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }

    /// Creates an `extra_token` entry.
    pub fn extra(token: impl Into<String>) -> Self {
        Self::new(EXTRA_TOKEN_NAME, token)
    }
}

impl fmt::Display for DictEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\" {} \"", self.name, self.token)
    }
}

/// Counters collected during a generation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    /// Lines consumed, including the terminator line.
    pub lines: usize,
    /// Directive lines seen.
    pub directives: usize,
    /// Directives skipped by the exclusion list.
    pub excluded: usize,
    /// Directives dropped because of the suppress marker.
    pub suppressed: usize,
    /// Whether extraction stopped at the terminator directive.
    pub terminated: bool,
}

/// A generated fuzzer dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<DictEntry>,
    extras: Vec<DictEntry>,
    stats: GenerateStats,
}

impl Dictionary {
    pub(crate) fn new(
        entries: Vec<DictEntry>,
        extras: Vec<DictEntry>,
        stats: GenerateStats,
    ) -> Self {
        Self {
            entries,
            extras,
            stats,
        }
    }

    /// Returns the entries extracted from directives, in file order.
    pub fn entries(&self) -> &[DictEntry] {
        &self.entries
    }

    /// Returns the trailing `extra_token` entries.
    pub fn extras(&self) -> &[DictEntry] {
        &self.extras
    }

    /// Returns the counters of the pass that built this dictionary.
    pub fn stats(&self) -> GenerateStats {
        self.stats
    }

    /// Iterates over every entry in output order.
    pub fn iter(&self) -> impl Iterator<Item = &DictEntry> {
        self.entries.iter().chain(&self.extras)
    }

    /// Iterates over the rendered output lines, without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.iter().map(|entry| entry.to_string())
    }

    /// Writes the dictionary, one entry per line.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for entry in self.iter() {
            writeln!(writer, "{entry}")?;
        }
        writer.flush()
    }
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.iter() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
