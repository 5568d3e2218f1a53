//! Dictionary Generator
//!
//! Single pass over grammar lines, collecting dictionary entries until the
//! terminator directive.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, trace};

use crate::config::Config;
use crate::dictionary::{DictEntry, Dictionary, GenerateStats};
use crate::directive::{Directive, DirectiveKind};
use crate::{DictError, DictResult};

/// Extracts fuzzer dictionaries from grammar files.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Creates a generator with the given policy.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds a dictionary from a sequence of lines.
    pub fn generate<'a, I>(&self, lines: I) -> Dictionary
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries = Vec::new();
        let mut stats = GenerateStats::default();

        for (index, line) in lines.into_iter().enumerate() {
            stats.lines += 1;

            let Some(directive) = Directive::parse(line, self.config.sentinel) else {
                continue;
            };
            stats.directives += 1;

            match directive.classify(&self.config) {
                DirectiveKind::Terminator => {
                    debug!(line = index + 1, "Reached {}, stopping", directive.name());
                    stats.terminated = true;
                    break;
                }
                DirectiveKind::Excluded => {
                    debug!(
                        line = index + 1,
                        "Skipping excluded directive {}",
                        directive.name()
                    );
                    stats.excluded += 1;
                }
                DirectiveKind::Suppressed => {
                    debug!(
                        line = index + 1,
                        "Skipping {} line marked {}",
                        directive.name(),
                        self.config.suppress_marker
                    );
                    stats.suppressed += 1;
                }
                DirectiveKind::Tokens => {
                    for entry in directive.dictionary_entries(&self.config) {
                        trace!(line = index + 1, "{}", entry);
                        entries.push(entry);
                    }
                }
            }
        }

        let extras = self
            .config
            .extra_tokens
            .iter()
            .map(|token| DictEntry::extra(token.as_str()))
            .collect();

        Dictionary::new(entries, extras, stats)
    }

    /// Builds a dictionary from grammar source text.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn generate_source(&self, source: &str) -> Dictionary {
        self.generate(universal_lines(source))
    }

    /// Reads every line from `reader`, then builds the dictionary.
    ///
    /// Lines after the terminator are still read, so a read error anywhere
    /// in the input fails the whole pass.
    pub fn generate_reader<R: BufRead>(&self, reader: R) -> DictResult<Dictionary> {
        self.read_lines(reader, Path::new("<reader>"))
    }

    /// Opens `path` and builds the dictionary from its contents.
    pub fn generate_file(&self, path: impl AsRef<Path>) -> DictResult<Dictionary> {
        let path = path.as_ref();
        debug!("Reading grammar: {}", path.display());

        let file = File::open(path).map_err(|e| DictError::file(path, e))?;
        self.read_lines(BufReader::new(file), path)
    }

    fn read_lines<R: BufRead>(&self, mut reader: R, path: &Path) -> DictResult<Dictionary> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|e| DictError::file(path, e))?;

        Ok(self.generate_source(&source))
    }
}

/// Splits text into lines, treating `\n`, `\r\n` and a lone `\r` as breaks.
pub fn universal_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = source;

    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let line = match rest.find(['\r', '\n']) {
            Some(end) => {
                let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                let line = &rest[..end];
                rest = &rest[end + break_len..];
                line
            }
            None => std::mem::take(&mut rest),
        };

        Some(line)
    })
}
