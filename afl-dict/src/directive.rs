//! Directive Lines
//!
//! Splits grammar lines into directive names and entries, and decides what a
//! directive contributes to the dictionary.

use crate::config::Config;
use crate::dictionary::DictEntry;

/// What a directive line contributes to the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Ends extraction; this line and everything after it are ignored.
    Terminator,
    /// A structural directive with no grammar tokens.
    Excluded,
    /// Carries the suppress marker, so the whole line is dropped.
    Suppressed,
    /// Declares tokens to extract.
    Tokens,
}

/// A line starting with the directive sentinel, split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive<'a> {
    /// The directive name, sentinel included.
    name: &'a str,
    /// The directive name without the sentinel.
    keyword: &'a str,
    /// Words following the name.
    entries: Vec<&'a str>,
}

impl<'a> Directive<'a> {
    /// Parses a directive line. Returns `None` unless the very first
    /// character is `sentinel`.
    pub fn parse(line: &'a str, sentinel: char) -> Option<Self> {
        if !line.starts_with(sentinel) {
            return None;
        }

        let mut words = line.split(is_separator).filter(|word| !word.is_empty());
        let name = words.next()?;
        let keyword = name.strip_prefix(sentinel)?;

        Some(Self {
            name,
            keyword,
            entries: words.collect(),
        })
    }

    /// Returns the directive name, e.g. `%token`.
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Returns the directive name without its sentinel, e.g. `token`.
    pub fn keyword(&self) -> &'a str {
        self.keyword
    }

    /// Returns the words following the directive name.
    pub fn entries(&self) -> &[&'a str] {
        &self.entries
    }

    /// Classifies the directive against the configured policy.
    pub fn classify(&self, config: &Config) -> DirectiveKind {
        if self.name == config.terminator {
            DirectiveKind::Terminator
        } else if config.is_excluded(self.name) {
            DirectiveKind::Excluded
        } else if std::iter::once(&self.name)
            .chain(&self.entries)
            .any(|word| *word == config.suppress_marker)
        {
            DirectiveKind::Suppressed
        } else {
            DirectiveKind::Tokens
        }
    }

    /// Yields one dictionary entry per entry that is not a type annotation.
    ///
    /// This does not consult [`Directive::classify`]; callers filter
    /// terminator, excluded and suppressed lines first.
    pub fn dictionary_entries<'s>(
        &'s self,
        config: &'s Config,
    ) -> impl Iterator<Item = DictEntry> + 's {
        let name = self.keyword.to_lowercase();

        self.entries
            .iter()
            .filter(move |entry| !entry.starts_with(config.type_annotation_prefix))
            .map(move |entry| DictEntry::new(name.clone(), normalize_token(entry)))
    }
}

/// Whitespace plus the ASCII information separators `\x1c`..`\x1f`, which
/// grammar tooling also treats as word breaks.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Strips single quotes and lowercases a token entry.
pub fn normalize_token(entry: &str) -> String {
    entry.replace('\'', "").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries_of(line: &str) -> Vec<String> {
        let config = Config::default();
        let directive = Directive::parse(line, config.sentinel).unwrap();
        let entries: Vec<String> = directive
            .dictionary_entries(&config)
            .map(|e| e.to_string())
            .collect();
        entries
    }

    #[test]
    fn test_parse_directive() {
        let directive = Directive::parse("%token PLUS '+'  MINUS\t'-'\n", '%').unwrap();

        assert_eq!(directive.name(), "%token");
        assert_eq!(directive.keyword(), "token");
        assert_eq!(directive.entries(), &["PLUS", "'+'", "MINUS", "'-'"]);
    }

    #[test]
    fn test_parse_non_directive() {
        assert!(Directive::parse("expr: expr '+' expr", '%').is_none());
        assert!(Directive::parse("  %token INDENTED", '%').is_none());
        assert!(Directive::parse("", '%').is_none());
    }

    #[test]
    fn test_parse_information_separators() {
        let directive = Directive::parse("%token\x1cC\x1fD E", '%').unwrap();

        assert_eq!(directive.name(), "%token");
        assert_eq!(directive.entries(), &["C", "D", "E"]);
        assert_eq!(
            entries_of("%token\x1cC D"),
            vec![r#"token=" c ""#, r#"token=" d ""#]
        );
    }

    #[test]
    fn test_parse_bare_sentinel() {
        let directive = Directive::parse("%\n", '%').unwrap();

        assert_eq!(directive.name(), "%");
        assert_eq!(directive.keyword(), "");
        assert!(directive.entries().is_empty());
    }

    #[test]
    fn test_classify() {
        let config = Config::default();
        let kind = |line: &str| Directive::parse(line, '%').unwrap().classify(&config);

        assert_eq!(kind("%start program"), DirectiveKind::Terminator);
        assert_eq!(kind("%define api.pure full"), DirectiveKind::Excluded);
        assert_eq!(kind("%type <ast> expression"), DirectiveKind::Excluded);
        assert_eq!(kind("%token START_PROGRAM; BAR"), DirectiveKind::Suppressed);
        assert_eq!(kind("%token <integer> INTEGER"), DirectiveKind::Tokens);
        // Matching includes the sentinel and is case-sensitive.
        assert_eq!(kind("%START program"), DirectiveKind::Tokens);
        assert_eq!(kind("%start_program"), DirectiveKind::Tokens);
    }

    #[test]
    fn test_entries_skip_type_annotations() {
        assert_eq!(
            entries_of("%token <integer> INTEGER <string> STR"),
            vec![r#"token=" integer ""#, r#"token=" str ""#]
        );
    }

    #[test]
    fn test_entries_strip_quotes_and_lowercase() {
        assert_eq!(
            entries_of("%left 'IN' OR"),
            vec![r#"left=" in ""#, r#"left=" or ""#]
        );
    }

    #[test]
    fn test_entries_lowercase_directive_name() {
        assert_eq!(entries_of("%Right POW"), vec![r#"right=" pow ""#]);
    }

    #[test]
    fn test_entries_empty_directive() {
        assert!(entries_of("%pure-parser").is_empty());
    }

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("'A'"), "a");
        assert_eq!(normalize_token("it's"), "its");
        assert_eq!(normalize_token("\"Quoted\""), "\"quoted\"");
    }
}
