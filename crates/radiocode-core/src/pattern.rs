//! Serial/extra pattern representation and the `/<body>/<flags>` wire form
//!
//! The service publishes validation patterns per language dialect, e.g.
//! `{"js": "/^([0-9]{6})$/", "php": "/^([0-9]{6})$/"}`. Patterns are parsed
//! and compiled once at construction; validation only runs the compiled
//! regex.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while parsing or compiling a wire pattern
#[derive(Debug, Error)]
pub enum PatternError {
    /// Pattern is not of the form `/<body>/<flags>`
    #[error("pattern is not /-delimited: {0:?}")]
    Delimiters(String),

    /// Flag with no counterpart in the local matching engine
    #[error("unsupported pattern flag {flag:?} in {pattern:?}")]
    UnsupportedFlag { flag: char, pattern: String },

    /// Pattern body rejected by the regex engine
    #[error("invalid pattern syntax: {0}")]
    Syntax(#[from] regex::Error),
}

/// Language dialect tag a pattern is published under.
///
/// The service keys its pattern dictionaries by SDK language. Only the
/// dialects with a local representation are enumerated; unknown tags in a
/// wire mapping are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatternDialect {
    /// ECMAScript-style patterns (wire tag `js`)
    Ecma,
    /// PCRE-style patterns (wire tag `php`)
    Pcre,
}

impl PatternDialect {
    /// Dialect every [`RadioModel`](crate::RadioModel) resolves against.
    ///
    /// The `regex` crate is closest to the ECMAScript subset the service
    /// publishes under `js`.
    pub const DEFAULT: PatternDialect = PatternDialect::Ecma;

    /// Wire tag used in pattern dictionaries.
    pub fn tag(self) -> &'static str {
        match self {
            PatternDialect::Ecma => "js",
            PatternDialect::Pcre => "php",
        }
    }

    /// Parse a wire tag, `None` for tags without a local dialect.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "js" => Some(PatternDialect::Ecma),
            "php" => Some(PatternDialect::Pcre),
            _ => None,
        }
    }
}

impl std::fmt::Display for PatternDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// One validation pattern: portable body + flags, compiled for matching.
///
/// The portable form is kept alongside the compiled regex so a pattern can
/// be shown to callers (and round-tripped) exactly as the service sent it.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    body: String,
    flags: String,
    regex: Regex,
}

impl RegexPattern {
    /// Parse a `/<body>/<flags>` wire pattern and compile it.
    pub fn parse(wire: &str) -> Result<Self, PatternError> {
        let rest = wire
            .strip_prefix('/')
            .ok_or_else(|| PatternError::Delimiters(wire.to_string()))?;
        let close = rest
            .rfind('/')
            .ok_or_else(|| PatternError::Delimiters(wire.to_string()))?;
        let (body, flags) = (&rest[..close], &rest[close + 1..]);
        if body.is_empty() {
            return Err(PatternError::Delimiters(wire.to_string()));
        }

        let mut builder = RegexBuilder::new(body);
        for flag in flags.chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                other => {
                    return Err(PatternError::UnsupportedFlag {
                        flag: other,
                        pattern: wire.to_string(),
                    })
                }
            };
        }
        let regex = builder.build()?;

        Ok(Self {
            body: body.to_string(),
            flags: flags.to_string(),
            regex,
        })
    }

    /// Pattern body without delimiters or flags.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Flag characters, e.g. `"i"` for case-insensitive.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Render back to the `/<body>/<flags>` wire form.
    pub fn to_wire(&self) -> String {
        format!("/{}/{}", self.body, self.flags)
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

impl PartialEq for RegexPattern {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body && self.flags == other.flags
    }
}

impl std::fmt::Display for RegexPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}/{}", self.body, self.flags)
    }
}

/// Wire shape of a pattern field: either a bare pattern string or a
/// per-dialect dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
    Single(String),
    PerDialect(IndexMap<String, String>),
}

/// Immutable mapping from dialect to compiled pattern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatternTable {
    entries: BTreeMap<PatternDialect, RegexPattern>,
}

impl PatternTable {
    /// Table with a single entry.
    pub fn single(dialect: PatternDialect, pattern: RegexPattern) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(dialect, pattern);
        Self { entries }
    }

    /// Parse one wire pattern and file it under `dialect`.
    pub fn parse_single(dialect: PatternDialect, wire: &str) -> Result<Self, PatternError> {
        Ok(Self::single(dialect, RegexPattern::parse(wire)?))
    }

    /// Build a table from the wire shape.
    ///
    /// A bare string is promoted to a one-entry table under the default
    /// dialect. Dictionary entries with unrecognized tags are skipped.
    pub fn from_spec(spec: &PatternSpec) -> Result<Self, PatternError> {
        match spec {
            PatternSpec::Single(wire) => Self::parse_single(PatternDialect::DEFAULT, wire),
            PatternSpec::PerDialect(map) => {
                let mut entries = BTreeMap::new();
                for (tag, wire) in map {
                    if let Some(dialect) = PatternDialect::from_tag(tag) {
                        entries.insert(dialect, RegexPattern::parse(wire)?);
                    }
                }
                Ok(Self { entries })
            }
        }
    }

    pub fn get(&self, dialect: PatternDialect) -> Option<&RegexPattern> {
        self.entries.get(&dialect)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PatternDialect, &RegexPattern)> {
        self.entries.iter().map(|(dialect, pattern)| (*dialect, pattern))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_body_and_flags() {
        let pattern = RegexPattern::parse("/^([0-9]{6})$/").unwrap();
        assert_eq!(pattern.body(), "^([0-9]{6})$");
        assert_eq!(pattern.flags(), "");
        assert_eq!(pattern.to_wire(), "/^([0-9]{6})$/");
    }

    #[test]
    fn case_insensitive_flag_is_honored() {
        let pattern = RegexPattern::parse("/^([0-9A-F]{6})$/i").unwrap();
        assert!(pattern.is_match("7d4046"));
        assert!(pattern.is_match("7D4046"));
        assert!(!pattern.is_match("7G4046"));
    }

    #[test]
    fn body_containing_slash_parses() {
        // rfind keeps an escaped slash inside the body intact
        let pattern = RegexPattern::parse(r"/^a\/b$/").unwrap();
        assert_eq!(pattern.body(), r"^a\/b$");
        assert!(pattern.is_match("a/b"));
    }

    #[test]
    fn missing_delimiters_are_rejected() {
        assert!(matches!(
            RegexPattern::parse("^([0-9]{4})$"),
            Err(PatternError::Delimiters(_))
        ));
        assert!(matches!(
            RegexPattern::parse("//"),
            Err(PatternError::Delimiters(_))
        ));
    }

    #[test]
    fn unsupported_flag_is_rejected() {
        let err = RegexPattern::parse("/^a$/u").unwrap_err();
        assert!(matches!(err, PatternError::UnsupportedFlag { flag: 'u', .. }));
    }

    #[test]
    fn spec_string_promotes_to_default_dialect() {
        let spec = PatternSpec::Single("/^([0-9]{4})$/".to_string());
        let table = PatternTable::from_spec(&spec).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.get(PatternDialect::DEFAULT).is_some());
    }

    #[test]
    fn spec_dictionary_keeps_known_tags_only() {
        let json = r#"{"js": "/^a$/", "php": "/^a$/", "python": "/^a$/"}"#;
        let spec: PatternSpec = serde_json::from_str(json).unwrap();
        let table = PatternTable::from_spec(&spec).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.get(PatternDialect::Ecma).is_some());
        assert!(table.get(PatternDialect::Pcre).is_some());
    }

    #[test]
    fn wire_form_round_trips() {
        let table = PatternTable::parse_single(PatternDialect::Ecma, "/^([a-z]{3})$/i").unwrap();
        let pattern = table.get(PatternDialect::Ecma).unwrap();
        assert_eq!(pattern.to_wire(), "/^([a-z]{3})$/i");
    }
}
