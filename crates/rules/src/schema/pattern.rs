//! Case-insensitive, fully anchored glob patterns for a single notification field.

use std::fmt;

use glob::{MatchOptions, Pattern};
use serde::{Serialize, Serializer};

/// `*` and `?` cross `/` and leading dots: values are plain text, not paths.
/// Case is folded by lower-casing both sides before matching.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A field filter of a [`Rule`](super::Rule), compiled when the rule is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldPattern {
    /// Empty, absent or `"*"`: matches every value, including an absent one.
    #[default]
    Any,
    /// A compiled glob over the lower-cased value.
    Glob { source: String, compiled: Pattern },
    /// Glob syntax that failed to compile. Never matches.
    Invalid { source: String, reason: String },
}

impl FieldPattern {
    /// Build a pattern from its raw document form.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(raw) if !is_wildcard(raw) => raw,
            _ => return FieldPattern::Any,
        };

        match Pattern::new(&normalize(raw)) {
            Ok(compiled) => FieldPattern::Glob {
                source: raw.to_string(),
                compiled,
            },
            Err(e) => FieldPattern::Invalid {
                source: raw.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// Match against a field value; an absent value is the empty string.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FieldPattern::Any => true,
            FieldPattern::Glob { compiled, .. } => {
                compiled.matches_with(&value.unwrap_or_default().to_lowercase(), MATCH_OPTIONS)
            }
            FieldPattern::Invalid { .. } => false,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, FieldPattern::Any)
    }

    /// The pattern as written in the document (`"*"` for a wildcard).
    pub fn source(&self) -> &str {
        match self {
            FieldPattern::Any => "*",
            FieldPattern::Glob { source, .. } | FieldPattern::Invalid { source, .. } => source,
        }
    }

    /// Compile error message, if the pattern is unusable.
    pub fn error(&self) -> Option<&str> {
        match self {
            FieldPattern::Invalid { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for FieldPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}

impl Serialize for FieldPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.source())
    }
}

/// `""` and `"*"` match anything.
pub fn is_wildcard(raw: &str) -> bool {
    raw.is_empty() || raw == "*"
}

/// Lower-case the pattern and collapse runs of `*`.
///
/// Without separator semantics `**` means the same as `*`, but the `glob`
/// crate rejects it outside a whole path component.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_star = false;
    for ch in raw.to_lowercase().chars() {
        if ch == '*' && prev_star {
            continue;
        }
        prev_star = ch == '*';
        out.push(ch);
    }
    out
}
