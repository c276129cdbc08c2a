//! A single routing rule.

use serde::Serialize;

use super::{FieldPattern, WaveId};

/// One user-defined routing entry.
///
/// A rule matches a notification when all three field patterns match.
/// Defaults (wildcard patterns, placeholder name, inherited wave) are
/// resolved when the rule is built, never at match time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    name: String,
    #[serde(rename = "pattern_app")]
    app_pattern: FieldPattern,
    #[serde(rename = "pattern_summary")]
    summary_pattern: FieldPattern,
    #[serde(rename = "pattern_body")]
    body_pattern: FieldPattern,
    wave: WaveId,
}

impl Rule {
    /// A rule matching every notification. Narrow it with the `with_*` builders.
    pub fn new(name: impl Into<String>, wave: impl Into<WaveId>) -> Self {
        Self {
            name: name.into(),
            app_pattern: FieldPattern::Any,
            summary_pattern: FieldPattern::Any,
            body_pattern: FieldPattern::Any,
            wave: wave.into(),
        }
    }

    pub(crate) fn from_parts(
        name: String,
        app_pattern: FieldPattern,
        summary_pattern: FieldPattern,
        body_pattern: FieldPattern,
        wave: WaveId,
    ) -> Self {
        Self {
            name,
            app_pattern,
            summary_pattern,
            body_pattern,
            wave,
        }
    }

    pub fn with_app_pattern(mut self, pattern: &str) -> Self {
        self.app_pattern = FieldPattern::parse(Some(pattern));
        self
    }

    pub fn with_summary_pattern(mut self, pattern: &str) -> Self {
        self.summary_pattern = FieldPattern::parse(Some(pattern));
        self
    }

    pub fn with_body_pattern(mut self, pattern: &str) -> Self {
        self.body_pattern = FieldPattern::parse(Some(pattern));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn app_pattern(&self) -> &FieldPattern {
        &self.app_pattern
    }

    pub fn summary_pattern(&self) -> &FieldPattern {
        &self.summary_pattern
    }

    pub fn body_pattern(&self) -> &FieldPattern {
        &self.body_pattern
    }

    pub fn wave(&self) -> &WaveId {
        &self.wave
    }

    /// The three patterns keyed by their document field names.
    pub fn patterns(&self) -> [(&'static str, &FieldPattern); 3] {
        [
            ("pattern_app", &self.app_pattern),
            ("pattern_summary", &self.summary_pattern),
            ("pattern_body", &self.body_pattern),
        ]
    }

    /// True when every field pattern accepts the corresponding value.
    pub fn matches(&self, app_name: Option<&str>, summary: Option<&str>, body: Option<&str>) -> bool {
        self.app_pattern.matches(app_name)
            && self.summary_pattern.matches(summary)
            && self.body_pattern.matches(body)
    }

    /// All three patterns are wildcards, so the rule matches everything.
    pub fn is_catch_all(&self) -> bool {
        self.patterns().iter().all(|(_, p)| p.is_any())
    }
}
