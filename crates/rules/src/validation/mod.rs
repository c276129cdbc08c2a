//! Advisory validation of a loaded settings snapshot.
//!
//! Validation never blocks loading or routing; it reports problems a user
//! would want to fix in the editor: patterns that cannot compile, waves the
//! device does not know, rules that can never fire. Returns a
//! [`ValidationResult`] with errors and warnings keyed by their location in the
//! snapshot (`rules[i]` indexes the loaded rules, after skipped entries).

mod fuzzy;
mod rule_checks;
mod wave_checks;

use serde::{Deserialize, Serialize};

use crate::schema::RoutingSettings;
use crate::waves::WaveCatalog;

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A problem that makes part of a rule unusable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Location in the snapshot, e.g. `"rules[2].pattern_app"` or `"default_wave"`.
    pub path: String,
    pub message: String,
    /// Optional "Did you mean …?" suggestion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationResult {
    /// No errors (warnings allowed).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
            suggestion: None,
        });
    }

    pub(crate) fn warn_with_suggestion(
        &mut self,
        path: impl Into<String>,
        message: impl Into<String>,
        suggestion: Option<String>,
    ) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
            suggestion,
        });
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a snapshot against a waveform catalog.
pub fn validate_settings(settings: &RoutingSettings, catalog: &WaveCatalog) -> ValidationResult {
    let mut result = ValidationResult::default();
    rule_checks::validate_enabled(settings, &mut result);
    rule_checks::validate_patterns(settings, &mut result);
    rule_checks::validate_reachability(settings, &mut result);
    rule_checks::validate_names(settings, &mut result);
    wave_checks::validate_waves(settings, catalog, &mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Rule;

    #[test]
    fn clean_settings_have_no_findings() {
        let settings = RoutingSettings::new(
            true,
            "HAPPY ALERT",
            vec![
                Rule::new("chat", "SOFT THUMP").with_app_pattern("Slack*"),
                Rule::new("mail", "MAD").with_app_pattern("Thunderbird"),
            ],
        );
        let result = validate_settings(&settings, &WaveCatalog::default());
        assert!(result.is_valid());
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
    }

    #[test]
    fn findings_are_keyed_by_document_path() {
        let settings = RoutingSettings::new(
            true,
            "HAPPY ALERT",
            vec![Rule::new("broken", "MAD").with_summary_pattern("[oops")],
        );
        let result = validate_settings(&settings, &WaveCatalog::default());
        assert!(!result.is_valid());
        assert_eq!(result.errors[0].path, "rules[0].pattern_summary");
    }

    #[test]
    fn result_serializes_without_empty_suggestions() {
        let mut result = ValidationResult::default();
        result.warn("enabled", "disabled");
        let json = serde_json::to_value(&result).unwrap();
        assert!(json["warnings"][0].get("suggestion").is_none());
    }
}
