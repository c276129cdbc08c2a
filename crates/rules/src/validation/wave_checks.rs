//! Wave checks: every referenced wave should exist in the device catalog.

use crate::schema::{RoutingSettings, WaveId};
use crate::waves::WaveCatalog;

use super::fuzzy::fuzzy_match;
use super::ValidationResult;

pub(super) fn validate_waves(settings: &RoutingSettings, catalog: &WaveCatalog, result: &mut ValidationResult) {
    if catalog.is_empty() {
        return;
    }
    let names = catalog.names();

    check_wave(settings.default_wave(), "default_wave", catalog, &names, result);
    for (i, rule) in settings.rules().iter().enumerate() {
        check_wave(
            rule.wave(),
            &format!("rules[{i}].wave"),
            catalog,
            &names,
            result,
        );
    }
}

fn check_wave(wave: &WaveId, path: &str, catalog: &WaveCatalog, names: &[&str], result: &mut ValidationResult) {
    match catalog.resolve(wave.as_str()) {
        Some(known) if known == wave => {}
        Some(known) => result.warn_with_suggestion(
            path,
            format!("Wave '{wave}' differs in case from catalog entry '{known}'"),
            Some(known.to_string()),
        ),
        None => result.warn_with_suggestion(
            path,
            format!("Unknown wave '{wave}'"),
            fuzzy_match(wave.as_str(), names).map(|s| format!("Did you mean '{s}'?")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Rule;

    #[test]
    fn unknown_wave_gets_suggestion() {
        let settings = RoutingSettings::new(
            true,
            "HAPY ALERT",
            vec![Rule::new("chat", "KNOCK")],
        );
        let mut result = ValidationResult::default();
        validate_waves(&settings, &WaveCatalog::default(), &mut result);

        assert_eq!(result.warnings.len(), 2);
        assert_eq!(result.warnings[0].path, "default_wave");
        assert_eq!(
            result.warnings[0].suggestion.as_deref(),
            Some("Did you mean 'HAPPY ALERT'?")
        );
        assert_eq!(result.warnings[1].path, "rules[0].wave");
    }

    #[test]
    fn case_mismatch_warns_with_canonical_name() {
        let settings = RoutingSettings::new(true, "happy alert", vec![]);
        let mut result = ValidationResult::default();
        validate_waves(&settings, &WaveCatalog::default(), &mut result);

        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].suggestion.as_deref(), Some("HAPPY ALERT"));
    }

    #[test]
    fn empty_catalog_skips_wave_checks() {
        let settings = RoutingSettings::new(true, "ANYTHING", vec![]);
        let mut result = ValidationResult::default();
        validate_waves(&settings, &WaveCatalog::new(Vec::<WaveId>::new()), &mut result);
        assert!(result.warnings.is_empty());
    }
}
