//! Rule checks: pattern syntax, unreachable rules, duplicate names.

use std::collections::HashMap;

use crate::schema::RoutingSettings;

use super::ValidationResult;

fn rule_path(index: usize) -> String {
    format!("rules[{index}]")
}

pub(super) fn validate_enabled(settings: &RoutingSettings, result: &mut ValidationResult) {
    if !settings.enabled() && !settings.rules().is_empty() {
        result.warn(
            "enabled",
            format!(
                "Notification routing is disabled; {} custom rule(s) will be ignored",
                settings.rules().len()
            ),
        );
    }
}

pub(super) fn validate_patterns(settings: &RoutingSettings, result: &mut ValidationResult) {
    for (i, rule) in settings.rules().iter().enumerate() {
        for (field, pattern) in rule.patterns() {
            if let Some(reason) = pattern.error() {
                result.error(
                    format!("{}.{field}", rule_path(i)),
                    format!("Pattern '{}' is not a valid glob ({reason}); it will never match", pattern.source()),
                );
            }
        }
    }
}

/// Everything after a catch-all rule is dead.
pub(super) fn validate_reachability(settings: &RoutingSettings, result: &mut ValidationResult) {
    let Some(catch_all) = settings.rules().iter().position(|r| r.is_catch_all()) else {
        return;
    };
    let shadowing = settings.rules()[catch_all].name();

    for (i, rule) in settings.rules().iter().enumerate().skip(catch_all + 1) {
        result.warn(
            rule_path(i),
            format!(
                "Rule '{}' is unreachable: rule '{shadowing}' (#{catch_all}) matches every notification",
                rule.name()
            ),
        );
    }
}

pub(super) fn validate_names(settings: &RoutingSettings, result: &mut ValidationResult) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    for (i, rule) in settings.rules().iter().enumerate() {
        if let Some(first) = first_seen.get(rule.name()) {
            result.warn(
                format!("{}.name", rule_path(i)),
                format!("Duplicate rule name '{}' (first used by rule #{first})", rule.name()),
            );
        } else {
            first_seen.insert(rule.name(), i);
        }
    }
}
