//! First-match-wins routing of notifications to waves.
//!
//! [`select_wave`] is the pure routing function. [`Router`] wraps the same
//! algorithm and reports each decision to a [`DiagnosticSink`].

use std::sync::Arc;

use crate::diagnostics::{DiagnosticEvent, DiagnosticSink, TracingSink};
use crate::schema::{FieldPattern, Notification, RoutingSettings, WaveId};

// ── Field predicate ─────────────────────────────────────────────────

/// Match one notification field against a raw pattern.
///
/// An empty, absent or `"*"` pattern matches anything. Otherwise the
/// pattern is a case-insensitive shell glob anchored at both ends; an absent
/// value is matched as `""` and unparseable glob syntax never matches.
pub fn match_field(pattern: Option<&str>, value: Option<&str>) -> bool {
    FieldPattern::parse(pattern).matches(value)
}

// ── Routing ─────────────────────────────────────────────────────────

/// Pick the wave for a notification.
///
/// Returns `None` when routing is disabled. Otherwise returns the wave of
/// the first rule whose three patterns all match, or the default wave.
pub fn select_wave<'s>(
    app_name: Option<&str>,
    summary: Option<&str>,
    body: Option<&str>,
    settings: &'s RoutingSettings,
) -> Option<&'s WaveId> {
    if !settings.enabled() {
        return None;
    }

    let wave = settings
        .rules()
        .iter()
        .find(|rule| rule.matches(app_name, summary, body))
        .map_or(settings.default_wave(), |rule| rule.wave());
    Some(wave)
}

/// Routes notifications and reports each decision to a diagnostic sink.
///
/// Holds no settings: callers pass the snapshot per call, typically
/// [`SettingsHandle::current`](crate::loader::SettingsHandle::current).
#[derive(Clone)]
pub struct Router {
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl Router {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Same result as [`select_wave`], with the decision recorded.
    pub fn select_wave<'s>(
        &self,
        app_name: Option<&str>,
        summary: Option<&str>,
        body: Option<&str>,
        settings: &'s RoutingSettings,
    ) -> Option<&'s WaveId> {
        if !settings.enabled() {
            self.sink.record(&DiagnosticEvent::RoutingDisabled);
            return None;
        }

        let matched = settings
            .rules()
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(app_name, summary, body));

        match matched {
            Some((index, rule)) => {
                self.sink.record(&DiagnosticEvent::RuleMatched {
                    index,
                    name: rule.name().to_string(),
                    wave: rule.wave().clone(),
                });
                Some(rule.wave())
            }
            None => {
                self.sink.record(&DiagnosticEvent::NoRuleMatched {
                    default_wave: settings.default_wave().clone(),
                });
                Some(settings.default_wave())
            }
        }
    }

    pub fn route<'s>(&self, notification: &Notification, settings: &'s RoutingSettings) -> Option<&'s WaveId> {
        self.select_wave(
            notification.app_name(),
            notification.summary(),
            notification.body(),
            settings,
        )
    }
}

// ── Tests ───────────────────────────────────────────────────────────
