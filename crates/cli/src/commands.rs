use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use haptic_rules::loader::LoadError;
use haptic_rules::validation::{validate_settings, ValidationResult};
use haptic_rules::{
    Notification, Router, RoutingSettings, SettingsHandle, SettingsWatcher, WaveCatalog, WaveId,
};
use tracing::warn;

use crate::config::RouteConfig;

/// Printed when routing is disabled and nothing should play.
const NO_WAVE: &str = "(none)";

fn display_wave(wave: Option<&WaveId>) -> &str {
    wave.map_or(NO_WAVE, WaveId::as_str)
}

// ── route ───────────────────────────────────────────────────────────

pub fn route(config: &RouteConfig, notification: Notification) -> Result<()> {
    let settings = config.loader().load(&config.source());
    let router = Router::default();
    println!("{}", display_wave(router.route(&notification, &settings)));
    Ok(())
}

// ── check ───────────────────────────────────────────────────────────

pub fn check(config: &RouteConfig, json: bool) -> Result<()> {
    let loader = config.loader();
    let settings = match loader.try_load(&config.source()) {
        Ok(settings) => settings,
        Err(LoadError::NotFound(_)) => {
            if json {
                let settings = RoutingSettings::disabled(loader.fallback_wave().clone());
                print_report(&settings, &ValidationResult::default(), false)?;
            } else {
                println!(
                    "No settings document at {}; notifications are disabled.",
                    config.settings_path.display()
                );
            }
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!("failed to load settings: {}", config.settings_path.display())
            })
        }
    };

    let result = validate_settings(&settings, &WaveCatalog::default());

    if json {
        print_report(&settings, &result, true)?;
    } else {
        print_summary(config, &settings);
        print_findings(&result);
    }

    if !result.is_valid() {
        bail!("settings have {} validation error(s)", result.errors.len());
    }
    Ok(())
}

/// JSON form of `check`. A missing document reports the disabled snapshot.
fn check_report(settings: &RoutingSettings, result: &ValidationResult, found: bool) -> serde_json::Value {
    serde_json::json!({
        "found": found,
        "settings": settings,
        "validation": result,
    })
}

fn print_report(settings: &RoutingSettings, result: &ValidationResult, found: bool) -> Result<()> {
    let report = check_report(settings, result, found);
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to serialize report")?
    );
    Ok(())
}

fn print_summary(config: &RouteConfig, settings: &RoutingSettings) {
    println!("Settings:     {}", config.settings_path.display());
    println!("Enabled:      {}", settings.enabled());
    println!("Default wave: {}", settings.default_wave());
    println!("Rules:        {}", settings.rules().len());
    for (i, rule) in settings.rules().iter().enumerate() {
        println!(
            "  #{i} {:<24} app={} summary={} body={} -> {}",
            rule.name(),
            rule.app_pattern(),
            rule.summary_pattern(),
            rule.body_pattern(),
            rule.wave()
        );
    }
}

fn print_findings(result: &ValidationResult) {
    println!(
        "Validation:   {} error(s), {} warning(s)",
        result.errors.len(),
        result.warnings.len()
    );
    for e in &result.errors {
        println!("  error   {}: {}", e.path, e.message);
        if let Some(s) = &e.suggestion {
            println!("          {s}");
        }
    }
    for w in &result.warnings {
        println!("  warning {}: {}", w.path, w.message);
        if let Some(s) = &w.suggestion {
            println!("          {s}");
        }
    }
}

// ── waves ───────────────────────────────────────────────────────────

pub fn waves() -> Result<()> {
    for wave in WaveCatalog::default().iter() {
        println!("{wave}");
    }
    Ok(())
}

// ── watch ───────────────────────────────────────────────────────────

/// Route one JSON notification per stdin line against the live snapshot.
pub fn watch(config: &RouteConfig) -> Result<()> {
    let loader = Arc::new(config.loader());
    let handle = SettingsHandle::new(loader.load(&config.source()));

    // Without a watchable directory, keep routing against the initial snapshot.
    let _watcher = match SettingsWatcher::spawn(&config.settings_path, Arc::clone(&loader), handle.clone()) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            warn!(error = %e, "hot reload unavailable, using initial settings");
            None
        }
    };

    let router = Router::default();
    let stdin = io::stdin();
    let mut out = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let notification: Notification = match serde_json::from_str(&line) {
            Ok(n) => n,
            Err(e) => {
                warn!(error = %e, "skipping malformed notification line");
                continue;
            }
        };

        let settings = handle.current();
        writeln!(out, "{}", display_wave(router.route(&notification, &settings)))?;
        out.flush()?;
    }

    Ok(())
}
