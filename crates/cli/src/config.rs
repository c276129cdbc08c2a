use std::path::PathBuf;

use anyhow::{Context, Result};
use haptic_rules::{SettingsLoader, SettingsSource};
use tracing::debug;

use crate::cli::CliArgs;

/// Directory under the user config dir holding the settings document.
pub const SETTINGS_DIR: &str = "haptics";
pub const SETTINGS_FILE: &str = "settings.json";

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    pub settings_path: PathBuf,
    pub fallback_wave: String,
}

impl RouteConfig {
    /// Return the default settings path: ~/.config/haptics/settings.json
    pub fn default_settings_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join(SETTINGS_DIR);
        Ok(dir.join(SETTINGS_FILE))
    }

    /// Priority: --settings flag > HAPTICS_SETTINGS env (both via clap) > default path.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let settings_path = match &args.settings {
            Some(path) => path.clone(),
            None => Self::default_settings_path()?,
        };
        debug!(path = %settings_path.display(), "resolved settings path");

        Ok(Self {
            settings_path,
            fallback_wave: args.fallback_wave.clone(),
        })
    }

    pub fn loader(&self) -> SettingsLoader {
        SettingsLoader::new().with_fallback_wave(self.fallback_wave.as_str())
    }

    pub fn source(&self) -> SettingsSource {
        SettingsSource::file(&self.settings_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn explicit_settings_path_wins() {
        let args = CliArgs::try_parse_from(["haptic-route", "--settings", "custom.yaml", "waves"]).unwrap();
        let config = RouteConfig::from_args(&args).unwrap();
        assert_eq!(config.settings_path, PathBuf::from("custom.yaml"));
        assert_eq!(config.source().path(), Some(std::path::Path::new("custom.yaml")));
    }

    #[test]
    fn loader_uses_fallback_wave() {
        let config = RouteConfig {
            settings_path: PathBuf::from("does-not-exist.json"),
            fallback_wave: "SOFT THUMP".to_string(),
        };
        let settings = config.loader().load(&config.source());
        assert!(!settings.enabled());
        assert_eq!(settings.default_wave(), "SOFT THUMP");
    }
}
