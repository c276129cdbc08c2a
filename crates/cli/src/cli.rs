use std::path::PathBuf;

use clap::{Parser, Subcommand};
use haptic_rules::schema::DEFAULT_WAVE;

/// Route desktop notifications to haptic waveforms.
///
/// Reads the notification settings document (JSON or YAML) and prints the
/// waveform a notification should play. Never talks to a device.
#[derive(Parser, Debug)]
#[command(name = "haptic-route", version, about = "Route desktop notifications to haptic waveforms")]
pub struct CliArgs {
    /// Settings document (default: ~/.config/haptics/settings.json)
    #[arg(long, global = true, env = "HAPTICS_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Wave used when the settings name no default
    #[arg(long, global = true, env = "HAPTICS_FALLBACK_WAVE", default_value = DEFAULT_WAVE)]
    pub fallback_wave: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Route one notification and print the selected wave
    Route {
        /// Application name
        #[arg(long)]
        app: Option<String>,

        /// Notification summary / title
        #[arg(long)]
        summary: Option<String>,

        /// Notification body
        #[arg(long)]
        body: Option<String>,
    },

    /// Load the settings and report validation findings
    Check {
        /// Print the snapshot and findings as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the known waveforms
    Waves,

    /// Route JSON-lines notifications from stdin, reloading settings on change
    Watch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn parse_route() {
        let args = CliArgs::try_parse_from([
            "haptic-route",
            "--settings",
            "/tmp/settings.yml",
            "route",
            "--app",
            "Slack",
            "--summary",
            "New message",
        ])
        .unwrap();

        assert_eq!(args.settings, Some(PathBuf::from("/tmp/settings.yml")));
        match args.command {
            Command::Route { app, summary, body } => {
                assert_eq!(app.as_deref(), Some("Slack"));
                assert_eq!(summary.as_deref(), Some("New message"));
                assert_eq!(body, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from(["haptic-route", "check", "--json", "--fallback-wave", "MAD"]).unwrap();
        assert_eq!(args.fallback_wave, "MAD");
        assert!(matches!(args.command, Command::Check { json: true }));
    }
}
