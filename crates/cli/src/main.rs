mod cli;
mod commands;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use haptic_rules::Notification;

use crate::cli::{CliArgs, Command};
use crate::config::RouteConfig;

fn main() -> Result<()> {
    // Load .env (silently ignores if missing)
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr; stdout carries wave names only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let config = RouteConfig::from_args(&args).context("failed to resolve configuration")?;

    match args.command {
        Command::Route { app, summary, body } => commands::route(
            &config,
            Notification {
                app_name: app,
                summary,
                body,
            },
        ),
        Command::Check { json } => commands::check(&config, json),
        Command::Waves => commands::waves(),
        Command::Watch => commands::watch(&config),
    }
}
