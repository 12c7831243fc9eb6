//! Command dispatch and handlers.

pub mod menu;
pub mod predict;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::logging;

/// Dispatch a parsed command line to its handler.
///
/// Loads the layered configuration, applies flag overrides, and installs
/// logging before the handler runs.
///
/// # Errors
///
/// Returns an error string if configuration fails to load or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let config = resolve_config(cli)?;
    logging::init(&config.log_filter);
    tracing::debug!(?config, "configuration resolved");

    match &cli.command {
        None | Some(Command::Run) => menu::run(&config),
        Some(Command::Predict { total, completed }) => {
            predict::run(*total, *completed, config.days_worked)
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<Config, String> {
    resolve_config_with(cli, |name| std::env::var(name).ok())
}

/// Layers flag overrides on top of the file and the env seen through `lookup`.
fn resolve_config_with<F>(cli: &Cli, lookup: F) -> Result<Config, String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::load_with(cli.config.as_deref(), lookup).map_err(|e| e.to_string())?;
    if let Some(days) = cli.days_worked {
        config.days_worked = days;
    }
    Ok(config)
}
