mod check;
mod get;
mod show;

use anyhow::{Context, Result};
use serde_yaml::Value;

use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::ConfigPath;

pub fn run(cli: Cli) -> Result<()> {
    let path = ConfigPath::resolve(cli.file)?;
    match cli.command {
        Commands::Show(args) => show::run(&path, &args),
        Commands::Get(args) => get::run(&path, &args),
        Commands::Check => check::run(&path),
    }
}

/// Serialize `value` for printing in the requested format.
fn render(value: &Value, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).context("Failed to serialize value as YAML")
        }
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map(|s| s + "\n")
            .context("Failed to serialize value as JSON (are all keys strings?)"),
    }
}
