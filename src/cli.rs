use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect the books recommender's YAML configuration.
#[derive(Parser, Debug)]
#[command(name = "books-recommender", version, about)]
pub struct Cli {
    /// YAML config file. Defaults to ./config/config.yaml, then
    /// ~/.config/books_recommender/config.yaml.
    #[arg(long, short, env = "BOOKS_RECOMMENDER_CONFIG", global = true, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the whole document.
    Show(ShowArgs),
    /// Print the value at a dotted key path, e.g. `data_ingestion.dataset_url`.
    Get(GetArgs),
    /// Load the file and report whether it is valid.
    Check,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Output format.
    #[arg(long, value_enum, default_value = "yaml")]
    pub output: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dotted key path; numeric segments index sequences.
    pub key: String,

    /// Output format.
    #[arg(long, value_enum, default_value = "yaml")]
    pub output: OutputFormat,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// YAML, as loaded (default).
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_get_with_global_flags() {
        let cli = Cli::try_parse_from([
            "books-recommender",
            "get",
            "data_ingestion.dataset_url",
            "--file",
            "cfg.yaml",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("cfg.yaml")));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Get(args) => assert_eq!(args.key, "data_ingestion.dataset_url"),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
