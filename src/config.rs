use anyhow::{Result, bail};
use std::path::PathBuf;

/// Project-relative location used by the pipeline stages.
const PROJECT_CONFIG: &str = "config/config.yaml";

pub struct ConfigPath;

impl ConfigPath {
    pub fn resolve(cli_path: Option<PathBuf>) -> Result<PathBuf> {
        // Priority: CLI flag > env var (handled by clap) > project dir > user config dir.
        if let Some(p) = cli_path {
            return Ok(p);
        }

        let candidates = [Some(PathBuf::from(PROJECT_CONFIG)), user_config_path()];
        if let Some(p) = first_existing(candidates.into_iter().flatten()) {
            log::info!("using config file {}", p.display());
            return Ok(p);
        }

        bail!(
            "No config file found.\n\
             Provide it via:\n  \
             • --file <PATH>\n  \
             • BOOKS_RECOMMENDER_CONFIG environment variable\n  \
             • ./{PROJECT_CONFIG}\n  \
             • ~/.config/books_recommender/config.yaml"
        )
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("books_recommender").join("config.yaml"))
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|p| p.is_file())
}
