use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use books_recommender::utils::{kind_name, read_yaml_file};

pub fn run(path: &Path) -> Result<()> {
    let value = read_yaml_file(path)?;
    println!(
        "{}  {} ({} root)",
        "ok".green(),
        path.display().to_string().cyan(),
        kind_name(&value)
    );
    Ok(())
}
