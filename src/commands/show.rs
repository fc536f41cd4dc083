use anyhow::Result;
use std::path::Path;

use books_recommender::utils::read_yaml_file;

use crate::cli::ShowArgs;

pub fn run(path: &Path, args: &ShowArgs) -> Result<()> {
    let value = read_yaml_file(path)?;
    print!("{}", super::render(&value, &args.output)?);
    Ok(())
}
