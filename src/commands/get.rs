use anyhow::{Result, bail};
use std::path::Path;

use books_recommender::utils::{kind_name, read_yaml_file, value_at};

use crate::cli::GetArgs;

pub fn run(path: &Path, args: &GetArgs) -> Result<()> {
    let root = read_yaml_file(path)?;
    let Some(value) = value_at(&root, &args.key) else {
        bail!(
            "Key '{}' not found in '{}' (document root is a {})",
            args.key,
            path.display(),
            kind_name(&root)
        );
    };
    print!("{}", super::render(value, &args.output)?);
    Ok(())
}
