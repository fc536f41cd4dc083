//! YAML configuration loading for the books recommender.
//!
//! [`utils::read_yaml_file`] is the entry point; every failure comes back as
//! an [`error::AppError`] wrapping the original cause.

pub mod error;
pub mod utils;

pub use error::{AppError, LoadCause};
pub use utils::read_yaml_file;
