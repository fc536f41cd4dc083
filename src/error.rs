use std::io;
use std::panic::Location;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Raised whenever a YAML file cannot be turned into a value.
///
/// Carries the file that was being loaded, the source location of the code
/// that asked for it, and the original failure as its `source()`. The
/// message names the root failure once; the cause labels below it do not
/// repeat it.
#[derive(Error, Debug)]
#[error(
    "failed to load YAML file '{}' (requested at {location}): {}",
    .path.display(),
    .source.detail()
)]
pub struct AppError {
    path: PathBuf,
    location: &'static Location<'static>,
    #[source]
    source: LoadCause,
}

/// The root failure behind an [`AppError`].
#[derive(Error, Debug)]
pub enum LoadCause {
    #[error("I/O error")]
    Io(#[source] io::Error),

    #[error("YAML parse error")]
    Parse(#[source] serde_yaml::Error),

    #[error("YAML scan error")]
    Scan(#[source] yaml_rust2::ScanError),

    #[error("unsafe YAML tag '{tag}' at {at}")]
    UnsafeTag { tag: String, at: String },

    #[error("expected a mapping at the document root, found {found}")]
    NotAMapping { found: &'static str },
}

impl AppError {
    pub(crate) fn new(
        path: &Path,
        location: &'static Location<'static>,
        source: impl Into<LoadCause>,
    ) -> Self {
        Self {
            path: path.to_path_buf(),
            location,
            source: source.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the failed load was requested from.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn cause(&self) -> &LoadCause {
        &self.source
    }

    pub fn into_cause(self) -> LoadCause {
        self.source
    }

    /// Shortcut for callers that only care about e.g. `NotFound`.
    pub fn io_error_kind(&self) -> Option<io::ErrorKind> {
        match &self.source {
            LoadCause::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}

impl LoadCause {
    /// The underlying error's own message.
    pub fn detail(&self) -> String {
        match self {
            LoadCause::Io(e) => e.to_string(),
            LoadCause::Parse(e) => e.to_string(),
            LoadCause::Scan(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<yaml_rust2::ScanError> for LoadCause {
    fn from(e: yaml_rust2::ScanError) -> Self {
        LoadCause::Scan(e)
    }
}

impl From<io::Error> for LoadCause {
    fn from(e: io::Error) -> Self {
        LoadCause::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadCause {
    fn from(e: serde_yaml::Error) -> Self {
        LoadCause::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_shows_context_and_root_cause() {
        let err = AppError::new(
            Path::new("config/config.yaml"),
            Location::caller(),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("config/config.yaml"), "{msg}");
        assert!(msg.contains("src/error.rs"), "{msg}");
        assert!(msg.contains("no such file"), "{msg}");
    }

    #[test]
    fn cause_label_does_not_repeat_root_message() {
        let err = AppError::new(
            Path::new("x.yaml"),
            Location::caller(),
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.cause().to_string(), "I/O error");
        assert_eq!(err.to_string().matches("no such file").count(), 1);
    }

    #[test]
    fn source_chain_reaches_io_error() {
        let err = AppError::new(
            Path::new("x.yaml"),
            Location::caller(),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.io_error_kind(), Some(io::ErrorKind::PermissionDenied));

        let cause = err.source().expect("AppError has a source");
        let root = cause.source().expect("LoadCause::Io has a source");
        let io = root.downcast_ref::<io::Error>().expect("root is io::Error");
        assert_eq!(io.kind(), io::ErrorKind::PermissionDenied);
    }

    #[test]
    fn non_io_causes_have_no_io_kind() {
        let err = AppError::new(
            Path::new("x.yaml"),
            Location::caller(),
            LoadCause::NotAMapping { found: "sequence" },
        );
        assert_eq!(err.io_error_kind(), None);
        assert!(matches!(err.into_cause(), LoadCause::NotAMapping { found: "sequence" }));
    }
}
