use std::fs;
use std::io;
use std::panic::Location;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use super::tags::{ForeignTag, find_foreign_tag};
use crate::error::{AppError, LoadCause};

/// Read a YAML file and return its decoded root value.
///
/// The file is read as raw bytes and the handle is closed before decoding.
/// Decoding is restricted to plain scalars, sequences and mappings: a node
/// carrying an explicit tag outside the core schema (`!!python/object:...`,
/// `!!binary`, `!Custom`, ...) is rejected with [`LoadCause::UnsafeTag`].
/// Merge keys (`<<: *anchor`) are applied.
///
/// Any failure is returned as an [`AppError`] that records the caller's
/// source location and keeps the underlying error as its cause.
#[track_caller]
pub fn read_yaml_file(path: impl AsRef<Path>) -> Result<Value, AppError> {
    load(path.as_ref(), Location::caller())
}

/// Like [`read_yaml_file`], then deserializes the value into `T`.
/// A shape mismatch is reported as [`LoadCause::Parse`].
#[track_caller]
pub fn read_yaml_file_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, AppError> {
    let path = path.as_ref();
    let location = Location::caller();
    let value = load(path, location)?;
    serde_yaml::from_value(value).map_err(|e| fail(path, location, e))
}

/// Like [`read_yaml_file`], but the document root must be a mapping.
#[track_caller]
pub fn read_yaml_mapping(path: impl AsRef<Path>) -> Result<Mapping, AppError> {
    let path = path.as_ref();
    let location = Location::caller();
    match load(path, location)? {
        Value::Mapping(map) => Ok(map),
        other => Err(fail(
            path,
            location,
            LoadCause::NotAMapping {
                found: kind_name(&other),
            },
        )),
    }
}

/// Human-readable name of a value's node kind.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn load(path: &Path, location: &'static Location<'static>) -> Result<Value, AppError> {
    log::debug!("loading YAML file {}", path.display());

    let value = fs::read(path)
        .map_err(LoadCause::from)
        .and_then(|bytes| decode(&bytes))
        .map_err(|cause| fail(path, location, cause))?;

    log::debug!("loaded YAML file {} ({})", path.display(), kind_name(&value));
    Ok(value)
}

fn fail(
    path: &Path,
    location: &'static Location<'static>,
    cause: impl Into<LoadCause>,
) -> AppError {
    let err = AppError::new(path, location, cause);
    log::debug!("{err}");
    err
}

fn decode(bytes: &[u8]) -> Result<Value, LoadCause> {
    // An empty document is a null root, not an error.
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    let source = std::str::from_utf8(bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut value: Value = serde_yaml::from_str(source)?;
    if let Some(ForeignTag { tag, at }) = find_foreign_tag(source)? {
        return Err(LoadCause::UnsafeTag { tag, at });
    }
    value.apply_merge()?;
    Ok(value)
}
