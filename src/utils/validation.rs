use crate::utils::error::{LocalizerError, Result};
use std::collections::HashSet;
use std::path::{Component, Path};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LocalizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(LocalizerError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// A language code doubles as a directory name, so it must be a single
/// plain path segment.
pub fn validate_language_code(field_name: &str, code: &str) -> Result<()> {
    validate_non_empty_string(field_name, code)?;

    let reason = if code == "." || code == ".." {
        Some("Code cannot be a relative directory marker")
    } else if code.contains(['/', '\\']) {
        Some("Code cannot contain path separators")
    } else if code.contains('\0') {
        Some("Code contains null bytes")
    } else if code.trim() != code {
        Some("Code cannot have surrounding whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(LocalizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn validate_relative_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LocalizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LocalizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    for component in Path::new(path).components() {
        let reason = match component {
            Component::Normal(_) | Component::CurDir => continue,
            Component::ParentDir => "Path cannot escape the site root",
            Component::RootDir | Component::Prefix(_) => "Path must be relative",
        };
        return Err(LocalizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: reason.to_string(),
        });
    }

    Ok(())
}

pub fn validate_unique<'a>(field_name: &str, values: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(LocalizerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}
