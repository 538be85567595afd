use crate::utils::error::{PeakError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks the visitor file path before anything is opened. A path that does
/// not exist passes; opening it later reports the file access error.
pub fn validate_input_path(field_name: &str, path: &str) -> Result<()> {
    let reason = if path.is_empty() {
        "Input path cannot be empty"
    } else if path.contains('\0') {
        "Input path contains null bytes"
    } else if Path::new(path).is_dir() {
        "Input path is a directory, expected a file of HH:MM,HH:MM lines"
    } else {
        return Ok(());
    };

    Err(PeakError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    })
}
