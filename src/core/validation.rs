//! Input validation for sealenv operations.
//!
//! Validates secret names and resource identifiers.

use crate::error::{InputError, Result};

/// Whether `name` is a valid secret name (`[A-Za-z0-9_]+`).
pub fn is_secret_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Validate one segment of an `owner/name` resource identifier.
///
/// Segments must be non-empty and contain only A-Z, a-z, 0-9, `-`, `_`
/// and `.`, and may not be `.` or `..`.
///
/// # Errors
///
/// Returns `InputError::InvalidResource` if the segment is invalid.
pub fn validate_segment(resource: &str, segment: &str, what: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(InputError::InvalidResource {
            resource: resource.to_string(),
            reason: format!("{} is empty", what),
        }
        .into());
    }

    if segment == "." || segment == ".." {
        return Err(InputError::InvalidResource {
            resource: resource.to_string(),
            reason: format!("{} cannot be '{}'", what, segment),
        }
        .into());
    }

    for (i, ch) in segment.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '_' | '.') {
            return Err(InputError::InvalidResource {
                resource: resource.to_string(),
                reason: format!(
                    "invalid character '{}' at position {} of {}",
                    ch,
                    i + 1,
                    what
                ),
            }
            .into());
        }
    }

    Ok(())
}
