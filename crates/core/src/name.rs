//! Field rules shared by every persisted entity.

use crate::error::{DomainError, DomainResult};

/// Validate a text field that is written to a record line.
///
/// Records are stored as whitespace-separated fields, so a name (or any other
/// text field) must be a single non-empty token to be readable again.
pub fn validate_record_field(field: &str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    if value.chars().any(char::is_whitespace) {
        return Err(DomainError::validation(format!(
            "{field} cannot contain whitespace: {value:?}"
        )));
    }
    Ok(())
}
