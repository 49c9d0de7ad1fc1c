//! Profile and settings validation support

use crate::error::GrantResult;

/// Trait for validating configuration values
pub trait Validate {
    /// Validate the configuration
    ///
    /// Returns Ok(()) if valid, or an error describing what's wrong
    fn validate(&self) -> GrantResult<()>;
}

/// Common validation helpers
pub mod validators {
    use std::collections::HashSet;

    use crate::error::{GrantError, GrantResult};

    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field: &str) -> GrantResult<()> {
        if value.trim().is_empty() {
            return Err(GrantError::invalid_profile(format!(
                "{field}: cannot be empty"
            )));
        }
        Ok(())
    }

    /// Validate that a message template contains a placeholder
    pub fn validate_placeholder(template: &str, placeholder: &str, field: &str) -> GrantResult<()> {
        if !template.contains(placeholder) {
            return Err(GrantError::invalid_profile(format!(
                "{field}: must contain {placeholder}"
            )));
        }
        Ok(())
    }

    /// Validate that no entry appears twice
    pub fn validate_unique<'a, I>(values: I, field: &str) -> GrantResult<()>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut seen = HashSet::new();
        for value in values {
            if !seen.insert(value.as_str()) {
                return Err(GrantError::invalid_profile(format!(
                    "{field}: duplicate entry '{value}'"
                )));
            }
        }
        Ok(())
    }
}
