//! User identifier validation

use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{GrantError, GrantResult};

/// Minimum identifier length, inclusive
pub const MIN_LEN: usize = 7;
/// Maximum identifier length, inclusive
pub const MAX_LEN: usize = 12;

static IDENTIFIER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[A-Za-z0-9]{{{MIN_LEN},{MAX_LEN}}}$"))
        .expect("identifier pattern is a valid regex")
});

/// Returns `true` iff `candidate` is present and made of 7 to 12 ASCII
/// letters or digits.
///
/// No trimming happens here; callers strip surrounding whitespace first.
pub fn is_valid_identifier(candidate: Option<&str>) -> bool {
    match candidate {
        Some(value) if !value.is_empty() => IDENTIFIER_PATTERN.is_match(value),
        _ => false,
    }
}

/// A user identifier that passed format validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserIdentifier(String);

impl UserIdentifier {
    /// Validate `value` and wrap it
    ///
    /// # Errors
    ///
    /// Returns [`GrantError::InvalidIdentifier`] carrying the rejected value
    pub fn parse(value: &str) -> GrantResult<Self> {
        if is_valid_identifier(Some(value)) {
            Ok(Self(value.to_string()))
        } else {
            Err(GrantError::InvalidIdentifier(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for UserIdentifier {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for UserIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for UserIdentifier {
    type Err = GrantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for UserIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
