//! Error types shared by the validator, profiles and the grant workflow

/// Standard result type for grant operations
pub type GrantResult<T> = std::result::Result<T, GrantError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrantError {
    #[error("Usage: {0} <user_id>")]
    Usage(String),

    #[error("Invalid user ID format: {0}")]
    InvalidIdentifier(String),

    #[error("Profile '{0}' has no labels to apply")]
    EmptyProfile(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Grant workflow failed: {0}")]
    Workflow(String),
}

impl GrantError {
    /// Create a usage error for the named program
    pub fn usage(program: impl Into<String>) -> Self {
        Self::Usage(program.into())
    }

    /// Create an invalid profile error
    pub fn invalid_profile(message: impl Into<String>) -> Self {
        Self::InvalidProfile(message.into())
    }

    /// Create a workflow error
    pub fn workflow(message: impl Into<String>) -> Self {
        Self::Workflow(message.into())
    }
}
