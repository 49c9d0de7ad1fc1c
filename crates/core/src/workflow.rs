//! The grant workflow
//!
//! Applies every label of a [`Profile`] to a validated user, in order. The
//! grant itself is simulated: each application is an `INFO` record. A run
//! either logs every label or, when the profile is unusable, nothing at all.

use tracing::{debug, info};

use crate::error::{GrantError, GrantResult};
use crate::identifier::UserIdentifier;
use crate::profile::Profile;

/// Outcome of a workflow run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantReport {
    pub success: bool,
    pub user_id: UserIdentifier,
    pub profile: String,
    /// Every record emitted, in order: opening, one per label, completion
    pub lines: Vec<String>,
}

impl GrantReport {
    /// Records emitted for individual labels
    pub fn label_lines(&self) -> &[String] {
        match self.lines.len() {
            0..=2 => &[],
            n => &self.lines[1..n - 1],
        }
    }

    pub fn completion_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct GrantWorkflow {
    profile: Profile,
}

impl GrantWorkflow {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }

    /// Apply every label of the profile to `user_id`
    ///
    /// # Errors
    ///
    /// Returns [`GrantError::EmptyProfile`] if the profile has no labels
    pub fn run(&self, user_id: &UserIdentifier) -> GrantResult<GrantReport> {
        if self.profile.labels.is_empty() {
            return Err(GrantError::EmptyProfile(self.profile.name.clone()));
        }

        let mut lines = Vec::with_capacity(self.profile.labels.len() + 2);
        let mut emit = |line: String| {
            info!("{line}");
            lines.push(line);
        };

        emit(self.profile.start_line(user_id));
        for label in &self.profile.labels {
            debug!(profile = %self.profile.name, label = %label, "applying label");
            emit(self.profile.apply_line(label, user_id));
        }
        emit(self.profile.completion_line(user_id));

        Ok(GrantReport {
            success: true,
            user_id: user_id.clone(),
            profile: self.profile.name.clone(),
            lines,
        })
    }
}
