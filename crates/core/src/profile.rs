//! Grant profiles: the ordered labels a workflow applies and how it words them

use serde::{Deserialize, Serialize};

use crate::error::{GrantError, GrantResult};
use crate::identifier::UserIdentifier;
use crate::validation::{Validate, validators};

const USER_ID: &str = "{user_id}";
const LABEL: &str = "{label}";

/// A named, ordered set of permission labels plus the messages logged while
/// applying them.
///
/// Templates substitute `{user_id}` and, for `apply_message`, `{label}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub labels: Vec<String>,
    pub start_message: String,
    pub apply_message: String,
    pub complete_message: String,
    /// Printed on stdout as `SUCCESS: <success_message> <user_id>`
    pub success_message: String,
}

impl Profile {
    /// Basic read/write/execute grants
    pub fn standard() -> Self {
        Self {
            name: "grant-access".to_string(),
            labels: labels(&["read_access", "write_access", "execute_access"]),
            start_message: "Starting permission grant for user: {user_id}".to_string(),
            apply_message: "Granting permission '{label}' to {user_id}".to_string(),
            complete_message: "Permission grant completed for {user_id}".to_string(),
            success_message: "Permissions granted to user".to_string(),
        }
    }

    /// Advanced access configuration
    pub fn advanced() -> Self {
        Self {
            name: "configure-access".to_string(),
            labels: labels(&[
                "database_access_level_2",
                "api_access_premium",
                "admin_panel_access",
                "reporting_access",
            ]),
            start_message: "Starting advanced access configuration for user: {user_id}"
                .to_string(),
            apply_message: "Configuration '{label}' applied to {user_id}".to_string(),
            complete_message: "Advanced access configuration completed for {user_id}"
                .to_string(),
            success_message: "Advanced access configuration applied to user".to_string(),
        }
    }

    pub fn start_line(&self, user_id: &UserIdentifier) -> String {
        self.start_message.replace(USER_ID, user_id)
    }

    pub fn apply_line(&self, label: &str, user_id: &UserIdentifier) -> String {
        // Substitute the label last so a label can never inject `{user_id}`.
        self.apply_message
            .replace(USER_ID, user_id)
            .replace(LABEL, label)
    }

    pub fn completion_line(&self, user_id: &UserIdentifier) -> String {
        self.complete_message.replace(USER_ID, user_id)
    }

    pub fn success_line(&self, user_id: &UserIdentifier) -> String {
        format!("SUCCESS: {} {user_id}", self.success_message)
    }
}

impl Validate for Profile {
    fn validate(&self) -> GrantResult<()> {
        validators::validate_not_empty(&self.name, "profile.name")?;
        if self.labels.is_empty() {
            return Err(GrantError::EmptyProfile(self.name.clone()));
        }
        for label in &self.labels {
            validators::validate_not_empty(label, "profile.labels")?;
        }
        validators::validate_unique(&self.labels, "profile.labels")?;
        validators::validate_placeholder(&self.start_message, USER_ID, "profile.start_message")?;
        validators::validate_placeholder(&self.apply_message, USER_ID, "profile.apply_message")?;
        validators::validate_placeholder(&self.apply_message, LABEL, "profile.apply_message")?;
        validators::validate_placeholder(
            &self.complete_message,
            USER_ID,
            "profile.complete_message",
        )?;
        validators::validate_not_empty(&self.success_message, "profile.success_message")
    }
}

fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserIdentifier {
        UserIdentifier::parse("User12345").unwrap()
    }

    #[test]
    fn test_builtins_are_valid() {
        assert!(Profile::standard().validate().is_ok());
        assert!(Profile::advanced().validate().is_ok());
    }

    #[test]
    fn test_builtin_labels_in_order() {
        assert_eq!(
            Profile::standard().labels,
            vec!["read_access", "write_access", "execute_access"]
        );
        assert_eq!(
            Profile::advanced().labels,
            vec![
                "database_access_level_2",
                "api_access_premium",
                "admin_panel_access",
                "reporting_access"
            ]
        );
    }

    #[test]
    fn test_rendering() {
        let profile = Profile::standard();
        let user = user();
        assert_eq!(
            profile.apply_line("read_access", &user),
            "Granting permission 'read_access' to User12345"
        );
        assert_eq!(
            profile.completion_line(&user),
            "Permission grant completed for User12345"
        );
        assert_eq!(
            profile.success_line(&user),
            "SUCCESS: Permissions granted to user User12345"
        );
    }

    #[test]
    fn test_label_cannot_inject_user_id() {
        let profile = Profile::standard();
        let line = profile.apply_line("{user_id}", &user());
        assert_eq!(line, "Granting permission '{user_id}' to User12345");
    }

    #[test]
    fn test_rejects_duplicate_labels() {
        let mut profile = Profile::standard();
        profile.labels.push("read_access".to_string());
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_label_list() {
        let mut profile = Profile::standard();
        profile.labels.clear();
        assert_eq!(
            profile.validate(),
            Err(GrantError::EmptyProfile("grant-access".to_string()))
        );
    }

    #[test]
    fn test_rejects_blank_label() {
        let mut profile = Profile::advanced();
        profile.labels[1] = "  ".to_string();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_rejects_template_without_label() {
        let mut profile = Profile::standard();
        profile.apply_message = "Granting to {user_id}".to_string();
        let err = profile.validate().unwrap_err();
        assert!(err.to_string().contains("{label}"));
    }

    #[test]
    fn test_serde_field_names() {
        let value = serde_json::to_value(Profile::standard()).unwrap();
        assert_eq!(value["name"], "grant-access");
        assert_eq!(value["labels"][2], "execute_access");
        let back: Profile = serde_json::from_value(value).unwrap();
        assert_eq!(back, Profile::standard());
    }
}
