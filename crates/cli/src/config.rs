//! CLI configuration utilities
//!
//! Settings are layered the usual way: built-in defaults for the binary's
//! profile, then an optional file named by `GRANTFLOW_CONFIG`, then
//! `GRANTFLOW__*` environment variables (`GRANTFLOW__LOG_LEVEL`,
//! `GRANTFLOW__PROFILE__LABELS=a,b,c`, ...).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use grantflow_core::{GrantError, GrantResult, Profile, Validate};
use serde::{Deserialize, Serialize};

/// Environment variable naming an optional settings file
pub const CONFIG_FILE_ENV: &str = "GRANTFLOW_CONFIG";

/// Prefix for per-key environment overrides
pub const ENV_PREFIX: &str = "GRANTFLOW";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "debug")
    pub log_level: String,
    pub profile: Profile,
}

impl Settings {
    pub fn defaults(profile: Profile) -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            profile,
        }
    }

    /// Load settings for `profile` from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed, or if
    /// the resulting profile is invalid
    pub fn load(profile: Profile) -> Result<Self> {
        let file = std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
        Self::load_with(profile, file.as_deref(), environment())
    }

    /// Load settings from an explicit file and environment source
    ///
    /// # Errors
    ///
    /// Returns an error if any source fails to parse or validation fails
    pub fn load_with(
        profile: Profile,
        file: Option<&Path>,
        env: config::Environment,
    ) -> Result<Self> {
        let defaults = Self::defaults(profile);

        let mut builder = config::Config::builder()
            // Set default values
            .set_default("log_level", defaults.log_level)?
            .set_default("profile.name", defaults.profile.name)?
            .set_default("profile.labels", defaults.profile.labels)?
            .set_default("profile.start_message", defaults.profile.start_message)?
            .set_default("profile.apply_message", defaults.profile.apply_message)?
            .set_default("profile.complete_message", defaults.profile.complete_message)?
            .set_default("profile.success_message", defaults.profile.success_message)?;

        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path));
        }

        let settings: Self = builder
            .add_source(env)
            .build()
            .and_then(config::Config::try_deserialize::<Self>)
            .context("Failed to load settings")?;

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> GrantResult<()> {
        if self.log_level.trim().is_empty() {
            return Err(GrantError::invalid_profile("log_level: cannot be empty"));
        }
        self.profile.validate()
    }
}

/// Environment source for `GRANTFLOW__*` overrides
pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("profile.labels")
}
