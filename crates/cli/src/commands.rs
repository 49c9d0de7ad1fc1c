//! CLI commands

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use grantflow_core::{GrantError, GrantReport, GrantWorkflow, Profile, UserIdentifier};
use tracing::{debug, error, info};

use crate::config::{DEFAULT_LOG_LEVEL, Settings};
use crate::logging;

/// Validate a user ID and apply a grant profile to it
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// User ID: 7 to 12 ASCII letters or digits
    #[arg(value_name = "USER_ID", allow_hyphen_values = true)]
    pub user_id: Option<String>,

    /// Anything after the user ID; accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// Parse arguments for the binary serving `profile`
    ///
    /// # Errors
    ///
    /// Returns the clap error for malformed command lines
    pub fn try_parse_for<I, T>(profile: &Profile, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command()
            .bin_name(profile.name.clone())
            .about(format!(
                "Validate a user ID and apply: {}",
                profile.labels.join(", ")
            ))
            .try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }
}

/// Entry point shared by every binary
///
/// Loads settings, installs logging, then validates and runs the workflow.
/// Every failure is logged and mapped to exit status 1.
pub fn run(profile: Profile) -> ExitCode {
    let settings = Settings::load(profile);

    let log_level = settings
        .as_ref()
        .map_or(DEFAULT_LOG_LEVEL, |settings| settings.log_level.as_str());
    if let Err(e) = logging::init_logging(log_level) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let cli = match Cli::try_parse_for(&settings.profile, std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            error!("{}", e.render().to_string().trim_end());
            return ExitCode::FAILURE;
        }
    };

    if !cli.rest.is_empty() {
        debug!("Ignoring {} argument(s) after the user ID", cli.rest.len());
    }

    match execute(&settings.profile, cli.user_id.as_deref()) {
        Ok(report) => {
            println!("{}", settings.profile.success_line(&report.user_id));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Validate `raw_user_id` and apply `profile` to it
///
/// Surrounding whitespace is trimmed before validation.
///
/// # Errors
///
/// Returns [`GrantError::Usage`] when no user ID was given,
/// [`GrantError::InvalidIdentifier`] when it fails validation, and
/// [`GrantError::Workflow`] when the grant itself fails
pub fn execute(profile: &Profile, raw_user_id: Option<&str>) -> Result<GrantReport> {
    let Some(raw_user_id) = raw_user_id else {
        return Err(GrantError::usage(&profile.name).into());
    };

    let user_id = UserIdentifier::parse(raw_user_id.trim())?;
    info!("{} started for user: {user_id}", profile.name);

    let report = GrantWorkflow::new(profile.clone())
        .run(&user_id)
        .map_err(|e| GrantError::workflow(e.to_string()))
        .context("Error during execution")?;

    if !report.success {
        return Err(GrantError::workflow(format!("grant incomplete for {user_id}")).into());
    }

    info!("{} completed successfully", profile.name);
    Ok(report)
}
