//! Grantflow command-line tools
//!
//! Each binary wires one built-in [`Profile`](grantflow_core::Profile) into
//! [`run`]: settings, logging, argument parsing, validation, workflow.

pub mod commands;
pub mod config;
pub mod logging;

pub use commands::{Cli, execute, run};
pub use config::Settings;
