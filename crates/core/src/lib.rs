//! Grantflow core: user identifier validation and the permission grant workflow

pub mod error;
pub mod identifier;
pub mod profile;
pub mod validation;
pub mod workflow;

pub use error::{GrantError, GrantResult};
pub use identifier::{UserIdentifier, is_valid_identifier};
pub use profile::Profile;
pub use validation::Validate;
pub use workflow::{GrantReport, GrantWorkflow};
