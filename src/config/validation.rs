//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject scope names that cannot be written as level directives
//! - Reject `all`, which directives reserve for the default level
//! - Check the backend filter parses as an `EnvFilter`
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: RegistryConfig → Result<(), Vec<ValidationError>>

use tracing_subscriber::EnvFilter;

use crate::config::levels::ALL_SCOPES;
use crate::config::schema::RegistryConfig;
use crate::error::ValidationError;

/// Validate a parsed configuration.
pub fn validate_config(config: &RegistryConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for scope in config.logging.scopes.keys() {
        if let Err(e) = validate_scope_name(scope) {
            errors.push(e);
        }
    }

    if let Err(e) = EnvFilter::try_new(&config.logging.filter) {
        errors.push(ValidationError::InvalidFilter {
            filter: config.logging.filter.clone(),
            reason: e.to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check that `name` can appear on the left side of a `scope:level` directive.
pub fn validate_scope_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyScopeName);
    }
    if name.chars().any(|c| c == ':' || c == ',' || c.is_whitespace()) {
        return Err(ValidationError::InvalidScopeName(name.to_string()));
    }
    if name == ALL_SCOPES {
        return Err(ValidationError::ReservedScopeName(name.to_string()));
    }
    Ok(())
}
