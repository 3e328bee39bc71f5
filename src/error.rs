//! Error types for level parsing and configuration.
//!
//! Registry operations are infallible; every error in this crate comes from
//! turning user input (level strings, config files) into levels.

use thiserror::Error;

/// Error produced while parsing a level or a level directive string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelParseError {
    #[error("unknown log level '{0}' (expected none, error, info or debug)")]
    UnknownLevel(String),

    #[error("malformed level directive '{0}': expected '<level>' or '<scope>:<level>'")]
    MalformedDirective(String),
}

/// A semantic problem in a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("scope name must not be empty")]
    EmptyScopeName,

    #[error("scope name '{0}' contains a reserved character (':', ',' or whitespace)")]
    InvalidScopeName(String),

    #[error("scope name '{0}' is reserved for the default level; use default_level instead")]
    ReservedScopeName(String),

    #[error("invalid backend filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_all_errors() {
        let err = ConfigError::Validation(vec![
            ValidationError::EmptyScopeName,
            ValidationError::InvalidScopeName("a b".into()),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: scope name must not be empty, \
             scope name 'a b' contains a reserved character (':', ',' or whitespace)"
        );
    }
}
