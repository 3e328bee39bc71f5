//! Per-scope level configuration.
//!
//! # Directive Syntax
//! ```text
//! info,http:debug,grpc:none
//! │    │          └─ scope override
//! │    └─ scope override
//! └─ default level (also accepted as `all:info`)
//! ```
//!
//! # Design Decisions
//! - Later directives override earlier ones
//! - Empty tokens and surrounding whitespace are ignored
//! - Scope names follow the same rules as config file scope names
//! - A failing directive string leaves the configuration untouched
//! - Scopes without an override fall back to the default level

use std::collections::BTreeMap;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::config::validation::validate_scope_name;
use crate::error::LevelParseError;
use crate::logger::LogLevel;

/// Scope name that addresses the default level in a directive string.
pub const ALL_SCOPES: &str = "all";

/// Resolved levels: a default plus per-scope overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelConfig {
    pub default: LogLevel,
    pub scopes: BTreeMap<String, LogLevel>,
}

impl LevelConfig {
    /// A configuration with only a default level.
    pub fn uniform(level: LogLevel) -> Self {
        Self {
            default: level,
            scopes: BTreeMap::new(),
        }
    }

    /// Level that a logger named `scope` should run at.
    pub fn level_for(&self, scope: &str) -> LogLevel {
        self.scopes.get(scope).copied().unwrap_or(self.default)
    }

    /// Apply a directive string on top of this configuration.
    ///
    /// Either every directive applies or, on error, none of them do.
    pub fn apply_directives(&mut self, directives: &str) -> Result<(), LevelParseError> {
        let mut next = self.clone();
        for token in directives.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            match token.split_once(':') {
                None => next.default = token.parse()?,
                Some((scope, level)) => {
                    let scope = scope.trim();
                    let level: LogLevel = level.parse()?;
                    if scope == ALL_SCOPES {
                        next.default = level;
                    } else {
                        validate_scope_name(scope)
                            .map_err(|_| LevelParseError::MalformedDirective(token.to_string()))?;
                        next.scopes.insert(scope.to_string(), level);
                    }
                }
            }
        }
        *self = next;
        Ok(())
    }
}

impl FromStr for LevelConfig {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = LevelConfig::default();
        config.apply_directives(s)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_level_sets_default() {
        let config: LevelConfig = "debug".parse().unwrap();
        assert_eq!(config, LevelConfig::uniform(LogLevel::Debug));
        assert_eq!(config.level_for("anything"), LogLevel::Debug);
    }

    #[test]
    fn test_all_scope_sets_default() {
        let config: LevelConfig = "all:error".parse().unwrap();
        assert_eq!(config.default, LogLevel::Error);
        assert!(config.scopes.is_empty());
    }

    #[test]
    fn test_scope_overrides() {
        let config: LevelConfig = " info , http:debug,, grpc : none ".parse().unwrap();
        assert_eq!(config.default, LogLevel::Info);
        assert_eq!(config.level_for("http"), LogLevel::Debug);
        assert_eq!(config.level_for("grpc"), LogLevel::None);
        assert_eq!(config.level_for("db"), LogLevel::Info);
    }

    #[test]
    fn test_later_directives_win() {
        let config: LevelConfig = "http:debug,http:error,debug,info".parse().unwrap();
        assert_eq!(config.level_for("http"), LogLevel::Error);
        assert_eq!(config.default, LogLevel::Info);
    }

    #[test]
    fn test_apply_on_top_of_existing() {
        let mut config: LevelConfig = "error,http:debug".parse().unwrap();
        config.apply_directives("grpc:info").unwrap();
        assert_eq!(config.default, LogLevel::Error);
        assert_eq!(config.level_for("http"), LogLevel::Debug);
        assert_eq!(config.level_for("grpc"), LogLevel::Info);
    }

    #[test]
    fn test_rejects_bad_directives() {
        assert_eq!(
            "http:loud".parse::<LevelConfig>(),
            Err(LevelParseError::UnknownLevel("loud".into()))
        );
        assert_eq!(
            ":debug".parse::<LevelConfig>(),
            Err(LevelParseError::MalformedDirective(":debug".into()))
        );
    }

    #[test]
    fn test_rejects_scope_with_inner_whitespace() {
        assert_eq!(
            "a b:debug".parse::<LevelConfig>(),
            Err(LevelParseError::MalformedDirective("a b:debug".into()))
        );
    }

    #[test]
    fn test_failed_apply_leaves_config_unchanged() {
        let mut config: LevelConfig = "error".parse().unwrap();
        let before = config.clone();

        let result = config.apply_directives("debug,http:debug,grpc:loud");
        assert_eq!(result, Err(LevelParseError::UnknownLevel("loud".into())));
        assert_eq!(config, before);
        assert_eq!(config.default, LogLevel::Error);
        assert!(config.scopes.is_empty());

        assert!(config.apply_directives("http:debug, :info").is_err());
        assert_eq!(config, before);
    }

    #[test]
    fn test_empty_string_is_default() {
        let config: LevelConfig = "".parse().unwrap();
        assert_eq!(config, LevelConfig::default());
    }
}
