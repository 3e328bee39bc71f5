//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)            level string ("info,http:debug")
//!     → loader.rs                   → levels.rs (parse directives)
//!     → validation.rs                        │
//!     → RegistryConfig                       │
//!     → LoggingConfig::level_config() ───────┴→ LevelConfig
//!                                               → Registry::set_levels
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads + validates
//!     → channel → apply_updates → Registry::set_levels
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A failed reload keeps the levels already in effect

pub mod levels;
pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use levels::LevelConfig;
pub use loader::{load_config, parse_config};
pub use schema::{LogFormat, LoggingConfig, RegistryConfig};
