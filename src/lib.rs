//! Named logger registry.
//!
//! ```text
//!   register("http", "http access log")
//!          │
//!          ▼
//!   ┌──────────────── Registry ────────────────┐
//!   │ RwLock<HashMap<name, Arc<Logger>>>       │
//!   │ LoggerFactory ── builds on first use     │
//!   │ ArcSwap<LevelConfig> ── levels by scope  │◀── config (TOML / "info,http:debug")
//!   └──────────────────────────────────────────┘
//!          │
//!          ▼
//!   Arc<Logger> ── error/info/debug ──▶ tracing subscriber
//! ```

pub mod config;
pub mod error;
pub mod global;
pub mod logger;
pub mod observability;
pub mod registry;

pub use config::{LevelConfig, RegistryConfig};
pub use error::{ConfigError, LevelParseError, ValidationError};
pub use global::{get_logger, global, loggers, register};
pub use logger::{DefaultLoggerFactory, LogLevel, Logger, LoggerFactory};
pub use registry::Registry;
