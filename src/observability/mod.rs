//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Logger::{error, info, debug}
//!     → tracing event (field `scope` = logger name)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stderr (pretty, compact or JSON)
//! ```
//!
//! # Design Decisions
//! - Scoped level checks happen in the logger; the subscriber filter is a
//!   second, process-wide gate
//! - The registry's own events use the same pipeline

pub mod logging;

pub use logging::init_logging;
