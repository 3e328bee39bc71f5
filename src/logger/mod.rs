//! Scoped loggers.
//!
//! # Responsibilities
//! - Carry the identity of a log scope (name + description)
//! - Hold the scope's runtime-adjustable output level
//! - Forward enabled messages to the `tracing` backend
//!
//! # Design Decisions
//! - Name and description are fixed at construction; only the level mutates
//! - Level is an `AtomicU8` so it can change while the logger is shared
//! - Formatting and sinks belong to the subscriber, not to the logger

pub mod factory;
pub mod level;

pub use factory::{DefaultLoggerFactory, LoggerFactory};
pub use level::LogLevel;

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};

/// A named log scope.
pub struct Logger {
    name: String,
    description: String,
    level: AtomicU8,
}

impl Logger {
    /// Create a logger at the default level.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_level(name, description, LogLevel::default())
    }

    /// Create a logger at the given level.
    pub fn with_level(name: impl Into<String>, description: impl Into<String>, level: LogLevel) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            level: AtomicU8::new(level as u8),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current output level.
    pub fn level(&self) -> LogLevel {
        LogLevel::from(self.level.load(Ordering::Relaxed))
    }

    /// Change the output level. Visible to every holder of this logger.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// Returns true if messages at `level` are emitted.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && level <= self.level()
    }

    pub fn error(&self, message: impl fmt::Display) {
        if self.enabled(LogLevel::Error) {
            tracing::error!(scope = %self.name, "{}", message);
        }
    }

    pub fn info(&self, message: impl fmt::Display) {
        if self.enabled(LogLevel::Info) {
            tracing::info!(scope = %self.name, "{}", message);
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        if self.enabled(LogLevel::Debug) {
            tracing::debug!(scope = %self.name, "{}", message);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("level", &self.level())
            .finish()
    }
}
