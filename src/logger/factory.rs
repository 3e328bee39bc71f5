//! Logger construction seam.

use crate::logger::Logger;

/// Builds loggers on behalf of a [`Registry`](crate::Registry).
///
/// The registry calls `create` at most once per name, while holding its
/// write lock, so implementations should be quick and must not call back
/// into the same registry.
pub trait LoggerFactory: Send + Sync {
    fn create(&self, name: &str, description: &str) -> Logger;
}

/// Creates plain [`Logger`]s at the default level.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLoggerFactory;

impl LoggerFactory for DefaultLoggerFactory {
    fn create(&self, name: &str, description: &str) -> Logger {
        Logger::new(name, description)
    }
}

impl<F> LoggerFactory for F
where
    F: Fn(&str, &str) -> Logger + Send + Sync,
{
    fn create(&self, name: &str, description: &str) -> Logger {
        self(name, description)
    }
}
