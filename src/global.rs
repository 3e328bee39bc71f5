//! Process-wide default registry.
//!
//! Libraries that cannot be handed a [`Registry`] register their scopes
//! here. Applications that own their wiring should prefer an explicit
//! registry passed to the components that need it.

use std::sync::{Arc, OnceLock};

use crate::logger::Logger;
use crate::registry::Registry;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, created empty on first use.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// Register a logger in the process-wide registry.
/// If the logger already exists, the already registered logger is returned.
pub fn register(name: &str, description: &str) -> Arc<Logger> {
    global().register(name, description)
}

/// All loggers in the process-wide registry.
pub fn loggers() -> Vec<Arc<Logger>> {
    global().loggers()
}

/// Look up a logger in the process-wide registry.
pub fn get_logger(name: &str) -> Option<Arc<Logger>> {
    global().get_logger(name)
}
