//! Named logger registry.
//!
//! # Responsibilities
//! - Map scope names to shared logger instances
//! - Create each logger once, on first registration
//! - Enumerate and look up registered loggers
//! - Push level configuration onto registered and future loggers
//!
//! # Design Decisions
//! - One `RwLock` guards the map; lookups share it, inserts take it exclusively
//! - Check-and-insert happens under the write lock, so concurrent first
//!   registrations of a name all get the same instance
//! - Entries are never replaced or removed
//! - A panicking factory poisons the lock but never touches the map, so
//!   poisoned guards are recovered rather than propagated
//! - Level configuration lives in an `ArcSwap` so registration never waits on a reload

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use arc_swap::ArcSwap;

use crate::config::levels::LevelConfig;
use crate::logger::{DefaultLoggerFactory, LogLevel, Logger, LoggerFactory};

/// A thread-safe registry of named loggers.
pub struct Registry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
    factory: Box<dyn LoggerFactory>,
    levels: ArcSwap<LevelConfig>,
}

impl Registry {
    /// Create an empty registry using [`DefaultLoggerFactory`].
    pub fn new() -> Self {
        Self::with_factory(DefaultLoggerFactory)
    }

    /// Create an empty registry that builds loggers with `factory`.
    pub fn with_factory(factory: impl LoggerFactory + 'static) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            factory: Box::new(factory),
            levels: ArcSwap::from_pointee(LevelConfig::default()),
        }
    }

    /// Set the level configuration before any logger is registered.
    pub fn with_levels(self, levels: LevelConfig) -> Self {
        self.levels.store(Arc::new(levels));
        self
    }

    /// Register a logger under `name`.
    ///
    /// If the name is already taken the existing logger is returned and
    /// `description` is ignored.
    pub fn register(&self, name: &str, description: &str) -> Arc<Logger> {
        if let Some(logger) = self.get_logger(name) {
            return logger;
        }

        let mut loggers = self.write();
        match loggers.entry(name.to_string()) {
            // Lost the race to another registration of the same name.
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let logger = self.factory.create(name, description);
                debug_assert_eq!(logger.name(), name, "factory returned a logger with a different name");
                logger.set_level(self.levels.load().level_for(name));

                tracing::debug!(scope = %name, level = %logger.level(), "Registered logger");
                entry.insert(Arc::new(logger)).clone()
            }
        }
    }

    /// Snapshot of all registered loggers, in no particular order.
    pub fn loggers(&self) -> Vec<Arc<Logger>> {
        let loggers = self.read();
        loggers.values().cloned().collect()
    }

    /// Look up a registered logger by name.
    pub fn get_logger(&self, name: &str) -> Option<Arc<Logger>> {
        let loggers = self.read();
        loggers.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current level configuration.
    pub fn levels(&self) -> Arc<LevelConfig> {
        self.levels.load_full()
    }

    /// Replace the level configuration and apply it to every registered logger.
    pub fn set_levels(&self, levels: LevelConfig) {
        // No registration may land between the swap and the apply loop.
        let loggers = self.read();
        self.levels.store(Arc::new(levels));

        let levels = self.levels.load();
        for logger in loggers.values() {
            logger.set_level(levels.level_for(logger.name()));
        }

        tracing::info!(
            default = %levels.default,
            overrides = levels.scopes.len(),
            loggers = loggers.len(),
            "Applied logger levels"
        );
    }

    /// Set every logger, present and future, to `level`.
    pub fn set_level_all(&self, level: LogLevel) {
        self.set_levels(LevelConfig::uniform(level));
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("loggers", &self.len())
            .field("levels", &self.levels())
            .finish()
    }
}
