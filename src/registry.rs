//! Hierarchical named loggers.
//!
//! A [`Registry`] hands out [`Logger`] handles keyed by dot-separated names. The
//! same name always yields the same handle. A logger without its own level
//! inherits from the nearest existing ancestor (`a.b` for `a.b.c`, then `a`),
//! falling back to the root logger. Records that pass the effective level are
//! emitted as `tracing` events under the `pi_log` target; installing a subscriber
//! to render them is left to the embedding application (see [`crate::logging`]).

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};
use tracing::{debug, error, info, trace, warn};

use crate::level::{self, CRITICAL, DEBUG, ERROR, INFO, NOTSET, WARNING};

/// Name reported by the top-level logger.
pub const ROOT_NAME: &str = "root";

/// Initial level of the root logger in a fresh registry.
const ROOT_DEFAULT_LEVEL: i32 = WARNING;

static GLOBAL: OnceCell<Registry> = OnceCell::new();

struct Shared {
    root: Logger,
    loggers: RwLock<HashMap<String, Logger>>,
}

/// Owner of a logger namespace. Cloning shares the namespace.
#[derive(Clone)]
pub struct Registry {
    shared: Arc<Shared>,
}

impl Registry {
    pub fn new() -> Self {
        let shared = Arc::new_cyclic(|weak: &Weak<Shared>| Shared {
            root: Logger::new(ROOT_NAME, ROOT_DEFAULT_LEVEL, weak.clone()),
            loggers: RwLock::new(HashMap::new()),
        });
        Self { shared }
    }

    /// Process-wide registry used by the free functions in [`crate::facade`].
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    pub fn root(&self) -> Logger {
        self.shared.root.clone()
    }

    /// Fetch the logger called `name`, creating it on first use.
    ///
    /// An empty name or `"root"` addresses the root logger.
    pub fn get_logger(&self, name: &str) -> Logger {
        if name.is_empty() || name == ROOT_NAME {
            return self.root();
        }
        if let Some(logger) = self.read_loggers().get(name) {
            return logger.clone();
        }
        let mut loggers = self
            .shared
            .loggers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        loggers
            .entry(name.to_string())
            .or_insert_with(|| Logger::new(name, NOTSET, Arc::downgrade(&self.shared)))
            .clone()
    }

    /// Names of every logger created so far, root excluded, sorted.
    pub fn logger_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_loggers().keys().cloned().collect();
        names.sort();
        names
    }

    fn read_loggers(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Logger>> {
        self.shared
            .loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
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
            .field("loggers", &self.logger_names())
            .finish()
    }
}

struct Node {
    name: String,
    level: AtomicI32,
    registry: Weak<Shared>,
}

/// Handle to a named logger. Clones refer to the same logger.
#[derive(Clone)]
pub struct Logger {
    node: Arc<Node>,
}

impl Logger {
    fn new(name: &str, level: i32, registry: Weak<Shared>) -> Self {
        Self {
            node: Arc::new(Node {
                name: name.to_string(),
                level: AtomicI32::new(level),
                registry,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.node.name
    }

    pub fn is_root(&self) -> bool {
        self.node.name == ROOT_NAME
    }

    /// Level set directly on this logger; `NOTSET` means inherited.
    pub fn level(&self) -> i32 {
        self.node.level.load(Ordering::Relaxed)
    }

    pub fn set_level(&self, severity: i32) {
        self.node.level.store(severity, Ordering::Relaxed);
    }

    /// Resolve the threshold actually applied to records on this logger.
    pub fn effective_level(&self) -> i32 {
        let own = self.level();
        if own != NOTSET || self.is_root() {
            return own;
        }
        let Some(shared) = self.node.registry.upgrade() else {
            return NOTSET;
        };
        let loggers = shared
            .loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut name = self.name();
        while let Some((parent, _)) = name.rsplit_once('.') {
            if let Some(ancestor) = loggers.get(parent) {
                let level = ancestor.level();
                if level != NOTSET {
                    return level;
                }
            }
            name = parent;
        }
        shared.root.level()
    }

    pub fn is_enabled_for(&self, severity: i32) -> bool {
        severity >= self.effective_level()
    }

    /// Logger for `suffix` beneath this one (`a` + `b.c` -> `a.b.c`).
    pub fn child(&self, suffix: &str) -> Logger {
        let Some(shared) = self.node.registry.upgrade() else {
            return self.clone();
        };
        let registry = Registry { shared };
        if self.is_root() {
            registry.get_logger(suffix)
        } else {
            registry.get_logger(&format!("{}.{suffix}", self.name()))
        }
    }

    /// Emit `message` at `severity` if this logger is enabled for it.
    pub fn log(&self, severity: i32, message: impl fmt::Display) {
        if !self.is_enabled_for(severity) {
            return;
        }
        let logger = self.name();
        let level_name = level::level_name(severity);
        let bucket = level::tracing_level(severity);
        if bucket == tracing::Level::ERROR {
            error!(target: "pi_log", logger, severity, level_name = %level_name, "{message}");
        } else if bucket == tracing::Level::WARN {
            warn!(target: "pi_log", logger, severity, level_name = %level_name, "{message}");
        } else if bucket == tracing::Level::INFO {
            info!(target: "pi_log", logger, severity, level_name = %level_name, "{message}");
        } else if bucket == tracing::Level::DEBUG {
            debug!(target: "pi_log", logger, severity, level_name = %level_name, "{message}");
        } else {
            trace!(target: "pi_log", logger, severity, level_name = %level_name, "{message}");
        }
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(DEBUG, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(INFO, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(WARNING, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(ERROR, message);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(CRITICAL, message);
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Logger {}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("level", &level::level_name(self.level()))
            .finish()
    }
}
