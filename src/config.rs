//! Owned logging configuration.
//!
//! [`LogConfig`] carries the application root (the logger name treated as the top
//! of the embedding application's namespace) alongside the registry it configures.
//! Applications that want to avoid process-wide state hold one of these directly;
//! the free functions in [`crate::facade`] wrap a shared instance.

use std::panic::Location;

use crate::caller::{application_name_at, application_name_from_module};
use crate::error::Result;
use crate::level::{LevelSpec, convert_level};
use crate::registry::{Logger, Registry};

/// A level already applied to `logger` whose announcement has not been emitted.
///
/// Kept separate so callers holding a lock can release it before logging.
#[must_use]
pub(crate) struct LevelChange {
    logger: Logger,
    severity: i32,
}

impl LevelChange {
    pub(crate) fn announce(self) -> Logger {
        let severity = self.severity;
        self.logger.log(severity, format_args!("logging set to {severity}"));
        self.logger
    }
}

/// A logger plus the level change, if any, still to be announced on it.
pub(crate) type Staged = (Logger, Option<LevelChange>);

pub(crate) fn announce_staged((logger, change): Staged) -> Logger {
    if let Some(change) = change {
        change.announce();
    }
    logger
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    registry: Registry,
    app_root_name: Option<String>,
    app_root: Option<Logger>,
}

impl LogConfig {
    /// Configuration whose application root is resolved from the first caller.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            app_root_name: None,
            app_root: None,
        }
    }

    /// Configuration with an explicitly named application root.
    pub fn with_application(registry: Registry, name: &str) -> Self {
        let mut config = Self::new(registry);
        config.set_application_root(name);
        config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn application_root_name(&self) -> Option<&str> {
        self.app_root_name.as_deref()
    }

    /// Logger cached when the application root was last chosen.
    pub fn application_root(&self) -> Option<&Logger> {
        self.app_root.as_ref()
    }

    /// Logger for the application root, resolving the root name on first use.
    ///
    /// A `level`, if given, is applied the same way [`LogConfig::set_log_level`] does.
    #[track_caller]
    pub fn get_application_logger(&mut self, level: Option<LevelSpec>) -> Result<Logger> {
        self.stage_application_logger(level).map(announce_staged)
    }

    /// Like [`LogConfig::get_application_logger`], but an unset root is named after
    /// the crate owning `module_path` (see [`crate::application_logger!`]).
    pub fn get_application_logger_in(
        &mut self,
        module_path: &str,
        level: Option<LevelSpec>,
    ) -> Result<Logger> {
        self.resolve_application_root_in(module_path);
        self.get_application_logger(level)
    }

    /// Name of the application root, taken from the crate owning `module_path`
    /// if none is set yet.
    pub fn resolve_application_root_in(&mut self, module_path: &str) -> String {
        self.resolve_application_root_with(|| application_name_from_module(module_path))
    }

    #[track_caller]
    pub(crate) fn stage_application_logger(
        &mut self,
        level: Option<LevelSpec>,
    ) -> Result<Staged> {
        let name = self.resolve_application_root(Location::caller());
        self.stage_logger(Some(&name), level)
    }

    /// Name of the application root, derived from `caller` if none is set yet.
    pub fn resolve_application_root(&mut self, caller: &Location<'_>) -> String {
        self.resolve_application_root_with(|| application_name_at(caller))
    }

    fn resolve_application_root_with<F>(&mut self, derive: F) -> String
    where
        F: FnOnce() -> String,
    {
        if let Some(name) = &self.app_root_name {
            return name.clone();
        }
        let name = derive();
        self.set_application_root(&name);
        name
    }

    /// Replace the application root, bypassing caller resolution.
    pub fn set_application_root(&mut self, name: &str) -> Logger {
        let logger = self.registry.get_logger(name);
        self.app_root_name = Some(name.to_string());
        self.app_root = Some(logger.clone());
        logger
    }

    /// Set the level on the unnamed top-level logger.
    pub fn set_root_level(&self, level: impl Into<LevelSpec>) -> Result<()> {
        let severity = convert_level(level)?;
        self.registry.root().set_level(severity);
        Ok(())
    }

    #[track_caller]
    pub fn set_application_level(&mut self, level: impl Into<LevelSpec>) -> Result<()> {
        let severity = convert_level(level)?;
        self.get_application_logger(None)?.set_level(severity);
        Ok(())
    }

    /// Set the level on `name` (the application logger when `None`) and announce
    /// the change on that logger at the new level.
    #[track_caller]
    pub fn set_log_level(
        &mut self,
        level: impl Into<LevelSpec>,
        name: Option<&str>,
    ) -> Result<Logger> {
        self.stage_log_level(level, name).map(LevelChange::announce)
    }

    #[track_caller]
    pub(crate) fn stage_log_level(
        &mut self,
        level: impl Into<LevelSpec>,
        name: Option<&str>,
    ) -> Result<LevelChange> {
        let severity = convert_level(level)?;
        let logger = match name {
            Some(name) => self.registry.get_logger(name),
            None => self.get_application_logger(None)?,
        };
        logger.set_level(severity);
        Ok(LevelChange { logger, severity })
    }

    /// Logger for `name` (the root when `None`).
    ///
    /// A `level` goes through [`LogConfig::set_log_level`] with the same `name`, so
    /// with no name it lands on the application logger, not the returned root.
    #[track_caller]
    pub fn get_logger(
        &mut self,
        name: Option<&str>,
        level: Option<LevelSpec>,
    ) -> Result<Logger> {
        self.stage_logger(name, level).map(announce_staged)
    }

    #[track_caller]
    pub(crate) fn stage_logger(
        &mut self,
        name: Option<&str>,
        level: Option<LevelSpec>,
    ) -> Result<Staged> {
        let change = match level {
            Some(level) => Some(self.stage_log_level(level, name)?),
            None => None,
        };
        Ok((self.registry.get_logger(name.unwrap_or_default()), change))
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(Registry::global().clone())
    }
}
