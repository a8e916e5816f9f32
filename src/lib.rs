//! Application-level logging configuration.
//!
//! Named loggers live in a [`Registry`] and form a dot-separated hierarchy whose
//! levels inherit downwards. On top of that sit helpers to pick an application
//! root logger, convert symbolic levels, and set levels by name:
//!
//! ```
//! pi_log::set_application_root("DebugApp");
//! let log = pi_log::get_application_logger(None).unwrap();
//! assert_eq!(log.name(), "DebugApp");
//!
//! pi_log::set_log_level("info", Some("DebugApp.db")).unwrap();
//! assert_eq!(pi_log::convert_level(" Warning ").unwrap(), pi_log::WARNING);
//! ```
//!
//! Records are emitted as `tracing` events; [`configure_logging`] installs a
//! subscriber that prints them.

pub mod caller;
pub mod config;
pub mod error;
pub mod facade;
pub mod level;
pub mod logging;
pub mod registry;

#[cfg(test)]
mod testing;

pub use caller::resolve_caller_application_name;
pub use config::LogConfig;
pub use error::{Error, Result};
pub use facade::{
    get_application_logger, get_application_logger_in, get_logger, set_application_level,
    set_application_root, set_log_level, set_root_level,
};
pub use level::{
    CRITICAL, DEBUG, ERROR, FATAL, INFO, Level, LevelSpec, NOTSET, WARN, WARNING, convert_level,
    level_name,
};
pub use logging::{SubscriberOptions, configure_logging};
pub use registry::{Logger, Registry};
