//! Severity levels and conversion between symbolic and numeric forms.
//!
//! Numeric severities follow the conventional 0..=50 scale (NOTSET..CRITICAL) so
//! callers can mix named constants with arbitrary integers. Symbolic input is
//! parsed into the closed [`Level`] enumeration; anything outside it is an
//! [`Error::InvalidLevel`].

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub const CRITICAL: i32 = 50;
pub const FATAL: i32 = CRITICAL;
pub const ERROR: i32 = 40;
pub const WARNING: i32 = 30;
pub const WARN: i32 = WARNING;
pub const INFO: i32 = 20;
pub const DEBUG: i32 = 10;
pub const NOTSET: i32 = 0;

/// Known severities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Level {
    NotSet = NOTSET,
    Debug = DEBUG,
    Info = INFO,
    Warning = WARNING,
    Error = ERROR,
    Critical = CRITICAL,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::NotSet,
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    pub const fn severity(self) -> i32 {
        self as i32
    }

    /// Canonical upper-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Level::NotSet => "NOTSET",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Exact match only; severities between the named steps return `None`.
    pub fn from_severity(severity: i32) -> Option<Level> {
        Level::ALL.into_iter().find(|l| l.severity() == severity)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Case-insensitive, surrounding whitespace ignored. Accepts the `FATAL` and
    /// `WARN` aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "CRITICAL" | "FATAL" => Ok(Level::Critical),
            "ERROR" => Ok(Level::Error),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "NOTSET" => Ok(Level::NotSet),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

/// A level as supplied by a caller: either a name to be parsed or a raw severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelSpec {
    Name(String),
    Severity(i32),
}

impl From<&str> for LevelSpec {
    fn from(value: &str) -> Self {
        LevelSpec::Name(value.to_string())
    }
}

impl From<String> for LevelSpec {
    fn from(value: String) -> Self {
        LevelSpec::Name(value)
    }
}

impl From<i32> for LevelSpec {
    fn from(value: i32) -> Self {
        LevelSpec::Severity(value)
    }
}

impl From<Level> for LevelSpec {
    fn from(value: Level) -> Self {
        LevelSpec::Severity(value.severity())
    }
}

/// Convert a symbolic or numeric level to its numeric severity.
///
/// Integers pass through unchanged, including values that do not correspond to a
/// named level. Every level-setting path in the crate goes through here before
/// touching a logger.
pub fn convert_level(value: impl Into<LevelSpec>) -> Result<i32> {
    match value.into() {
        LevelSpec::Severity(severity) => Ok(severity),
        LevelSpec::Name(name) => name.parse::<Level>().map(Level::severity),
    }
}

/// Display name for a severity, `"Level N"` when it has none.
pub fn level_name(severity: i32) -> String {
    match Level::from_severity(severity) {
        Some(level) => level.name().to_string(),
        None => format!("Level {severity}"),
    }
}

/// Bucket a numeric severity onto the `tracing` scale.
pub(crate) fn tracing_level(severity: i32) -> tracing::Level {
    match severity {
        s if s >= ERROR => tracing::Level::ERROR,
        s if s >= WARNING => tracing::Level::WARN,
        s if s >= INFO => tracing::Level::INFO,
        s if s >= DEBUG => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}
