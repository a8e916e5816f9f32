//! Process-wide convenience functions.
//!
//! Each function forwards to a single shared [`LogConfig`] bound to
//! [`Registry::global`]. The shared state sits behind a mutex, so concurrent
//! first calls agree on one application root. Callers that would rather thread
//! configuration through explicitly can use [`LogConfig`] directly.

use once_cell::sync::OnceCell;
use std::panic::Location;
use std::sync::{Mutex, PoisonError};

use crate::config::{LevelChange, LogConfig, announce_staged};
use crate::error::Result;
use crate::level::{LevelSpec, convert_level};
use crate::registry::Logger;

static STATE: OnceCell<Mutex<LogConfig>> = OnceCell::new();

// Closures do not forward `#[track_caller]`, so functions that may resolve the
// application root capture the caller's location before entering `with_config`.
// Level announcements are emitted after the lock is released so subscribers may
// call back into these functions.

fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&mut LogConfig) -> R,
{
    let m = STATE.get_or_init(|| Mutex::new(LogConfig::default()));
    let mut guard = m.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Set the level of the top-level logger; loggers without their own level follow it.
pub fn set_root_level(level: impl Into<LevelSpec>) -> Result<()> {
    with_config(|config| config.set_root_level(level))
}

#[track_caller]
pub fn set_application_level(level: impl Into<LevelSpec>) -> Result<()> {
    let caller = Location::caller();
    with_config(|config| {
        let severity = convert_level(level)?;
        config.resolve_application_root(caller);
        config.set_application_level(severity)
    })
}

/// Logger for the application root.
///
/// On the first call (unless [`set_application_root`] ran before) the root name
/// is derived from the caller's source location.
#[track_caller]
pub fn get_application_logger(level: Option<LevelSpec>) -> Result<Logger> {
    let caller = Location::caller();
    with_config(|config| {
        config.resolve_application_root(caller);
        config.stage_application_logger(level)
    })
    .map(announce_staged)
}

/// [`get_application_logger`] for callers that name their own crate; used by
/// [`application_logger!`](crate::application_logger).
pub fn get_application_logger_in(module_path: &str, level: Option<LevelSpec>) -> Result<Logger> {
    with_config(|config| {
        config.resolve_application_root_in(module_path);
        config.stage_application_logger(level)
    })
    .map(announce_staged)
}

/// Use `name` as the application root from now on.
pub fn set_application_root(name: &str) -> Logger {
    with_config(|config| config.set_application_root(name))
}

/// Set `level` on `name`, or on the application logger when `name` is `None`,
/// then log the change at that level.
#[track_caller]
pub fn set_log_level(level: impl Into<LevelSpec>, name: Option<&str>) -> Result<Logger> {
    let caller = Location::caller();
    with_config(|config| {
        let severity = convert_level(level)?;
        if name.is_none() {
            config.resolve_application_root(caller);
        }
        config.stage_log_level(severity, name)
    })
    .map(LevelChange::announce)
}

/// Logger for `name` (the root logger when `None`), optionally setting a level
/// the way [`set_log_level`] does for the same `name`.
///
/// ```
/// let log = pi_log::get_logger(Some("pi_log.logs"), Some("debug".into())).unwrap();
/// assert_eq!(log.name(), "pi_log.logs");
/// assert_eq!(log.effective_level(), pi_log::DEBUG);
/// ```
#[track_caller]
pub fn get_logger(name: Option<&str>, level: Option<LevelSpec>) -> Result<Logger> {
    let caller = Location::caller();
    with_config(|config| {
        if name.is_none() && level.is_some() {
            config.resolve_application_root(caller);
        }
        config.stage_logger(name, level)
    })
    .map(announce_staged)
}

/// Application logger named after the calling crate when no root is set yet.
///
/// `application_logger!()` or `application_logger!(Some("debug".into()))`.
#[macro_export]
macro_rules! application_logger {
    () => {
        $crate::application_logger!(::core::option::Option::None)
    };
    ($level:expr) => {
        $crate::facade::get_application_logger_in(::core::module_path!(), $level)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caller::PACKAGE_NAME;
    use crate::level::{DEBUG, INFO, WARNING};
    use crate::registry::Registry;
    use crate::testing::capture;
    use std::sync::mpsc;
    use std::time::Duration;
    use tracing::{Event, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Looks up a logger through the facade for every event it sees.
    struct LookupOnEvent {
        seen: mpsc::Sender<String>,
    }

    impl<S: Subscriber> Layer<S> for LookupOnEvent {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if event.metadata().target() != "pi_log" {
                return;
            }
            if let Ok(logger) = get_logger(Some("facade.observer"), None) {
                let _ = self.seen.send(logger.name().to_string());
            }
        }
    }

    /// Tests here share the process-wide state.
    static SERIAL: Mutex<()> = Mutex::new(());

    fn reset() -> std::sync::MutexGuard<'static, ()> {
        let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
        with_config(|config| *config = LogConfig::default());
        guard
    }

    #[test]
    fn set_application_root_names_application_logger() {
        let _guard = reset();
        set_application_root("DebugApp");
        let log = get_application_logger(None).unwrap();
        assert_eq!(log.name(), "DebugApp");
    }

    #[test]
    fn unresolved_root_falls_back_to_package_name() {
        let _guard = reset();
        let log = get_application_logger(None).unwrap();
        assert_eq!(log.name(), PACKAGE_NAME);
        assert_eq!(log, Registry::global().get_logger(PACKAGE_NAME));
    }

    #[test]
    fn get_logger_with_level() {
        let _guard = reset();
        let log = get_logger(Some("pi_log.logs"), Some("DEBUG".into())).unwrap();
        assert_eq!(log.name(), "pi_log.logs");
        assert_eq!(log.effective_level(), DEBUG);
    }

    #[test]
    fn set_log_level_on_named_logger_emits_one_record() {
        let _guard = reset();
        let records = capture(|| {
            set_log_level("INFO", Some("facade.bar")).unwrap();
        });
        assert_eq!(Registry::global().get_logger("facade.bar").level(), INFO);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].logger, "facade.bar");
        assert_eq!(records[0].level, tracing::Level::INFO);
    }

    #[test]
    fn get_logger_without_name_targets_application_logger() {
        let _guard = reset();
        set_application_root("facade.unnamed");
        let root_before = Registry::global().root().level();
        let root = get_logger(None, Some("debug".into())).unwrap();
        assert!(root.is_root());
        assert_eq!(Registry::global().get_logger("facade.unnamed").level(), DEBUG);
        assert_eq!(Registry::global().root().level(), root_before);
    }

    #[test]
    fn macro_names_root_after_calling_crate() {
        let _guard = reset();
        let log = crate::application_logger!().unwrap();
        // Called from inside this crate, so the crate's own name applies.
        assert_eq!(log.name(), PACKAGE_NAME);

        set_application_root("facade.macro");
        let log = crate::application_logger!(Some(WARNING.into())).unwrap();
        assert_eq!(log.name(), "facade.macro");
        assert_eq!(log.level(), WARNING);
    }

    #[test]
    fn subscribers_may_call_back_into_the_facade() {
        let _guard = reset();
        let (seen_tx, seen_rx) = mpsc::channel();
        let (done_tx, done_rx) = mpsc::channel();
        std::thread::spawn(move || {
            let subscriber = tracing_subscriber::registry().with(LookupOnEvent { seen: seen_tx });
            tracing::subscriber::with_default(subscriber, || {
                let _ = set_log_level("INFO", Some("facade.reentrant"));
                let _ = get_logger(Some("facade.reentrant.child"), Some("ERROR".into()));
            });
            let _ = done_tx.send(());
        });
        assert!(
            done_rx.recv_timeout(Duration::from_secs(10)).is_ok(),
            "level announcement blocked on the facade lock"
        );
        let seen: Vec<String> = seen_rx.try_iter().collect();
        assert_eq!(seen, vec!["facade.observer", "facade.observer"]);
    }

    #[test]
    fn application_level_follows_current_root() {
        let _guard = reset();
        set_application_root("facade.app");
        set_application_level("debug").unwrap();
        assert_eq!(Registry::global().get_logger("facade.app").level(), DEBUG);
        assert!(set_application_level("chatty").is_err());
        assert_eq!(Registry::global().get_logger("facade.app").level(), DEBUG);
    }
}
