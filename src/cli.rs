//! CLI argument processing and conversion utilities.
//!
//! Keeps the decision logic that turns flags into level settings out of `main()`.

use pi_log::{DEBUG, INFO, LevelSpec, NOTSET, WARNING};

/// Root level chosen from `-q` / `-v` occurrences.
///
/// Precedence:
/// 1. `quiet` forces WARNING+.
/// 2. `-vv` => NOTSET (everything).
/// 3. `-v`  => DEBUG.
/// 4. Else INFO.
pub fn verbosity_to_root_level(quiet: bool, verbose: u8) -> i32 {
    if quiet {
        WARNING
    } else if verbose > 1 {
        NOTSET
    } else if verbose == 1 {
        DEBUG
    } else {
        INFO
    }
}

/// Accept either a level name or a bare integer severity.
pub fn parse_level_arg(raw: &str) -> LevelSpec {
    match raw.trim().parse::<i32>() {
        Ok(severity) => LevelSpec::Severity(severity),
        Err(_) => LevelSpec::Name(raw.to_string()),
    }
}
