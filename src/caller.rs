//! Derive a default application name from where the facade is called.
//!
//! Two routes exist. [`application_logger!`](crate::application_logger) reads the
//! caller's crate from `module_path!()` at compile time. The plain functions use
//! the caller's source location (via `#[track_caller]`) in place of a stack walk:
//! the directory holding the caller's source file names the application, with
//! Cargo layout directories skipped so that `crates/billing/src/lib.rs` resolves
//! to `billing`. A file sitting directly in a layout directory (`tests/smoke.rs`)
//! is named after that directory. Locations inside this crate are passed over;
//! when nothing else is left, [`PACKAGE_NAME`] is used.

use std::panic::Location;
use std::path::{Component, Path};

/// Name this crate answers to when no other application name can be resolved.
pub const PACKAGE_NAME: &str = env!("CARGO_CRATE_NAME");

/// Directories that say where code sits inside a package, not which package it is.
const LAYOUT_DIRS: [&str; 5] = ["src", "bin", "tests", "examples", "benches"];

/// Application name for the code that called into the facade.
#[track_caller]
pub fn resolve_caller_application_name() -> String {
    application_name_at(Location::caller())
}

/// Application name for code at `location`.
pub fn application_name_at(location: &Location<'_>) -> String {
    application_name_from_paths([location.file()])
}

/// Crate name from a `module_path!()` expansion (`billing::api` -> `billing`).
pub fn application_name_from_module(module_path: &str) -> String {
    match module_path.split("::").next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => PACKAGE_NAME.to_string(),
    }
}

/// First directory name, innermost path first, that is not this crate's own.
pub fn application_name_from_paths<I, P>(paths: I) -> String
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths
        .into_iter()
        .filter(|path| !is_own_source(path.as_ref()))
        .filter_map(|path| containing_dir_name(path.as_ref()))
        .find(|name| name != PACKAGE_NAME)
        .unwrap_or_else(|| PACKAGE_NAME.to_string())
}

/// Every module of this crate sits next to this file.
fn is_own_source(path: &Path) -> bool {
    path.parent().is_some_and(|dir| Path::new(file!()).parent() == Some(dir))
}

fn containing_dir_name(path: &Path) -> Option<String> {
    let dirs: Vec<&str> = path
        .parent()?
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    dirs.iter()
        .rev()
        .find(|part| !LAYOUT_DIRS.contains(part))
        .or(dirs.last())
        .map(|part| part.to_string())
}
