//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "tableform";
const APPLICATION: &str = "tableform";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, which holds the logs.
///
/// - Linux: `$XDG_CACHE_HOME/tableform` or `~/.cache/tableform`
/// - macOS: `~/Library/Caches/dev.tableform.tableform`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/tableform` or `~/.config/tableform`
/// - macOS: `~/Library/Application Support/dev.tableform.tableform`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the render config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}

/// Archived logs kept next to latest.log.
const KEEP_ARCHIVED: usize = 10;

/// Archive name for a log last written at `modified`, e.g. `20261014_093000.log`.
fn archive_name(modified: SystemTime) -> String {
    DateTime::<Local>::from(modified)
        .format("%Y%m%d_%H%M%S.log")
        .to_string()
}

/// Move the previous run's latest.log aside and drop the oldest archives.
pub fn rotate_logs(cache: &Path) {
    let latest = cache.join("latest.log");
    if let Ok(modified) = fs::metadata(&latest).and_then(|m| m.modified()) {
        let _ = fs::rename(&latest, cache.join(archive_name(modified)));
    }

    let Ok(entries) = fs::read_dir(cache) else { return };
    // Archive names are timestamps, so name order is age order.
    let mut archived: Vec<PathBuf> = entries
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "log") && *p != latest)
        .collect();
    archived.sort();

    let excess = archived.len().saturating_sub(KEEP_ARCHIVED);
    for path in &archived[..excess] {
        let _ = fs::remove_file(path);
    }
}
