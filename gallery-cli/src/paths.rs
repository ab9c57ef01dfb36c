//! Where the browser keeps its log files.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "gallery";
const APPLICATION: &str = "gallery";

/// Log file written by the running session.
const LATEST_LOG: &str = "latest.log";

/// Archived session logs retained next to [`LATEST_LOG`].
const MAX_OLD_LOGS: usize = 10;

/// Per-user cache directory for the browser.
///
/// - Linux: `$XDG_CACHE_HOME/gallery` or `~/.cache/gallery`
/// - macOS: `~/Library/Caches/org.gallery.gallery`
/// - Windows: `C:\Users\<User>\AppData\Local\gallery\gallery\cache`
///
/// `None` when no home directory can be found.
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Log file for this session.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archives the previous session's log and prunes old archives.
///
/// Must run before [`log_file`] is opened for writing.
pub fn rotate_logs() {
    if let Some(cache) = cache_dir() {
        rotate_logs_in(&cache, MAX_OLD_LOGS);
    }
}

fn rotate_logs_in(dir: &Path, keep: usize) {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        if let Err(e) = fs::rename(&latest, dir.join(format!("session-{}.log", stamp))) {
            eprintln!("Could not archive {}: {}", latest.display(), e);
        }
    }
    prune_archives(dir, keep);
}

fn is_archive(name: &str) -> bool {
    name != LATEST_LOG && name.ends_with(".log")
}

/// Deletes all but the `keep` most recently modified archives in `dir`.
fn prune_archives(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archives: Vec<(Option<std::time::SystemTime>, PathBuf)> = entries
        .filter_map(Result::ok)
        .filter(|entry| is_archive(&entry.file_name().to_string_lossy()))
        .map(|entry| (entry.metadata().and_then(|m| m.modified()).ok(), entry.path()))
        .collect();

    if archives.len() <= keep {
        return;
    }

    // newest first; everything past `keep` goes
    archives.sort_by(|a, b| b.0.cmp(&a.0));
    for (_, path) in archives.drain(keep..) {
        let _ = fs::remove_file(path);
    }
}
