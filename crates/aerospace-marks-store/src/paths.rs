//! Database path resolution
//!
//! The database lives in a directory resolved from the environment with a
//! per-user default under the local state directory.

use std::path::PathBuf;

/// Environment variable overriding the database directory
pub const DB_PATH_ENV: &str = "AEROSPACE_MARKS_DB_PATH";

/// File name of the database inside the resolved directory
pub const DB_FILE_NAME: &str = "marks.db";

/// Resolve the database directory.
///
/// Honors `AEROSPACE_MARKS_DB_PATH` (tilde-expanded), else falls back to
/// `$HOME/.local/state/aerospace-marks`.
pub fn database_dir() -> PathBuf {
    match std::env::var(DB_PATH_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(shellexpand::tilde(&dir).into_owned()),
        _ => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".local/state/aerospace-marks")
        }
    }
}

/// Full path of the database file.
pub fn database_path() -> PathBuf {
    database_dir().join(DB_FILE_NAME)
}
