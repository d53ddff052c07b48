//! Environment-driven configuration surface
//!
//! Socket and database resolution live with the crates that own them; this
//! module adds the log settings and collects the env-var names the `info`
//! command documents.

use std::path::PathBuf;

pub use aerospace_marks_ipc::AEROSPACE_SOCK_ENV;
pub use aerospace_marks_store::DB_PATH_ENV;

/// Environment variable overriding the log file path
pub const LOGS_PATH_ENV: &str = "AEROSPACE_MARKS_LOGS_PATH";

/// Environment variable setting the log level; unset means disabled
pub const LOGS_LEVEL_ENV: &str = "AEROSPACE_MARKS_LOGS_LEVEL";

/// Default log file location
pub const DEFAULT_LOG_PATH: &str = "/tmp/aerospace-marks.log";

/// Log file settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub path: PathBuf,
    /// `None` keeps logging disabled.
    pub level: Option<String>,
}

/// Resolve the log settings.
pub fn log_settings() -> LogSettings {
    let path = match std::env::var(LOGS_PATH_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_LOG_PATH),
    };
    let level = std::env::var(LOGS_LEVEL_ENV)
        .ok()
        .filter(|level| !level.is_empty());

    LogSettings { path, level }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are global state; serialize the tests that
    // touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env<F: FnOnce()>(pairs: &[(&str, Option<&str>)], body: F) {
        let _guard = ENV_MUTEX.lock().unwrap();
        let originals: Vec<(String, Option<String>)> = pairs
            .iter()
            .map(|(name, value)| {
                let original = env::var(name).ok();
                match value {
                    Some(value) => env::set_var(name, value),
                    None => env::remove_var(name),
                }
                (name.to_string(), original)
            })
            .collect();

        body();

        for (name, original) in originals {
            match original {
                Some(value) => env::set_var(&name, value),
                None => env::remove_var(&name),
            }
        }
    }

    #[test]
    fn test_log_settings_default_disabled() {
        with_env(&[(LOGS_PATH_ENV, None), (LOGS_LEVEL_ENV, None)], || {
            let settings = log_settings();

            assert_eq!(settings.path, PathBuf::from(DEFAULT_LOG_PATH));
            assert_eq!(settings.level, None);
        });
    }

    #[test]
    fn test_log_settings_from_environment() {
        with_env(
            &[
                (LOGS_PATH_ENV, Some("/tmp/marks-test.log")),
                (LOGS_LEVEL_ENV, Some("debug")),
            ],
            || {
                let settings = log_settings();

                assert_eq!(settings.path, PathBuf::from("/tmp/marks-test.log"));
                assert_eq!(settings.level.as_deref(), Some("debug"));
            },
        );
    }

    #[test]
    fn test_empty_level_stays_disabled() {
        with_env(&[(LOGS_LEVEL_ENV, Some(""))], || {
            assert_eq!(log_settings().level, None);
        });
    }
}
