//! `info` - show resolved configuration

use crate::config;

pub fn run() -> miette::Result<()> {
    print!("{}", render());
    Ok(())
}

pub(crate) fn render() -> String {
    let socket = match aerospace_marks_ipc::socket_path() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let log = config::log_settings();

    format!(
        "aerospace-marks - Configuration

[Socket]
Path: {socket}

[Database]
Path: {database}

[Logging]
Path: {log_path}
Level: {log_level}

Configure with environment variables:
{sock_env} - Path to the socket file.
{db_env} - Path to the database directory.
{level_env} - Log level [debug|info|warn|error] (default: disabled)
{path_env} - Path to the log file.
",
        database = aerospace_marks_store::database_path().display(),
        log_path = log.path.display(),
        log_level = log.level.as_deref().unwrap_or("disabled"),
        sock_env = config::AEROSPACE_SOCK_ENV,
        db_env = config::DB_PATH_ENV,
        level_env = config::LOGS_LEVEL_ENV,
        path_env = config::LOGS_PATH_ENV,
    )
}
