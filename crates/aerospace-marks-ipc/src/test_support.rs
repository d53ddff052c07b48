//! Shared fixtures for this crate's tests: an environment-variable guard
//! and a minimal in-process AeroSpace server.

use std::env;
use std::sync::Mutex;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixListener;

use crate::connector::AEROSPACE_SOCK_ENV;
use crate::protocol::Command;

// Tests mutate the AEROSPACESOCK environment variable, which is global
// state, so they must not run in parallel.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Sets or clears `AEROSPACESOCK` for the duration of a test and restores
/// the original value on drop.
pub struct EnvGuard {
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(value: &str) -> Self {
        let original = env::var(AEROSPACE_SOCK_ENV).ok();
        env::set_var(AEROSPACE_SOCK_ENV, value);
        Self { original }
    }

    pub fn unset() -> Self {
        let original = env::var(AEROSPACE_SOCK_ENV).ok();
        env::remove_var(AEROSPACE_SOCK_ENV);
        Self { original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(value) => env::set_var(AEROSPACE_SOCK_ENV, value),
            None => env::remove_var(AEROSPACE_SOCK_ENV),
        }
    }
}

/// Serve a single connection: read one command at a time, answer it with
/// `respond(&command)`, and stop when the client hangs up.
pub fn spawn_server<F>(listener: UnixListener, respond: F)
where
    F: Fn(&Command) -> String + Send + 'static,
{
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");

        loop {
            let mut buf = vec![0u8; 16384];
            let n = match socket.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };
            let command: Command =
                serde_json::from_slice(&buf[..n]).expect("client sent invalid command JSON");

            let response = respond(&command);
            if socket.write_all(response.as_bytes()).await.is_err() {
                break;
            }
        }
    });
}
