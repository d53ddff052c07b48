//! Socket connection to the AeroSpace window manager
//!
//! This module resolves the socket path and exchanges one Command/Response
//! pair per call. Connection failures are fail-fast: no retry, no backoff,
//! no timeout beyond the OS defaults.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::debug;

use crate::protocol::{Command, Response};
use crate::IpcError;

/// Environment variable overriding the AeroSpace socket path
pub const AEROSPACE_SOCK_ENV: &str = "AEROSPACESOCK";

/// Read size for draining the response off the socket
const READ_CHUNK_SIZE: usize = 4096;

/// Resolve the AeroSpace socket path.
///
/// Honors the `AEROSPACESOCK` environment variable, else falls back to the
/// per-user default `/tmp/bobko.aerospace-$USER.sock` (the path the AeroSpace
/// CLI itself uses). The path must already exist as a filesystem node.
///
/// # Errors
///
/// Returns `IpcError::SocketNotFound` if the resolved path does not exist.
pub fn socket_path() -> Result<PathBuf, IpcError> {
    let path = match std::env::var(AEROSPACE_SOCK_ENV) {
        Ok(path) if !path.is_empty() => PathBuf::from(path),
        _ => {
            let user = std::env::var("USER").unwrap_or_default();
            PathBuf::from(format!("/tmp/bobko.aerospace-{user}.sock"))
        }
    };

    if !path.exists() {
        return Err(IpcError::SocketNotFound { path });
    }

    Ok(path)
}

/// A connection to the AeroSpace socket.
///
/// Each `send_command` call issues exactly one request and blocks until the
/// full response has been read and decoded. The server version observed on
/// the most recent response is retained for compatibility checks.
#[derive(Debug)]
pub struct Connection {
    socket: UnixStream,
    socket_path: PathBuf,
    server_version: Option<String>,
}

impl Connection {
    /// Dial the AeroSpace socket at the resolved path.
    ///
    /// # Errors
    ///
    /// Returns `IpcError::SocketNotFound` if the path does not exist and
    /// `IpcError::ConnectionFailed` if dialing it fails.
    pub async fn connect() -> Result<Self, IpcError> {
        let socket_path = socket_path()?;

        let socket = UnixStream::connect(&socket_path).await.map_err(|e| {
            IpcError::ConnectionFailed {
                path: socket_path.clone(),
                source: e,
            }
        })?;

        Ok(Self {
            socket,
            socket_path,
            server_version: None,
        })
    }

    /// Path this connection was dialed on.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }

    /// Server version observed on the most recent response, if any.
    pub fn server_version(&self) -> Option<&str> {
        self.server_version.as_deref()
    }

    /// Send one command and read its response.
    ///
    /// The command name goes into the first wire argument; the `command`
    /// field itself is always empty. The response is a single JSON object
    /// with no framing, so the read loop appends chunks to a growing buffer
    /// and re-attempts a full parse after each one until a complete object
    /// arrives.
    ///
    /// # Errors
    ///
    /// Transport and codec failures map to their `IpcError` variants.
    /// A response with a non-zero exit code or any stderr output fails the
    /// whole call with `IpcError::CommandFailed`.
    pub async fn send_command(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<Response, IpcError> {
        let request = Command::new(command, args);
        let encoded = request.encode()?;

        self.socket
            .write_all(&encoded)
            .await
            .map_err(IpcError::SendFailed)?;
        self.socket.flush().await.map_err(IpcError::SendFailed)?;

        let mut buf: Vec<u8> = Vec::with_capacity(READ_CHUNK_SIZE);
        let response = loop {
            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let n = self
                .socket
                .read(&mut chunk)
                .await
                .map_err(IpcError::ReceiveFailed)?;

            if n == 0 {
                if buf.is_empty() {
                    return Err(IpcError::ConnectionClosed);
                }
                // EOF: whatever arrived must be the whole response
                break Response::decode(&buf)?;
            }

            buf.extend_from_slice(&chunk[..n]);
            if let Some(response) = Response::decode_partial(&buf)? {
                break response;
            }
        };

        debug!(
            command,
            exit_code = response.exit_code,
            server_version = %response.server_version,
            "aerospace replied"
        );
        self.server_version = Some(response.server_version.clone());

        response.checked()
    }

    /// Close the connection.
    ///
    /// Dropping the connection closes the socket as well; this exists so the
    /// owner can surface shutdown errors instead of ignoring them.
    pub async fn close(mut self) -> Result<(), IpcError> {
        self.socket.shutdown().await.map_err(IpcError::SendFailed)
    }
}
