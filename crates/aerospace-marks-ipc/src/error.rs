//! Error types for AeroSpace IPC operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when communicating with the AeroSpace window manager
#[derive(Debug, Error)]
pub enum IpcError {
    /// The socket path does not exist on disk
    #[error("AeroSpace socket not found at {path} - is AeroSpace running?")]
    SocketNotFound { path: PathBuf },

    /// The socket exists but dialing it failed
    #[error("failed to connect to AeroSpace socket at {path}: {source}")]
    ConnectionFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the command to the socket
    #[error("failed to send command to AeroSpace: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Failed to read the response from the socket
    #[error("failed to receive response from AeroSpace: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// Failed to serialize the command to JSON
    #[error("failed to encode command: {0}")]
    EncodeFailed(#[source] serde_json::Error),

    /// Failed to deserialize the response from JSON
    #[error("failed to decode response: {0}")]
    DecodeFailed(#[source] serde_json::Error),

    /// The socket closed before a complete response arrived
    #[error("connection to AeroSpace closed unexpectedly")]
    ConnectionClosed,

    /// AeroSpace reported a failure (non-zero exit code or stderr output)
    #[error("command failed with exit code {exit_code}: {stderr}")]
    CommandFailed { exit_code: i32, stderr: String },

    /// A focused-window query returned an empty list
    #[error("no focused window found")]
    NoFocusedWindow,

    /// A focused-workspace query returned an empty list
    #[error("no focused workspace found")]
    NoFocusedWorkspace,

    /// The window id is not in the current window list
    #[error("window with ID {window_id} not found")]
    WindowNotFound { window_id: i64 },

    /// The server is older than the minimum supported release
    #[error("AeroSpace {server} is older than the minimum supported version {minimum}")]
    IncompatibleVersion { server: String, minimum: String },
}
