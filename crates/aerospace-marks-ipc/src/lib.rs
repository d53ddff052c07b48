//! AeroSpace IPC client
//!
//! This crate talks to the AeroSpace window manager over its Unix domain
//! socket. It enables aerospace-marks to:
//! - Query windows and workspaces
//! - Focus a window by id
//! - Move a window to a workspace
//!
//! ## Architecture
//!
//! - `Connection`: one socket connection exchanging Command/Response pairs
//! - `AeroSpaceClient`: domain operations on top of the connection
//! - `WindowManager`: the trait the CLI programs against, implemented by
//!   `AeroSpaceClient` and by test doubles
//! - `IpcError`: error types for IPC operations
//!
//! ## Protocol
//!
//! AeroSpace exposes a Unix socket, by default at
//! `/tmp/bobko.aerospace-$USER.sock`. Clients write a single JSON object per
//! request and read a single JSON object back; list-style payloads arrive as
//! nested JSON inside the response's `stdout` field.

mod client;
mod connector;
mod error;
mod protocol;
#[cfg(test)]
mod test_support;
mod types;

pub use client::{AeroSpaceClient, WindowManager, MIN_AEROSPACE_VERSION};
pub use connector::{socket_path, Connection, AEROSPACE_SOCK_ENV};
pub use error::IpcError;
pub use protocol::{Command, Response};
pub use types::{Window, Workspace};
