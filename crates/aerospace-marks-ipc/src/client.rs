//! Domain operations on top of the socket connection
//!
//! Each operation maps to one `send_command` call plus a second JSON decode
//! of the response's `stdout` payload. Nothing is cached between calls;
//! every query hits the live window manager.

use async_trait::async_trait;
use tracing::debug;

use crate::connector::Connection;
use crate::types::{Window, Workspace};
use crate::IpcError;

/// Minimum AeroSpace release known to speak this protocol.
pub const MIN_AEROSPACE_VERSION: &str = "0.15.2-Beta";

/// Operations the CLI needs from the window manager.
///
/// Implemented by [`AeroSpaceClient`] over the live socket and by test
/// doubles in command tests.
#[async_trait]
pub trait WindowManager: Send {
    /// List every window across all workspaces.
    async fn get_all_windows(&mut self) -> Result<Vec<Window>, IpcError>;

    /// List the windows of a single workspace.
    async fn get_all_windows_by_workspace(
        &mut self,
        workspace: &str,
    ) -> Result<Vec<Window>, IpcError>;

    /// The currently focused window.
    async fn get_focused_window(&mut self) -> Result<Window, IpcError>;

    /// Look a window up by id.
    ///
    /// AeroSpace has no server-side filter by id, so this fetches the full
    /// window list and scans it. O(n) in the window count, which is tens,
    /// not thousands.
    async fn get_window_by_id(&mut self, window_id: i64) -> Result<Window, IpcError>;

    /// Move focus to a window.
    async fn set_focus_by_window_id(&mut self, window_id: i64) -> Result<(), IpcError>;

    /// The currently focused workspace.
    async fn get_focused_workspace(&mut self) -> Result<Workspace, IpcError>;

    /// Move a window to a workspace.
    async fn move_window_to_workspace(
        &mut self,
        window_id: i64,
        workspace: &str,
    ) -> Result<(), IpcError>;

    /// Compare the server version against [`MIN_AEROSPACE_VERSION`].
    ///
    /// Informational only: callers log the mismatch and carry on, nothing
    /// else changes behavior based on it.
    async fn check_server_version(&mut self) -> Result<(), IpcError>;
}

/// The socket-backed [`WindowManager`] implementation.
#[derive(Debug)]
pub struct AeroSpaceClient {
    conn: Connection,
}

impl AeroSpaceClient {
    /// Connect to the AeroSpace socket at the resolved path.
    pub async fn connect() -> Result<Self, IpcError> {
        Ok(Self {
            conn: Connection::connect().await?,
        })
    }

    /// Wrap an already-established connection.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// The underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the underlying connection.
    pub async fn close(self) -> Result<(), IpcError> {
        self.conn.close().await
    }

    async fn windows_query(&mut self, args: &[&str]) -> Result<Vec<Window>, IpcError> {
        let response = self.conn.send_command("list-windows", args).await?;
        serde_json::from_str(&response.stdout).map_err(IpcError::DecodeFailed)
    }
}

#[async_trait]
impl WindowManager for AeroSpaceClient {
    async fn get_all_windows(&mut self) -> Result<Vec<Window>, IpcError> {
        self.windows_query(&["--all", "--json"]).await
    }

    async fn get_all_windows_by_workspace(
        &mut self,
        workspace: &str,
    ) -> Result<Vec<Window>, IpcError> {
        self.windows_query(&["--workspace", workspace, "--json"])
            .await
    }

    async fn get_focused_window(&mut self) -> Result<Window, IpcError> {
        let windows = self.windows_query(&["--focused", "--json"]).await?;

        windows.into_iter().next().ok_or(IpcError::NoFocusedWindow)
    }

    async fn get_window_by_id(&mut self, window_id: i64) -> Result<Window, IpcError> {
        let windows = self.get_all_windows().await?;

        windows
            .into_iter()
            .find(|window| window.window_id == window_id)
            .ok_or(IpcError::WindowNotFound { window_id })
    }

    async fn set_focus_by_window_id(&mut self, window_id: i64) -> Result<(), IpcError> {
        let id_arg = window_id.to_string();
        self.conn
            .send_command("focus", &["--window-id", &id_arg])
            .await?;

        debug!(window_id, "focus moved");
        Ok(())
    }

    async fn get_focused_workspace(&mut self) -> Result<Workspace, IpcError> {
        let response = self
            .conn
            .send_command("list-workspaces", &["--focused", "--json"])
            .await?;
        let workspaces: Vec<Workspace> =
            serde_json::from_str(&response.stdout).map_err(IpcError::DecodeFailed)?;

        workspaces
            .into_iter()
            .next()
            .ok_or(IpcError::NoFocusedWorkspace)
    }

    async fn move_window_to_workspace(
        &mut self,
        window_id: i64,
        workspace: &str,
    ) -> Result<(), IpcError> {
        let id_arg = window_id.to_string();
        self.conn
            .send_command(
                "move-node-to-workspace",
                &[workspace, "--window-id", &id_arg],
            )
            .await?;

        debug!(window_id, workspace, "window moved");
        Ok(())
    }

    async fn check_server_version(&mut self) -> Result<(), IpcError> {
        // No response observed yet: probe with a harmless query
        if self.conn.server_version().is_none() {
            self.conn
                .send_command("list-workspaces", &["--focused", "--json"])
                .await?;
        }

        let Some(server) = self.conn.server_version() else {
            return Ok(());
        };

        if version_triple(server) < version_triple(MIN_AEROSPACE_VERSION) {
            return Err(IpcError::IncompatibleVersion {
                server: server.to_string(),
                minimum: MIN_AEROSPACE_VERSION.to_string(),
            });
        }

        Ok(())
    }
}

/// Numeric `(major, minor, patch)` prefix of a version string.
///
/// Pre-release suffixes like `-Beta` carry no ordering weight in AeroSpace
/// releases and are ignored; missing or non-numeric components count as 0.
fn version_triple(version: &str) -> (u64, u64, u64) {
    let core = version.split(['-', '+']).next().unwrap_or(version);
    let mut parts = core
        .split('.')
        .map(|part| part.trim().parse::<u64>().unwrap_or(0));

    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}
