//! Typed views of the AeroSpace JSON payloads
//!
//! These are the shapes AeroSpace emits when asked for `--json` output.
//! Fields beyond the id are optional in some listing modes, so everything
//! but `window-id` falls back to an empty string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A window as reported by `list-windows`.
///
/// Example payload:
///
/// ```json
/// {
///   "window-id": 7984,
///   "window-title": "WhatsApp",
///   "app-name": "WhatsApp"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Window {
    pub window_id: i64,
    #[serde(default)]
    pub app_name: String,
    #[serde(default)]
    pub window_title: String,
    #[serde(default)]
    pub workspace: String,
    #[serde(default)]
    pub app_bundle_id: String,
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}",
            self.window_id, self.app_name, self.window_title
        )
    }
}

/// A workspace as reported by `list-workspaces`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    pub workspace: String,
}
