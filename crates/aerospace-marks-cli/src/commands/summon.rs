//! `summon` - bring a marked window to the current workspace

use std::io;

use aerospace_marks_ipc::WindowManager;
use aerospace_marks_store::MarkStorage;
use miette::IntoDiagnostic;
use tracing::debug;

use crate::output::{EventFormatter, OutputEvent, OutputFormat};

/// Move the window holding `identifier` to the focused workspace,
/// optionally focusing it afterwards.
pub async fn run(
    store: &dyn MarkStorage,
    wm: &mut dyn WindowManager,
    identifier: &str,
    focus: bool,
    format: OutputFormat,
) -> miette::Result<()> {
    let window_id = store.get_window_id_by_mark(identifier).into_diagnostic()?;

    let workspace = wm.get_focused_workspace().await.into_diagnostic()?;
    wm.move_window_to_workspace(window_id, &workspace.workspace)
        .await
        .into_diagnostic()?;

    if focus {
        wm.set_focus_by_window_id(window_id).await.into_diagnostic()?;
    }

    debug!(window_id, workspace = %workspace.workspace, "window summoned");

    let event = summon_event(window_id, &workspace.workspace, focus);
    let stdout = io::stdout();
    EventFormatter::new(stdout.lock(), format)
        .format(&event)
        .into_diagnostic()?;

    Ok(())
}

pub(crate) fn summon_event(window_id: i64, workspace: &str, focused: bool) -> OutputEvent {
    let action = if focused { "summon_and_focus" } else { "summon" };
    let message = if focused {
        format!("Window {window_id} summoned to workspace {workspace} and focused")
    } else {
        format!("Window {window_id} summoned to workspace {workspace}")
    };

    OutputEvent {
        command: "summon".to_string(),
        action: action.to_string(),
        window_id,
        workspace: workspace.to_string(),
        target_workspace: workspace.to_string(),
        result: "success".to_string(),
        message,
    }
}
