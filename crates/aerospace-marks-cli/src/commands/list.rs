//! `list` - show every marked window

use std::io;

use aerospace_marks_ipc::{Window, WindowManager};
use aerospace_marks_store::{Mark, MarkStorage};
use miette::IntoDiagnostic;

use crate::output::{ListFormatter, MarkedWindow, OutputFormat};

/// Render all marks joined with their live windows.
///
/// Marks whose windows are gone are skipped; they stay in the store until
/// an explicit unmark.
pub async fn run(
    store: &dyn MarkStorage,
    wm: &mut dyn WindowManager,
    format: OutputFormat,
) -> miette::Result<()> {
    let marks = store.get_marks().into_diagnostic()?;

    let stdout = io::stdout();
    let mut formatter = ListFormatter::new(stdout.lock(), format);

    if marks.is_empty() {
        formatter.format_empty("No marks found").into_diagnostic()?;
        return Ok(());
    }

    let windows = wm.get_all_windows().await.into_diagnostic()?;
    let rows = collect_marked_windows(&marks, &windows);

    if rows.is_empty() {
        formatter
            .format_empty("No marked window found")
            .into_diagnostic()?;
        return Ok(());
    }

    formatter.format(&rows).into_diagnostic()?;
    Ok(())
}

pub(crate) fn collect_marked_windows(marks: &[Mark], windows: &[Window]) -> Vec<MarkedWindow> {
    marks
        .iter()
        .filter_map(|mark| {
            windows
                .iter()
                .find(|window| window.window_id == mark.window_id)
                .map(|window| MarkedWindow {
                    mark: mark.mark.clone(),
                    window_id: window.window_id,
                    app_name: window.app_name.clone(),
                    window_title: window.window_title.clone(),
                    workspace: window.workspace.clone(),
                    app_bundle_id: window.app_bundle_id.clone(),
                })
        })
        .collect()
}
