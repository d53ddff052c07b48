//! `mark` - attach an identifier to a window

use aerospace_marks_ipc::WindowManager;
use aerospace_marks_store::MarkStorage;
use miette::IntoDiagnostic;

/// Attach `identifier` to the target window.
///
/// By default the identifier becomes the only mark on the window and is
/// reclaimed from whatever window previously held it. `--add` appends to
/// the window's current marks instead; `--toggle` removes the identifier
/// wherever it is set, or adds it when absent.
pub async fn run(
    store: &mut dyn MarkStorage,
    wm: &mut dyn WindowManager,
    identifier: &str,
    add: bool,
    toggle: bool,
    window_id: Option<i64>,
) -> miette::Result<()> {
    let window_id = match window_id {
        // Resolve against the live window list so a typoed id fails here,
        // not as a stale row later
        Some(id) => wm.get_window_by_id(id).await.into_diagnostic()?.window_id,
        None => wm.get_focused_window().await.into_diagnostic()?.window_id,
    };

    if add {
        store.add_mark(window_id, identifier).into_diagnostic()?;
        println!("Added mark: {identifier}");
        return Ok(());
    }

    if toggle {
        store.toggle_mark(window_id, identifier).into_diagnostic()?;
        println!("Toggling mark: {identifier}");
        return Ok(());
    }

    let replaced = store
        .replace_all_marks(window_id, identifier)
        .into_diagnostic()?;

    if replaced {
        println!("Replaced all marks with '{identifier}'");
    } else {
        println!("Marked window with '{identifier}'");
    }

    Ok(())
}
