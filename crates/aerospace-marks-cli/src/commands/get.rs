//! `get` - resolve a mark to a window

use aerospace_marks_ipc::WindowManager;
use aerospace_marks_store::MarkStorage;
use miette::IntoDiagnostic;

/// Print the window a mark resolves to.
///
/// `-i` prints the bare id without touching the window manager, so it keeps
/// working for scripting even when the marked window is gone. The other
/// selectors fetch live metadata.
pub async fn run(
    store: &dyn MarkStorage,
    wm: &mut dyn WindowManager,
    identifier: &str,
    id_only: bool,
    title_only: bool,
    app_only: bool,
) -> miette::Result<()> {
    let text = resolve(store, wm, identifier, id_only, title_only, app_only).await?;
    print!("{text}");

    Ok(())
}

pub(crate) async fn resolve(
    store: &dyn MarkStorage,
    wm: &mut dyn WindowManager,
    identifier: &str,
    id_only: bool,
    title_only: bool,
    app_only: bool,
) -> miette::Result<String> {
    let window_id = store.get_window_id_by_mark(identifier).into_diagnostic()?;

    if id_only {
        return Ok(window_id.to_string());
    }

    let window = wm.get_window_by_id(window_id).await.into_diagnostic()?;

    if title_only {
        return Ok(window.window_title);
    }
    if app_only {
        return Ok(window.app_name);
    }

    Ok(window.to_string())
}
