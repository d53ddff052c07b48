//! `focus` - move focus to a marked window

use aerospace_marks_ipc::WindowManager;
use aerospace_marks_store::MarkStorage;
use miette::IntoDiagnostic;

/// Move focus to the window holding `identifier`.
pub async fn run(
    store: &dyn MarkStorage,
    wm: &mut dyn WindowManager,
    identifier: &str,
) -> miette::Result<()> {
    let window_id = store.get_window_id_by_mark(identifier).into_diagnostic()?;

    wm.set_focus_by_window_id(window_id).await.into_diagnostic()?;
    println!("Focus moved to window ID {window_id}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::support::{window, FakeWm};
    use aerospace_marks_store::SqliteMarkStore;

    #[tokio::test]
    async fn test_focuses_the_marked_window() {
        let mut store = SqliteMarkStore::open_in_memory().expect("store should open");
        store.add_mark(42, "chat").expect("seed failed");
        let mut wm = FakeWm::with_windows(vec![window(42, "WhatsApp", "WhatsApp", "9")]);

        run(&store, &mut wm, "chat").await.expect("focus failed");

        assert_eq!(wm.focus_calls, vec![42]);
    }

    #[tokio::test]
    async fn test_unknown_mark_never_touches_the_window_manager() {
        let store = SqliteMarkStore::open_in_memory().expect("store should open");
        let mut wm = FakeWm::default();

        let result = run(&store, &mut wm, "nonexistent").await;

        assert!(result.is_err());
        assert!(wm.focus_calls.is_empty());
    }
}
