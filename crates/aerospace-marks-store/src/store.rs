//! The SQLite-backed mark store

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::paths::{database_dir, DB_FILE_NAME};
use crate::StoreError;

/// A stored mark row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub window_id: i64,
    pub mark: String,
}

/// Mark store operations.
///
/// Implemented by [`SqliteMarkStore`] and by test doubles in command tests.
/// The compound operations (`replace_all_marks`, `toggle_mark`) are keyed so
/// that a mark text identifies at most one window at any point in any call
/// sequence.
pub trait MarkStorage {
    /// Attach a mark to a window.
    fn add_mark(&mut self, window_id: i64, mark: &str) -> Result<(), StoreError>;

    /// Every stored mark, in no guaranteed order.
    fn get_marks(&self) -> Result<Vec<Mark>, StoreError>;

    /// Every mark attached to a window.
    fn get_marks_by_window_id(&self, window_id: i64) -> Result<Vec<Mark>, StoreError>;

    /// The row holding a mark.
    fn get_window_by_mark(&self, mark: &str) -> Result<Mark, StoreError>;

    /// The window id holding a mark.
    fn get_window_id_by_mark(&self, mark: &str) -> Result<i64, StoreError>;

    /// Make `mark` the only mark on `window_id`, reclaiming the text from
    /// whatever window previously held it. Returns whether any prior row
    /// was deleted ("replaced" vs "newly marked").
    fn replace_all_marks(&mut self, window_id: i64, mark: &str) -> Result<bool, StoreError>;

    /// Remove the mark if it exists anywhere, otherwise attach it to
    /// `window_id`. Returns whether the mark is present afterwards.
    fn toggle_mark(&mut self, window_id: i64, mark: &str) -> Result<bool, StoreError>;

    /// Delete a single mark. Zero rows affected is not an error.
    fn delete_by_mark(&mut self, mark: &str) -> Result<usize, StoreError>;

    /// Delete every mark on a window.
    fn delete_by_window(&mut self, window_id: i64) -> Result<usize, StoreError>;

    /// Delete every mark.
    fn delete_all_marks(&mut self) -> Result<usize, StoreError>;
}

/// The SQLite-backed [`MarkStorage`] implementation.
///
/// Holds one connection for its lifetime; the owner closes it explicitly to
/// surface shutdown errors. Two concurrent CLI invocations racing on the
/// same database file are an accepted limitation of the local, single-user
/// use case.
#[derive(Debug)]
pub struct SqliteMarkStore {
    conn: Connection,
}

impl SqliteMarkStore {
    /// Open the database under the resolved per-user directory.
    pub fn open_default() -> Result<Self, StoreError> {
        Self::open(database_dir())
    }

    /// Open (creating if needed) the database inside `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let db_path = dir.join(DB_FILE_NAME);
        let conn = Connection::open(&db_path)?;
        debug!(path = %db_path.display(), "mark database opened");

        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// An in-memory store for tests.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;

            CREATE TABLE IF NOT EXISTS marks (
              window_id INTEGER NOT NULL,
              mark      TEXT NOT NULL PRIMARY KEY
            );
            "#,
        )?;
        Ok(())
    }

    /// Release the underlying connection.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, err)| StoreError::Sql(err))
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

fn row_to_mark(row: &rusqlite::Row<'_>) -> Result<Mark, rusqlite::Error> {
    Ok(Mark {
        window_id: row.get(0)?,
        mark: row.get(1)?,
    })
}

impl MarkStorage for SqliteMarkStore {
    fn add_mark(&mut self, window_id: i64, mark: &str) -> Result<(), StoreError> {
        let inserted = self.conn.execute(
            "INSERT INTO marks (window_id, mark) VALUES (?1, ?2)",
            params![window_id, mark],
        );

        match inserted {
            Ok(_) => {
                debug!(window_id, mark, "mark added");
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => Err(StoreError::MarkTaken {
                mark: mark.to_string(),
            }),
            Err(err) => Err(err.into()),
        }
    }

    fn get_marks(&self) -> Result<Vec<Mark>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT window_id, mark FROM marks")?;
        let rows = stmt.query_map([], row_to_mark)?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn get_marks_by_window_id(&self, window_id: i64) -> Result<Vec<Mark>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT window_id, mark FROM marks WHERE window_id = ?1")?;
        let rows = stmt.query_map(params![window_id], row_to_mark)?;

        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    fn get_window_by_mark(&self, mark: &str) -> Result<Mark, StoreError> {
        self.conn
            .query_row(
                "SELECT window_id, mark FROM marks WHERE mark = ?1",
                params![mark],
                row_to_mark,
            )
            .optional()?
            .ok_or_else(|| StoreError::MarkNotFound {
                mark: mark.to_string(),
            })
    }

    fn get_window_id_by_mark(&self, mark: &str) -> Result<i64, StoreError> {
        self.get_window_by_mark(mark).map(|row| row.window_id)
    }

    fn replace_all_marks(&mut self, window_id: i64, mark: &str) -> Result<bool, StoreError> {
        // One transaction, so a failed insert can never leave the store
        // with the old rows gone and the new mark missing.
        let tx = self.conn.transaction()?;

        let deleted = tx.execute(
            "DELETE FROM marks WHERE window_id = ?1 OR mark = ?2",
            params![window_id, mark],
        )?;
        tx.execute(
            "INSERT INTO marks (window_id, mark) VALUES (?1, ?2)",
            params![window_id, mark],
        )?;

        tx.commit()?;
        debug!(window_id, mark, deleted, "marks replaced");

        Ok(deleted > 0)
    }

    fn toggle_mark(&mut self, window_id: i64, mark: &str) -> Result<bool, StoreError> {
        // Keyed by mark text, not by (window, mark): "if this mark exists
        // anywhere, remove it; otherwise attach it here".
        let tx = self.conn.transaction()?;

        let deleted = tx.execute("DELETE FROM marks WHERE mark = ?1", params![mark])?;
        let present = if deleted == 0 {
            tx.execute(
                "INSERT INTO marks (window_id, mark) VALUES (?1, ?2)",
                params![window_id, mark],
            )?;
            true
        } else {
            false
        };

        tx.commit()?;
        debug!(window_id, mark, present, "mark toggled");

        Ok(present)
    }

    fn delete_by_mark(&mut self, mark: &str) -> Result<usize, StoreError> {
        Ok(self
            .conn
            .execute("DELETE FROM marks WHERE mark = ?1", params![mark])?)
    }

    fn delete_by_window(&mut self, window_id: i64) -> Result<usize, StoreError> {
        Ok(self.conn.execute(
            "DELETE FROM marks WHERE window_id = ?1",
            params![window_id],
        )?)
    }

    fn delete_all_marks(&mut self) -> Result<usize, StoreError> {
        Ok(self.conn.execute("DELETE FROM marks", [])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteMarkStore {
        SqliteMarkStore::open_in_memory().expect("in-memory store should open")
    }

    #[test]
    fn test_add_and_get_by_mark() {
        let mut store = store();

        store.add_mark(1, "mark1").expect("add failed");

        let row = store.get_window_by_mark("mark1").expect("get failed");
        assert_eq!(row, Mark { window_id: 1, mark: "mark1".to_string() });
        assert_eq!(store.get_window_id_by_mark("mark1").unwrap(), 1);
    }

    #[test]
    fn test_window_can_hold_several_marks() {
        let mut store = store();

        store.add_mark(1, "a").expect("add failed");
        store.add_mark(1, "b").expect("add failed");

        let marks = store.get_marks_by_window_id(1).expect("get failed");
        assert_eq!(marks.len(), 2);
    }

    #[test]
    fn test_duplicate_mark_is_rejected() {
        let mut store = store();
        store.add_mark(1, "taken").expect("add failed");

        let err = store.add_mark(2, "taken").unwrap_err();

        match &err {
            StoreError::MarkTaken { mark } => assert_eq!(mark, "taken"),
            other => panic!("expected MarkTaken, got: {other:?}"),
        }
        // The original owner is untouched
        assert_eq!(store.get_window_id_by_mark("taken").unwrap(), 1);
    }

    #[test]
    fn test_get_window_by_mark_not_found() {
        let store = store();

        let err = store.get_window_by_mark("nonexistent").unwrap_err();

        assert!(
            matches!(err, StoreError::MarkNotFound { .. }),
            "expected MarkNotFound, got: {err:?}"
        );
    }

    #[test]
    fn test_replace_on_empty_store_reports_fresh_mark() {
        let mut store = store();

        let replaced = store.replace_all_marks(5, "first").expect("replace failed");

        assert!(!replaced, "nothing existed to replace");
        assert_eq!(store.get_window_id_by_mark("first").unwrap(), 5);
    }

    #[test]
    fn test_replace_reclaims_mark_from_prior_owner() {
        let mut store = store();
        store.add_mark(1, "a").expect("add failed");

        let replaced = store.replace_all_marks(2, "a").expect("replace failed");

        assert!(replaced);
        assert_eq!(store.get_window_id_by_mark("a").unwrap(), 2);
        assert!(
            store.get_marks_by_window_id(1).unwrap().is_empty(),
            "prior owner must no longer hold the mark"
        );
    }

    #[test]
    fn test_replace_clears_other_marks_on_target_window() {
        let mut store = store();
        store.add_mark(3, "old1").expect("add failed");
        store.add_mark(3, "old2").expect("add failed");

        let replaced = store.replace_all_marks(3, "new").expect("replace failed");

        assert!(replaced);
        let marks = store.get_marks_by_window_id(3).expect("get failed");
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].mark, "new");
    }

    #[test]
    fn test_toggle_pairing_restores_prior_state() {
        let mut store = store();

        let present = store.toggle_mark(7, "x").expect("toggle failed");
        assert!(present, "first toggle should add the mark");
        assert_eq!(store.get_window_id_by_mark("x").unwrap(), 7);

        let present = store.toggle_mark(7, "x").expect("toggle failed");
        assert!(!present, "second toggle should remove the mark");
        assert!(matches!(
            store.get_window_by_mark("x"),
            Err(StoreError::MarkNotFound { .. })
        ));
    }

    #[test]
    fn test_toggle_is_keyed_by_mark_text() {
        let mut store = store();
        store.add_mark(2, "foobar").expect("add failed");

        // Toggling from a different window still removes the mark
        let present = store.toggle_mark(9, "foobar").expect("toggle failed");

        assert!(!present);
        assert!(matches!(
            store.get_window_by_mark("foobar"),
            Err(StoreError::MarkNotFound { .. })
        ));

        // And toggling again attaches it to the new window
        let present = store.toggle_mark(2, "foobar").expect("toggle failed");
        assert!(present);
        assert_eq!(store.get_window_id_by_mark("foobar").unwrap(), 2);
    }

    #[test]
    fn test_mark_uniqueness_across_operation_sequences() {
        let mut store = store();

        store.add_mark(1, "m").expect("add failed");
        store.replace_all_marks(2, "m").expect("replace failed");
        store.toggle_mark(3, "m").expect("toggle failed"); // removes
        store.toggle_mark(3, "m").expect("toggle failed"); // re-adds to 3

        let owners: Vec<i64> = store
            .get_marks()
            .expect("get failed")
            .into_iter()
            .filter(|row| row.mark == "m")
            .map(|row| row.window_id)
            .collect();

        assert_eq!(owners, vec![3], "a mark text maps to exactly one window");
    }

    #[test]
    fn test_delete_by_mark_reports_rows_affected() {
        let mut store = store();
        store.add_mark(1, "a").expect("add failed");

        assert_eq!(store.delete_by_mark("a").unwrap(), 1);
        assert_eq!(store.delete_by_mark("a").unwrap(), 0, "zero rows is not an error");
    }

    #[test]
    fn test_delete_by_window() {
        let mut store = store();
        store.add_mark(1, "a").expect("add failed");
        store.add_mark(1, "b").expect("add failed");
        store.add_mark(2, "c").expect("add failed");

        assert_eq!(store.delete_by_window(1).unwrap(), 2);
        assert_eq!(store.get_marks().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_all_marks() {
        let mut store = store();
        store.add_mark(1, "a").expect("add failed");
        store.add_mark(2, "b").expect("add failed");

        assert_eq!(store.delete_all_marks().unwrap(), 2);
        assert!(store.get_marks().unwrap().is_empty());
    }

    #[test]
    fn test_open_creates_directory_and_persists() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let db_dir = dir.path().join("state/aerospace-marks");

        {
            let mut store = SqliteMarkStore::open(&db_dir).expect("open failed");
            store.add_mark(1, "kept").expect("add failed");
            store.close().expect("close failed");
        }

        let store = SqliteMarkStore::open(&db_dir).expect("reopen failed");
        assert_eq!(store.get_window_id_by_mark("kept").unwrap(), 1);
    }
}
