//! Persistent mark storage for aerospace-marks
//!
//! A mark is a user-chosen text label attached to a window id, i3/sway
//! style. This crate owns the single SQLite table behind them:
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS marks (
//!     window_id INTEGER NOT NULL,
//!     mark      TEXT NOT NULL PRIMARY KEY
//! );
//! ```
//!
//! A mark identifies at most one window at any time (the primary key), a
//! window may hold any number of distinct marks, and rows are physically
//! removed on unmark. The store knows nothing about whether a window id
//! still exists in the window manager; a stale mark is a valid row until
//! explicitly cleaned.

mod error;
mod paths;
mod store;

pub use error::StoreError;
pub use paths::{database_dir, database_path, DB_FILE_NAME, DB_PATH_ENV};
pub use store::{Mark, MarkStorage, SqliteMarkStore};
