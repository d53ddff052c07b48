//! `unmark` - remove marks

use aerospace_marks_store::MarkStorage;
use miette::IntoDiagnostic;

/// Remove the given marks, or every mark when none are given.
pub fn run(store: &mut dyn MarkStorage, identifiers: &[String]) -> miette::Result<()> {
    if identifiers.is_empty() {
        let removed = store.delete_all_marks().into_diagnostic()?;
        println!("Removed {removed} marks");
        return Ok(());
    }

    let mut removed = 0;
    for identifier in identifiers {
        removed += store.delete_by_mark(identifier).into_diagnostic()?;
    }
    println!("Removed {removed} marks");

    Ok(())
}
