//! Subcommand implementations
//!
//! Each command takes the storage and window-manager surfaces as trait
//! objects injected by `main`, so tests drive them with an in-memory store
//! and a window-manager double.

pub mod focus;
pub mod get;
pub mod info;
pub mod list;
pub mod mark;
pub mod summon;
pub mod unmark;

use miette::miette;

/// Reject empty or whitespace-only identifiers before they hit storage.
pub fn validate_identifier(identifier: &str) -> miette::Result<String> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return Err(miette!("identifier cannot be empty or whitespace"));
    }

    Ok(trimmed.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier_trims() {
        assert_eq!(validate_identifier("  web ").unwrap(), "web");
    }

    #[test]
    fn test_validate_identifier_rejects_whitespace() {
        assert!(validate_identifier("   ").is_err());
        assert!(validate_identifier("").is_err());
    }
}
