//! `idforge set-format` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::InventoryStore;

use super::load_format_document;

/// Execute the `set-format` command.
///
/// Reads the format document, then applies it with an optimistic-concurrency
/// check against `expected_version`.
///
/// # Errors
///
/// Returns an error string if the document cannot be read, fails validation,
/// or the inventory's version has moved on.
pub fn run(
    ctx: &ServiceContext,
    store_root: &Path,
    inventory: &str,
    file: &Path,
    expected_version: u64,
) -> Result<(), String> {
    let format = load_format_document(ctx, file)?;
    let store = InventoryStore::new(ctx, store_root);
    let record = store
        .update_format(inventory, format, expected_version)
        .map_err(|e| e.to_string())?;
    println!("Updated custom ID format for {} (version {})", record.id, record.version);
    Ok(())
}
