//! `idforge init` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::InventoryStore;

/// Execute the `init` command.
///
/// # Errors
///
/// Returns an error string if the inventory id is invalid or already taken.
pub fn run(
    ctx: &ServiceContext,
    store_root: &Path,
    inventory: &str,
    title: Option<&str>,
) -> Result<(), String> {
    let store = InventoryStore::new(ctx, store_root);
    let record = store
        .create_inventory(inventory, title.unwrap_or(inventory))
        .map_err(|e| e.to_string())?;
    println!("Created inventory {} (version {})", record.id, record.version);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::commands::test_support::{pinned_context, temp_dir};

    #[test]
    fn init_then_duplicate_fails() {
        let dir = temp_dir("init");
        let ctx = pinned_context();

        assert!(run(&ctx, &dir, "books", Some("Books")).is_ok());
        let err = run(&ctx, &dir, "books", None).unwrap_err();
        assert!(err.contains("already exists"));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
