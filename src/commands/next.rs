//! `idforge next` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::store::InventoryStore;

/// Execute the `next` command, printing one identifier per line.
///
/// # Errors
///
/// Returns an error string if the inventory cannot be loaded or saved.
pub fn run(
    ctx: &ServiceContext,
    store_root: &Path,
    inventory: &str,
    count: usize,
) -> Result<(), String> {
    let store = InventoryStore::new(ctx, store_root);
    let ids = store.issue_identifiers(inventory, count).map_err(|e| e.to_string())?;
    for id in &ids {
        println!("{id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::commands::test_support::{pinned_context, temp_dir};
    use crate::format::{IdElement, IdFormatSpec, StoredFormat};
    use crate::store::InventoryStore;

    #[test]
    fn issues_and_persists_counter() {
        let dir = temp_dir("next");
        let ctx = pinned_context();
        let store = InventoryStore::new(&ctx, &dir);
        store.create_inventory("books", "Books").unwrap();
        let format = StoredFormat::Elements(
            IdFormatSpec::enabled(vec![IdElement::sequence("s", 2)], "").with_counter(1),
        );
        store.update_format("books", format, 1).unwrap();

        assert!(run(&ctx, &dir, "books", 3).is_ok());
        assert_eq!(store.load_inventory("books").unwrap().id_format.unwrap().counter(), 4);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unknown_inventory_errors() {
        let dir = temp_dir("next_missing");
        let err = run(&pinned_context(), &dir, "ghost", 1).unwrap_err();
        assert!(err.contains("not found"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
