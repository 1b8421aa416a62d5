//! `idforge show` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::format::StoredFormat;
use crate::store::{InventoryRecord, InventoryStore};

/// Execute the `show` command.
///
/// When `inventory` is provided, prints that inventory's record. Otherwise
/// prints a table of all inventories.
///
/// # Errors
///
/// Returns an error string if listing or loading fails.
pub fn run(ctx: &ServiceContext, store_root: &Path, inventory: Option<&str>) -> Result<(), String> {
    let store = InventoryStore::new(ctx, store_root);

    if let Some(id) = inventory {
        let record = store.load_inventory(id).map_err(|e| e.to_string())?;
        print_record(&record);
        return Ok(());
    }

    let ids = store.list_inventories().map_err(|e| e.to_string())?;
    if ids.is_empty() {
        println!("No inventories found in store.");
        return Ok(());
    }

    let mut rows: Vec<(String, String, String, String)> = Vec::new();
    for id in &ids {
        let record = store.load_inventory(id).map_err(|e| e.to_string())?;
        rows.push((
            record.id.clone(),
            record.title.clone(),
            record.version.to_string(),
            format_kind(record.id_format.as_ref()).to_string(),
        ));
    }

    let id_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(2).max(2);
    let title_width = rows.iter().map(|r| r.1.len()).max().unwrap_or(5).max(5);
    let version_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(7).max(7);

    println!(
        "{:<id_width$}  {:<title_width$}  {:<version_width$}  FORMAT",
        "ID", "TITLE", "VERSION",
    );
    println!("{:-<id_width$}  {:-<title_width$}  {:-<version_width$}  ------", "", "", "");
    for (id, title, version, kind) in &rows {
        println!("{id:<id_width$}  {title:<title_width$}  {version:<version_width$}  {kind}");
    }
    println!("\n{} inventory(ies) total.", rows.len());
    Ok(())
}

fn format_kind(format: Option<&StoredFormat>) -> &'static str {
    match format {
        None => "none",
        Some(f) if !f.is_enabled() => "disabled",
        Some(StoredFormat::Legacy(_)) => "legacy",
        Some(StoredFormat::Elements(_)) => "elements",
    }
}

fn print_record(record: &InventoryRecord) {
    println!("Inventory: {}", record.id);
    println!("Title: {}", record.title);
    println!("Version: {}", record.version);
    println!("Updated: {}", record.updated_at.to_rfc3339());

    let Some(format) = &record.id_format else {
        println!("Custom ID: not configured");
        return;
    };
    println!("Custom ID: {}", format_kind(Some(format)));
    println!("Next counter: {}", format.counter());
    match format {
        StoredFormat::Legacy(legacy) => {
            println!("  prefix: {:?}", legacy.prefix);
            println!("  padding: {}", legacy.padding);
            println!("  suffix: {:?}", legacy.suffix);
        }
        StoredFormat::Elements(spec) => {
            println!("  separator: {:?}", spec.separator);
            for (i, element) in spec.elements.iter().enumerate() {
                println!("  {}. {}", i + 1, element.kind.type_name());
            }
        }
    }
}
