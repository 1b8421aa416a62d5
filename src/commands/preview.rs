//! `idforge preview` command.

use std::path::Path;

use crate::context::ServiceContext;

use super::load_format_document;

/// Execute the `preview` command: render one identifier from a document.
///
/// Nothing is persisted, so the document's counter is left as written.
///
/// # Errors
///
/// Returns an error string if the document cannot be read or parsed.
pub fn run(ctx: &ServiceContext, file: &Path) -> Result<(), String> {
    let format = load_format_document(ctx, file)?;
    if let Err(e) = format.validate() {
        tracing::warn!(error = %e, "previewing a format that would be rejected on save");
    }
    let now = ctx.clock.now();
    println!("{}", format.render(&now, &mut rand::rng()));
    Ok(())
}
