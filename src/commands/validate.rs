//! `idforge validate` command.

use std::path::Path;

use crate::context::ServiceContext;
use crate::engine::ValidationResult;

use super::load_format_document;

/// Execute the `validate` command.
///
/// Prints `valid` (or the JSON report with `--json`). Legacy documents are
/// always valid.
///
/// # Errors
///
/// Returns an error string if the document cannot be read, or
/// `invalid: <reason>` when it breaks a rule.
pub fn run(ctx: &ServiceContext, file: &Path, json: bool) -> Result<(), String> {
    let format = load_format_document(ctx, file)?;
    let result = ValidationResult::from(format.validate());

    if json {
        let rendered = serde_json::to_string(&result)
            .map_err(|e| format!("Failed to serialize validation result: {e}"))?;
        println!("{rendered}");
        return if result.valid { Ok(()) } else { Err("invalid".to_string()) };
    }

    match result.error {
        None => {
            println!("valid");
            Ok(())
        }
        Some(reason) => Err(format!("invalid: {reason}")),
    }
}
