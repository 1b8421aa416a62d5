//! Command dispatch and handlers.

pub mod init;
pub mod next;
pub mod preview;
pub mod set_format;
pub mod show;
pub mod validate;

use std::path::Path;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::format::StoredFormat;

/// Dispatch a parsed command to its handler using a context built from `config`.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command, config: &Config) -> Result<(), String> {
    let ctx = ServiceContext::from_config(config);
    dispatch_with_context(command, &ctx, &config.store_root)
}

/// Dispatch a command with the given service context and store root.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    store_root: &Path,
) -> Result<(), String> {
    match command {
        Command::Init { inventory, title } => {
            init::run(ctx, store_root, inventory, title.as_deref())
        }
        Command::SetFormat { inventory, file, expected_version } => {
            set_format::run(ctx, store_root, inventory, file, *expected_version)
        }
        Command::Validate { file, json } => validate::run(ctx, file, *json),
        Command::Preview { file } => preview::run(ctx, file),
        Command::Next { inventory, count } => {
            next::run(ctx, store_root, inventory, usize::from(*count))
        }
        Command::Show { inventory } => show::run(ctx, store_root, inventory.as_deref()),
    }
}

/// Reads a YAML or JSON format document through the filesystem port.
pub(crate) fn load_format_document(
    ctx: &ServiceContext,
    path: &Path,
) -> Result<StoredFormat, String> {
    let contents = ctx
        .fs
        .read_to_string(path)
        .map_err(|e| format!("Failed to read format file {}: {e}", path.display()))?;
    serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse format file {}: {e}", path.display()))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};

    use chrono::{TimeZone, Utc};

    use crate::adapters::fixed::FixedClock;
    use crate::adapters::live::LiveFileSystem;
    use crate::context::ServiceContext;

    /// Fresh temp directory for a command test.
    pub(crate) fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("idforge_cmd_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Live filesystem with the clock pinned to 2025-01-27T14:30:52Z.
    pub(crate) fn pinned_context() -> ServiceContext {
        let at = Utc.with_ymd_and_hms(2025, 1, 27, 14, 30, 52).unwrap();
        ServiceContext { clock: Box::new(FixedClock::new(at)), fs: Box::new(LiveFileSystem) }
    }

    pub(crate) fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}
