//! Environment-driven configuration.
//!
//! | Variable        | Meaning                                   | Default    |
//! |-----------------|-------------------------------------------|------------|
//! | `IDFORGE_STORE` | Inventory store root                      | `.idforge` |
//! | `IDFORGE_NOW`   | RFC 3339 instant to pin the clock to      | unset      |
//! | `IDFORGE_LOG`   | Log filter when `RUST_LOG` is not set     | `warn`     |

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// Store root used when `IDFORGE_STORE` is unset.
pub const DEFAULT_STORE: &str = ".idforge";

/// Log filter used when neither `RUST_LOG` nor `IDFORGE_LOG` is set.
pub const DEFAULT_LOG: &str = "warn";

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory of the inventory store.
    pub store_root: PathBuf,
    /// Instant the clock is pinned to, if any.
    pub fixed_now: Option<DateTime<Utc>>,
    /// Fallback `tracing` filter directive.
    pub log_filter: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error string if `IDFORGE_NOW` is set but not RFC 3339.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns an error string if `IDFORGE_NOW` is set but not RFC 3339.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_root =
            lookup("IDFORGE_STORE").map_or_else(|| PathBuf::from(DEFAULT_STORE), PathBuf::from);
        let fixed_now = lookup("IDFORGE_NOW")
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| format!("IDFORGE_NOW is not an RFC 3339 timestamp ({raw}): {e}"))
            })
            .transpose()?;
        let log_filter = lookup("IDFORGE_LOG").unwrap_or_else(|| DEFAULT_LOG.to_string());
        Ok(Self { store_root, fixed_now, log_filter })
    }
}
