//! Inventory store — persistence for inventories and their custom ID formats.
//!
//! This is the owner side of the engine's counter contract: after rendering
//! an identifier whose format needs it, the store advances the stored counter
//! and writes the record back. All I/O uses the `FileSystem` port. Layout:
//!
//! ```text
//! <root>/
//!   └── inventories/
//!         └── <inventory-id>.yaml
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::ServiceContext;
use crate::engine::FormatError;
use crate::format::StoredFormat;

/// Errors raised by [`InventoryStore`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record exists for the inventory.
    #[error("inventory '{0}' not found")]
    NotFound(String),

    /// A record already exists for the inventory.
    #[error("inventory '{0}' already exists")]
    AlreadyExists(String),

    /// The inventory id is empty or has characters outside `[A-Za-z0-9_-]`.
    #[error("invalid inventory id '{0}': use letters, digits, '-' or '_'")]
    InvalidInventoryId(String),

    /// The record changed since the caller read it.
    #[error(
        "inventory '{id}' was modified concurrently: expected version {expected}, found {actual}"
    )]
    VersionConflict {
        /// Inventory id.
        id: String,
        /// Version the caller based its edit on.
        expected: u64,
        /// Version currently stored.
        actual: u64,
    },

    /// More identifiers were requested in one call than [`MAX_ISSUE_BATCH`].
    #[error("cannot issue {requested} IDs at once (limit {max})")]
    BatchTooLarge {
        /// Number of identifiers asked for.
        requested: usize,
        /// The per-call limit.
        max: usize,
    },

    /// The submitted format failed validation.
    #[error("invalid ID format: {0}")]
    InvalidFormat(#[from] FormatError),

    /// Reading or writing the record failed.
    #[error("storage I/O failed: {0}")]
    Io(String),

    /// The record could not be (de)serialized.
    #[error("malformed inventory record: {0}")]
    Parse(String),
}

/// Upper bound on identifiers issued by one [`InventoryStore::issue_identifiers`] call.
pub const MAX_ISSUE_BATCH: usize = 1000;

/// A persisted inventory and its custom ID configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// Inventory id; also the record's file stem.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Optimistic-concurrency version; bumped on every write after creation.
    pub version: u64,
    /// Custom ID format, if one was configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_format: Option<StoredFormat>,
    /// When the inventory was created.
    pub created_at: DateTime<Utc>,
    /// When the configuration last changed.
    pub updated_at: DateTime<Utc>,
}

/// Persistence layer for inventory records.
pub struct InventoryStore<'a> {
    ctx: &'a ServiceContext,
    root: PathBuf,
}

impl<'a> InventoryStore<'a> {
    /// Creates a new store rooted at the given path.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, root: &Path) -> Self {
        Self { ctx, root: root.to_path_buf() }
    }

    /// Creates an inventory with no custom ID format at version 1.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInventoryId`, `AlreadyExists`, or a storage error.
    pub fn create_inventory(&self, id: &str, title: &str) -> Result<InventoryRecord, StoreError> {
        check_inventory_id(id)?;
        if self.ctx.fs.exists(&self.record_path(id)) {
            return Err(StoreError::AlreadyExists(id.to_string()));
        }
        let now = self.ctx.clock.now();
        let record = InventoryRecord {
            id: id.to_string(),
            title: title.to_string(),
            version: 1,
            id_format: None,
            created_at: now,
            updated_at: now,
        };
        self.save_record(&record)?;
        tracing::info!(inventory = id, "created inventory");
        Ok(record)
    }

    /// Loads an inventory record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no record, or a storage error.
    pub fn load_inventory(&self, id: &str) -> Result<InventoryRecord, StoreError> {
        check_inventory_id(id)?;
        let path = self.record_path(id);
        if !self.ctx.fs.exists(&path) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let contents = self
            .ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| StoreError::Io(format!("reading {}: {e}", path.display())))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| StoreError::Parse(format!("{}: {e}", path.display())))
    }

    /// Lists all inventory ids, sorted. Empty when nothing has been stored.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be listed.
    pub fn list_inventories(&self) -> Result<Vec<String>, StoreError> {
        let dir = self.root.join("inventories");
        if !self.ctx.fs.exists(&dir) {
            return Ok(Vec::new());
        }
        let entries = self
            .ctx
            .fs
            .list_dir(&dir)
            .map_err(|e| StoreError::Io(format!("listing {}: {e}", dir.display())))?;
        let mut ids: Vec<String> = entries
            .into_iter()
            .filter_map(|name| name.strip_suffix(".yaml").map(String::from))
            .collect();
        ids.sort();
        Ok(ids)
    }

    /// Replaces an inventory's custom ID format.
    ///
    /// The edit only applies if the stored version still equals
    /// `expected_version`; on success the version is bumped by one. There is
    /// no retry: a conflicting caller must reload and resubmit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the format fails validation,
    /// `VersionConflict` if the record moved on, or a storage error.
    pub fn update_format(
        &self,
        id: &str,
        format: StoredFormat,
        expected_version: u64,
    ) -> Result<InventoryRecord, StoreError> {
        format.validate()?;
        let mut record = self.load_inventory(id)?;
        if record.version != expected_version {
            return Err(conflict(id, expected_version, record.version));
        }
        record.id_format = Some(format);
        record.updated_at = self.ctx.clock.now();
        self.commit(&mut record, expected_version)?;
        tracing::info!(inventory = id, version = record.version, "updated custom ID format");
        Ok(record)
    }

    /// Issues `count` identifiers for new items, advancing the stored counter
    /// once per identifier when the format needs it.
    ///
    /// Disabled or missing formats yield empty identifiers and leave the
    /// record untouched. Otherwise the record is written once, after all
    /// identifiers are rendered, and only if nobody else wrote it since it
    /// was read; the write bumps the version.
    ///
    /// # Errors
    ///
    /// Returns `BatchTooLarge` above [`MAX_ISSUE_BATCH`], `NotFound`,
    /// `VersionConflict` if the record changed underneath (nothing is
    /// persisted and the identifiers must be discarded), or a storage error.
    pub fn issue_identifiers(&self, id: &str, count: usize) -> Result<Vec<String>, StoreError> {
        if count > MAX_ISSUE_BATCH {
            return Err(StoreError::BatchTooLarge { requested: count, max: MAX_ISSUE_BATCH });
        }
        let mut record = self.load_inventory(id)?;
        let read_version = record.version;
        let Some(format) = record.id_format.as_mut().filter(|f| f.is_enabled()) else {
            tracing::debug!(inventory = id, "no enabled custom ID format");
            return Ok(vec![String::new(); count]);
        };

        let mut rng = rand::rng();
        let mut issued = Vec::new();
        let mut advanced = false;
        for _ in 0..count {
            let now = self.ctx.clock.now();
            issued.push(format.render(&now, &mut rng));
            if format.advances_counter() {
                format.advance_counter();
                advanced = true;
            }
        }

        if advanced {
            let next = format.counter();
            self.commit(&mut record, read_version)?;
            tracing::debug!(inventory = id, next_counter = next, "advanced sequence counter");
        }
        tracing::info!(inventory = id, count = issued.len(), "issued custom IDs");
        Ok(issued)
    }

    /// Renders what the next identifier would look like without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or a storage error.
    pub fn preview(&self, id: &str) -> Result<String, StoreError> {
        let record = self.load_inventory(id)?;
        let now = self.ctx.clock.now();
        Ok(record.id_format.map(|f| f.render(&now, &mut rand::rng())).unwrap_or_default())
    }

    /// Writes `record` as version `read_version + 1`, provided the stored
    /// record is still at `read_version`.
    fn commit(&self, record: &mut InventoryRecord, read_version: u64) -> Result<(), StoreError> {
        let current = self.load_inventory(&record.id)?.version;
        if current != read_version {
            return Err(conflict(&record.id, read_version, current));
        }
        record.version = read_version + 1;
        self.save_record(record)
    }

    fn save_record(&self, record: &InventoryRecord) -> Result<(), StoreError> {
        let yaml = serde_yaml::to_string(record)
            .map_err(|e| StoreError::Parse(format!("serializing {}: {e}", record.id)))?;
        let path = self.record_path(&record.id);
        tracing::debug!(path = %path.display(), "writing inventory record");
        self.ctx
            .fs
            .write(&path, &yaml)
            .map_err(|e| StoreError::Io(format!("writing {}: {e}", path.display())))
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.root.join("inventories").join(format!("{id}.yaml"))
    }
}

fn conflict(id: &str, expected: u64, actual: u64) -> StoreError {
    tracing::warn!(inventory = id, expected, actual, "rejected write to a stale inventory record");
    StoreError::VersionConflict { id: id.to_string(), expected, actual }
}

fn check_inventory_id(id: &str) -> Result<(), StoreError> {
    let ok = !id.is_empty()
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidInventoryId(id.to_string()))
    }
}
