//! Persisted custom ID format types.
//!
//! Defines the Rust types behind the format documents stored with each
//! inventory. The element-list shape is consumed by [`crate::engine`]; the
//! legacy prefix/counter/suffix shape is rendered directly. Both are folded
//! into [`StoredFormat`] when a document is read.

mod element;
mod id_format;
mod legacy;
mod stored;

pub use element::{ElementKind, IdElement};
pub use id_format::IdFormatSpec;
pub use legacy::LegacyFormat;
pub use stored::StoredFormat;

use serde::{Deserialize, Deserializer};

/// Renders `value` in base 10, left-padded with zeros to at least `width` digits.
///
/// Values wider than `width` are never truncated.
#[must_use]
pub fn zero_pad(value: u64, width: usize) -> String {
    format!("{value:0width$}")
}

/// Counter as written in a stored document. Negative values come from
/// hand-edited documents and read as 0.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCount {
    Unsigned(u64),
    Signed(i64),
}

/// Reads an optional counter, clamping negative values to 0.
pub(crate) fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StoredCount>::deserialize(deserializer)?.map(|count| match count {
        StoredCount::Unsigned(value) => value,
        StoredCount::Signed(value) => u64::try_from(value).unwrap_or(0),
    }))
}
