//! Element-list ID format.

use serde::{Deserialize, Serialize};

use super::element::{ElementKind, IdElement};

/// An ordered element list joined by a separator, plus the inventory's
/// running sequence counter.
///
/// The engine only reads this value. Advancing `sequence_counter` after a
/// generation is the owner's job (see [`crate::store::InventoryStore`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdFormatSpec {
    /// When false, no identifier is generated.
    #[serde(default)]
    pub enabled: bool,
    /// Elements in concatenation order.
    #[serde(default)]
    pub elements: Vec<IdElement>,
    /// Inserted between consecutive rendered elements.
    #[serde(default)]
    pub separator: String,
    /// Next value for `sequence` elements; absent means 1, negative reads as 0.
    #[serde(
        default,
        deserialize_with = "super::lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub sequence_counter: Option<u64>,
}

impl IdFormatSpec {
    /// Creates an enabled format with the given elements and separator.
    #[must_use]
    pub fn enabled(elements: Vec<IdElement>, separator: impl Into<String>) -> Self {
        Self { enabled: true, elements, separator: separator.into(), sequence_counter: None }
    }

    /// Sets the sequence counter.
    #[must_use]
    pub fn with_counter(mut self, counter: u64) -> Self {
        self.sequence_counter = Some(counter);
        self
    }

    /// The counter value `sequence` elements render.
    #[must_use]
    pub fn counter(&self) -> u64 {
        self.sequence_counter.unwrap_or(1)
    }

    /// Returns true if any element is a `sequence`, regardless of `enabled`.
    #[must_use]
    pub fn contains_sequence(&self) -> bool {
        self.elements.iter().any(|e| matches!(e.kind, ElementKind::Sequence { .. }))
    }
}
