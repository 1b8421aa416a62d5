//! ID element types.

use serde::{Deserialize, Serialize};

/// One positional component of a generated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ElementDocument", into = "ElementDocument")]
pub struct IdElement {
    /// Stable handle used by editors for reordering. Ignored when rendering.
    pub id: String,
    /// What this element renders to.
    pub kind: ElementKind,
}

impl IdElement {
    /// Creates an element with the given editor handle and kind.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self { id: id.into(), kind }
    }

    /// Convenience constructor for a `text` element.
    #[must_use]
    pub fn text(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Text { value: Some(value.into()) })
    }

    /// Convenience constructor for a `sequence` element padded to `pad_width` digits.
    #[must_use]
    pub fn sequence(id: impl Into<String>, pad_width: usize) -> Self {
        Self::new(id, ElementKind::Sequence { pad_width: Some(pad_width) })
    }

    /// Convenience constructor for a `datetime` element.
    #[must_use]
    pub fn datetime(id: impl Into<String>, format: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Datetime { format: Some(format.into()) })
    }
}

/// The closed set of element kinds, each carrying only its own payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Literal text.
    Text {
        /// The literal to emit; unset renders as nothing.
        value: Option<String>,
    },
    /// The inventory's running counter, zero-padded.
    Sequence {
        /// Minimum digit width; unset means 1.
        pad_width: Option<usize>,
    },
    /// Six random decimal digits.
    Random6,
    /// Nine random decimal digits.
    Random9,
    /// A random 20-bit value as 5 uppercase hex digits.
    Random20Bit,
    /// A random 32-bit value as 8 uppercase hex digits.
    Random32Bit,
    /// The first two groups of a random v4 UUID.
    Guid,
    /// The current time rendered through a `YYYY`/`MM`/`DD`/`HH`/`mm`/`ss` pattern.
    Datetime {
        /// Token pattern; unset renders as nothing.
        format: Option<String>,
    },
    /// A kind name this build does not recognise. Renders as nothing.
    Unknown(String),
}

impl ElementKind {
    /// The `type` name used in stored documents.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::Sequence { .. } => "sequence",
            Self::Random6 => "random6",
            Self::Random9 => "random9",
            Self::Random20Bit => "random20bit",
            Self::Random32Bit => "random32bit",
            Self::Guid => "guid",
            Self::Datetime { .. } => "datetime",
            Self::Unknown(name) => name.as_str(),
        }
    }
}

/// Flat on-disk shape of an element. Payload fields that do not belong to
/// the element's kind are dropped on read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ElementDocument {
    #[serde(default)]
    id: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    padding: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    format: Option<String>,
}

impl From<ElementDocument> for IdElement {
    fn from(doc: ElementDocument) -> Self {
        let kind = match doc.kind.as_str() {
            "text" => ElementKind::Text { value: doc.value },
            // Negative widths degrade to "no padding".
            "sequence" => ElementKind::Sequence {
                pad_width: doc.padding.map(|p| usize::try_from(p).unwrap_or(0)),
            },
            "random6" => ElementKind::Random6,
            "random9" => ElementKind::Random9,
            "random20bit" => ElementKind::Random20Bit,
            "random32bit" => ElementKind::Random32Bit,
            "guid" => ElementKind::Guid,
            "datetime" => ElementKind::Datetime { format: doc.format },
            _ => ElementKind::Unknown(doc.kind),
        };
        Self { id: doc.id, kind }
    }
}

impl From<IdElement> for ElementDocument {
    fn from(element: IdElement) -> Self {
        let mut doc = ElementDocument {
            id: element.id,
            kind: element.kind.type_name().to_string(),
            ..ElementDocument::default()
        };
        match element.kind {
            ElementKind::Text { value } => doc.value = value,
            ElementKind::Sequence { pad_width } => {
                doc.padding = pad_width.map(|w| i64::try_from(w).unwrap_or(i64::MAX));
            }
            ElementKind::Datetime { format } => doc.format = format,
            ElementKind::Random6
            | ElementKind::Random9
            | ElementKind::Random20Bit
            | ElementKind::Random32Bit
            | ElementKind::Guid
            | ElementKind::Unknown(_) => {}
        }
        doc
    }
}
