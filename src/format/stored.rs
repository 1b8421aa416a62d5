//! The stored format variant, resolved once when a document is read.

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::element::IdElement;
use super::id_format::IdFormatSpec;
use super::legacy::LegacyFormat;
use crate::engine;

/// A custom ID configuration as persisted with an inventory.
///
/// Stored documents share one flat shape. A non-empty `elements` list
/// selects [`StoredFormat::Elements`]; otherwise any of `prefix`, `suffix`,
/// `counter` or `padding` selects [`StoredFormat::Legacy`]; anything else is
/// an element list with no elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FormatDocument", into = "FormatDocument")]
pub enum StoredFormat {
    /// Prefix + counter + suffix.
    Legacy(LegacyFormat),
    /// Ordered element list.
    Elements(IdFormatSpec),
}

impl StoredFormat {
    /// Whether the format produces an identifier at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Legacy(legacy) => legacy.enabled,
            Self::Elements(spec) => spec.enabled,
        }
    }

    /// Renders one identifier at `now`.
    pub fn render(&self, now: &DateTime<Utc>, rng: &mut dyn RngCore) -> String {
        match self {
            Self::Legacy(legacy) => legacy.render(),
            Self::Elements(spec) => engine::generate_with(spec, now, rng),
        }
    }

    /// Whether the owner must advance the counter after a render.
    #[must_use]
    pub fn advances_counter(&self) -> bool {
        match self {
            Self::Legacy(legacy) => legacy.enabled,
            Self::Elements(spec) => engine::has_sequence_element(spec),
        }
    }

    /// The counter the next render will use.
    #[must_use]
    pub fn counter(&self) -> u64 {
        match self {
            Self::Legacy(legacy) => legacy.counter,
            Self::Elements(spec) => spec.counter(),
        }
    }

    /// Moves the counter forward by one.
    pub fn advance_counter(&mut self) {
        match self {
            Self::Legacy(legacy) => legacy.counter = legacy.counter.saturating_add(1),
            Self::Elements(spec) => {
                spec.sequence_counter = Some(spec.counter().saturating_add(1));
            }
        }
    }

    /// Checks an element-list format with [`engine::validate`]. Legacy formats
    /// are always accepted.
    ///
    /// # Errors
    ///
    /// Returns the first rule the element list breaks.
    pub fn validate(&self) -> Result<(), engine::FormatError> {
        match self {
            Self::Legacy(_) => Ok(()),
            Self::Elements(spec) => engine::validate(spec),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormatDocument {
    #[serde(default)]
    enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elements: Option<Vec<IdElement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    separator: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    sequence_counter: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    counter: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    padding: Option<i64>,
}

impl FormatDocument {
    fn has_legacy_fields(&self) -> bool {
        self.prefix.is_some()
            || self.suffix.is_some()
            || self.counter.is_some()
            || self.padding.is_some()
    }
}

impl From<FormatDocument> for StoredFormat {
    fn from(doc: FormatDocument) -> Self {
        let has_elements = doc.elements.as_ref().is_some_and(|e| !e.is_empty());
        if !has_elements && doc.has_legacy_fields() {
            let defaults = LegacyFormat::default();
            return Self::Legacy(LegacyFormat {
                enabled: doc.enabled,
                prefix: doc.prefix.unwrap_or_default(),
                suffix: doc.suffix.unwrap_or_default(),
                counter: doc.counter.unwrap_or(defaults.counter),
                padding: doc
                    .padding
                    .map_or(defaults.padding, |p| usize::try_from(p).unwrap_or(0)),
            });
        }
        Self::Elements(IdFormatSpec {
            enabled: doc.enabled,
            elements: doc.elements.unwrap_or_default(),
            separator: doc.separator.unwrap_or_default(),
            sequence_counter: doc.sequence_counter,
        })
    }
}

impl From<StoredFormat> for FormatDocument {
    fn from(format: StoredFormat) -> Self {
        match format {
            StoredFormat::Legacy(legacy) => FormatDocument {
                enabled: legacy.enabled,
                prefix: Some(legacy.prefix),
                suffix: Some(legacy.suffix),
                counter: Some(legacy.counter),
                padding: Some(i64::try_from(legacy.padding).unwrap_or(i64::MAX)),
                ..FormatDocument::default()
            },
            StoredFormat::Elements(spec) => FormatDocument {
                enabled: spec.enabled,
                elements: Some(spec.elements),
                separator: Some(spec.separator),
                sequence_counter: spec.sequence_counter,
                ..FormatDocument::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 27, 14, 30, 52).unwrap()
    }

    #[test]
    fn element_list_wins_over_legacy_fields() {
        let yaml = "enabled: true\nprefix: OLD-\nelements:\n  - { type: text, value: NEW }\n";
        let format: StoredFormat = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(format, StoredFormat::Elements(_)));
    }

    #[test]
    fn legacy_fields_without_elements_select_legacy() {
        let yaml = "enabled: true\nprefix: BK-\ncounter: 3\npadding: 4\nelements: []\n";
        let format: StoredFormat = serde_yaml::from_str(yaml).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        assert!(matches!(format, StoredFormat::Legacy(_)));
        assert_eq!(format.render(&now(), &mut rng), "BK-0003");
        assert!(format.advances_counter());
    }

    #[test]
    fn bare_document_is_empty_element_list() {
        let format: StoredFormat = serde_json::from_str(r#"{"enabled":true}"#).unwrap();
        let expected = IdFormatSpec { enabled: true, ..Default::default() };
        assert_eq!(format, StoredFormat::Elements(expected));
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(format.render(&now(), &mut rng), "");
    }

    #[test]
    fn advance_counter_moves_either_variant() {
        let mut legacy =
            StoredFormat::Legacy(LegacyFormat { counter: 9, ..LegacyFormat::default() });
        legacy.advance_counter();
        assert_eq!(legacy.counter(), 10);

        let mut elements = StoredFormat::Elements(IdFormatSpec::default());
        elements.advance_counter();
        assert_eq!(elements.counter(), 2);
    }

    #[test]
    fn legacy_is_always_valid() {
        let format =
            StoredFormat::Legacy(LegacyFormat { enabled: true, ..LegacyFormat::default() });
        assert!(format.validate().is_ok());
        let empty = StoredFormat::Elements(IdFormatSpec { enabled: true, ..Default::default() });
        assert!(empty.validate().is_err());
    }

    #[test]
    fn serializes_only_the_resolved_variant() {
        let format = StoredFormat::Legacy(LegacyFormat {
            enabled: true,
            prefix: "A".to_string(),
            suffix: String::new(),
            counter: 5,
            padding: 2,
        });
        let json = serde_json::to_value(&format).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "enabled": true,
                "prefix": "A",
                "suffix": "",
                "counter": 5,
                "padding": 2
            })
        );
        let back: StoredFormat = serde_json::from_value(json).unwrap();
        assert_eq!(back, format);
    }

    #[test]
    fn negative_counters_do_not_break_parsing() {
        let legacy: StoredFormat =
            serde_yaml::from_str("enabled: true\nprefix: BK\ncounter: -2\npadding: 2\n").unwrap();
        assert_eq!(legacy.counter(), 0);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(legacy.render(&now(), &mut rng), "BK00");

        let elements: StoredFormat = serde_yaml::from_str(
            "enabled: true\nsequenceCounter: -9\nelements:\n  - { type: sequence, padding: 2 }\n",
        )
        .unwrap();
        assert_eq!(elements.counter(), 0);
    }
}
