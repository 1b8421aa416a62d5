//! Custom ID rendering and validation.
//!
//! The engine is pure: it reads an [`IdFormatSpec`] and a caller-supplied
//! timestamp, draws from a random source for the random kinds, and returns a
//! string. It never touches the format's sequence counter. Callers that see
//! [`has_sequence_element`] return true must persist `counter + 1` after a
//! successful generation.
//!
//! [`generate`] is tolerant and renders whatever it is given;
//! [`validate`] is the strict, separate check run when a format is saved.

mod render;

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;
use thiserror::Error;

use crate::format::{ElementKind, IdFormatSpec};

/// Maximum number of elements an enabled format may hold.
pub const MAX_ELEMENTS: usize = 10;

/// Reasons an enabled element-list format is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Enabled with no elements.
    #[error("at least one ID element is required when custom ID is enabled")]
    NoElements,

    /// More than [`MAX_ELEMENTS`] elements.
    #[error("maximum {max} ID elements allowed")]
    TooManyElements {
        /// The limit that was exceeded.
        max: usize,
    },

    /// A `text` element with no value, or only whitespace.
    #[error("text elements cannot be empty")]
    EmptyText,
}

/// Outcome of [`validate`] in report form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// Whether the format passed every rule.
    pub valid: bool,
    /// Message of the first rule that failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// Validates `spec` and reports the outcome.
    #[must_use]
    pub fn of(spec: &IdFormatSpec) -> Self {
        Self::from(validate(spec))
    }
}

impl From<Result<(), FormatError>> for ValidationResult {
    fn from(result: Result<(), FormatError>) -> Self {
        match result {
            Ok(()) => Self { valid: true, error: None },
            Err(err) => Self { valid: false, error: Some(err.to_string()) },
        }
    }
}

/// Renders an identifier using the thread-local random source.
///
/// Returns `""` when the format is disabled or has no elements.
#[must_use]
pub fn generate(spec: &IdFormatSpec, now: &DateTime<Utc>) -> String {
    generate_with(spec, now, &mut rand::rng())
}

/// Renders an identifier drawing randomness from `rng`.
///
/// Each element is rendered in order and the parts are joined with the
/// separator. Unrecognised kinds contribute an empty part.
pub fn generate_with(spec: &IdFormatSpec, now: &DateTime<Utc>, rng: &mut dyn RngCore) -> String {
    if !spec.enabled || spec.elements.is_empty() {
        return String::new();
    }
    let counter = spec.counter();
    let parts: Vec<String> = spec
        .elements
        .iter()
        .map(|element| render::render_element(&element.kind, counter, now, rng))
        .collect();
    let id = parts.join(&spec.separator);
    tracing::debug!(elements = spec.elements.len(), %id, "rendered custom id");
    id
}

/// True iff the format is enabled and holds at least one `sequence` element.
#[must_use]
pub fn has_sequence_element(spec: &IdFormatSpec) -> bool {
    spec.enabled && spec.contains_sequence()
}

/// Checks an element-list format. Rules are applied in a fixed order and the
/// first failure is returned. Disabled formats always pass.
///
/// Pad widths and date patterns are not checked.
///
/// # Errors
///
/// Returns the [`FormatError`] for the first rule the format breaks.
pub fn validate(spec: &IdFormatSpec) -> Result<(), FormatError> {
    if !spec.enabled {
        return Ok(());
    }
    if spec.elements.is_empty() {
        return Err(FormatError::NoElements);
    }
    if spec.elements.len() > MAX_ELEMENTS {
        return Err(FormatError::TooManyElements { max: MAX_ELEMENTS });
    }
    let empty_text = spec.elements.iter().any(|element| match &element.kind {
        ElementKind::Text { value } => value.as_deref().is_none_or(|v| v.trim().is_empty()),
        _ => false,
    });
    if empty_text {
        return Err(FormatError::EmptyText);
    }
    Ok(())
}
