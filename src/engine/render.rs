//! Per-kind element rendering.

use chrono::{DateTime, Datelike, Timelike, Utc};
use rand::{Rng, RngCore};
use uuid::Uuid;

use crate::format::{zero_pad, ElementKind};

/// Renders a single element. Never fails; unset payloads render as `""`.
pub(crate) fn render_element(
    kind: &ElementKind,
    counter: u64,
    now: &DateTime<Utc>,
    rng: &mut dyn RngCore,
) -> String {
    match kind {
        ElementKind::Text { value } => value.clone().unwrap_or_default(),
        ElementKind::Sequence { pad_width } => zero_pad(counter, pad_width.unwrap_or(1)),
        ElementKind::Random6 => random_digits(rng, 6),
        ElementKind::Random9 => random_digits(rng, 9),
        ElementKind::Random20Bit => format!("{:05X}", rng.random_range(0..1u32 << 20)),
        ElementKind::Random32Bit => format!("{:08X}", rng.next_u32()),
        ElementKind::Guid => short_guid(rng),
        ElementKind::Datetime { format } => {
            format.as_deref().map(|f| format_timestamp(f, now)).unwrap_or_default()
        }
        ElementKind::Unknown(_) => String::new(),
    }
}

fn random_digits(rng: &mut dyn RngCore, count: usize) -> String {
    (0..count).map(|_| char::from(b'0' + rng.random_range(0..10u8))).collect()
}

/// First two groups (8 + 4 hex digits) of a random v4 UUID, uppercase.
fn short_guid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0u8; 16];
    rng.fill_bytes(&mut bytes);
    let uuid = uuid::Builder::from_random_bytes(bytes).into_uuid();
    let mut buf = Uuid::encode_buffer();
    let full = uuid.hyphenated().encode_upper(&mut buf);
    full.split('-').take(2).collect::<Vec<_>>().join("-")
}

/// Literal token substitution; anything that is not a token passes through.
pub(crate) fn format_timestamp(pattern: &str, now: &DateTime<Utc>) -> String {
    pattern
        .replace("YYYY", &format!("{:04}", now.year()))
        .replace("MM", &format!("{:02}", now.month()))
        .replace("DD", &format!("{:02}", now.day()))
        .replace("HH", &format!("{:02}", now.hour()))
        .replace("mm", &format!("{:02}", now.minute()))
        .replace("ss", &format!("{:02}", now.second()))
}
