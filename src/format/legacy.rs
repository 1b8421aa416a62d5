//! Legacy prefix/counter/suffix format.

use super::zero_pad;

/// The earlier custom ID shape: a fixed prefix, a zero-padded counter and a
/// fixed suffix. Still rendered for inventories configured before element
/// lists existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyFormat {
    /// When false, no identifier is generated.
    pub enabled: bool,
    /// Emitted before the counter.
    pub prefix: String,
    /// Emitted after the counter.
    pub suffix: String,
    /// Next counter value.
    pub counter: u64,
    /// Minimum digit width of the counter.
    pub padding: usize,
}

impl Default for LegacyFormat {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: String::new(),
            suffix: String::new(),
            counter: 1,
            padding: 1,
        }
    }
}

impl LegacyFormat {
    /// Renders `prefix + zero_pad(counter, padding) + suffix`, or `""` when disabled.
    #[must_use]
    pub fn render(&self) -> String {
        if !self.enabled {
            return String::new();
        }
        format!("{}{}{}", self.prefix, zero_pad(self.counter, self.padding), self.suffix)
    }
}
