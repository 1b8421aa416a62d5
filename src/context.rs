//! Service context bundling all port trait objects.

use crate::adapters::fixed::FixedClock;
use crate::adapters::live::{LiveClock, LiveFileSystem};
use crate::config::Config;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects handed to the store and commands.
pub struct ServiceContext {
    /// Clock for `datetime` elements and record timestamps.
    pub clock: Box<dyn Clock>,
    /// Filesystem for inventory records and format documents.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context with the system clock and real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { clock: Box::new(LiveClock), fs: Box::new(LiveFileSystem) }
    }

    /// Creates a live context, pinning the clock when `config.fixed_now` is set.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut ctx = Self::live();
        if let Some(at) = config.fixed_now {
            tracing::debug!(%at, "clock pinned");
            ctx.clock = Box::new(FixedClock::new(at));
        }
        ctx
    }
}
