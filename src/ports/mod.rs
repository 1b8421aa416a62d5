//! Port traits defining external boundaries.
//!
//! Each trait is a boundary between the ID logic and something outside the
//! process (time, disk). Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;

pub use clock::Clock;
pub use filesystem::FileSystem;
