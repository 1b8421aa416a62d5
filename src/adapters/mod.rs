//! Port implementations.

pub mod fixed;
pub mod live;
