//! Swipetabs Core
//!
//! Shared utilities for the swipetabs widget: hashing collections, logging setup,
//! profiling scopes, math re-exports and colors.

pub mod alloc;
pub mod color;
pub mod logging;
pub mod math;
pub mod profiling;
