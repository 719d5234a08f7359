//! Browser Bindings
//!
//! Thin wrappers over the browser APIs the planner touches, organized by
//! concern.

mod files;
mod storage;

pub use files::*;
pub use storage::*;
