//! Browser Bindings
//!
//! Browser-backed implementations of the widget's capabilities, organized by
//! concern.

mod config;
mod interval;
mod storage;

pub use config::*;
pub use interval::*;
pub use storage::*;
