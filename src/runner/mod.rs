//! Task execution engine
//!
//! This module handles sequencing the build tasks, running the external
//! tools, and collecting the wheels they produce.

pub mod artifacts;
pub mod command;
pub mod context;
pub mod interpolate;
pub mod task;

// Re-export main types
pub use artifacts::*;
pub use command::*;
pub use context::*;
pub use interpolate::*;
pub use task::*;
