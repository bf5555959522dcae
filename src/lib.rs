//! Binwheel - compile a Python package down to a binary wheel
//!
//! Binwheel sequences three external tools: a Python-to-native compiler,
//! a stub generator and a package builder. It then copies the resulting
//! wheels next to the project.

// Public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod ui;

// Re-export commonly used types
pub use error::{BinwheelError, Result};

/// Current version of Binwheel
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
