//! Personal note-taking library
//!
//! This library keeps short text notes in an ordered list that is mirrored to
//! a single JSON file, and provides the command-line front ends over it.

mod cli;
mod config;
mod errors;
mod helper;
mod note;
mod storage;
mod types;

// Re-export key components
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use helper::*;
pub use note::*;
pub use storage::*;
pub use types::*;
