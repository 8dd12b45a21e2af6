//! Data models
//!
//! Shared between the record store and the presentation layer.
//! Wire names are camelCase; Rust fields stay snake_case via serde renames.

pub mod department;
pub mod employee;
pub mod paged;
pub mod stats;

// Re-exports
pub use department::*;
pub use employee::*;
pub use paged::*;
pub use stats::*;
