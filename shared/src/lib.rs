//! Shared types for the Roster admin client
//!
//! Wire models exchanged with the employee API and the pure validation
//! rules applied to form input before submission.

pub mod models;
pub mod validate;

// Re-exports
pub use models::{
    Department, Employee, EmployeeDraft, EmployeePage, Page, PhotoUpload, Stats,
};
pub use validate::{ValidationErrors, validate};
