//! Roster Client - HTTP client and record store for the employee API
//!
//! Provides typed HTTP calls to the employee REST API and the in-memory
//! record store that keeps one page of records plus the latest statistics
//! snapshot in sync with the server.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod store;

pub use api::EmployeeApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use store::{RecordStore, StoreSnapshot};

// Re-export shared types for convenience
pub use shared::models::{
    Department, Employee, EmployeeDraft, EmployeePage, Page, PhotoUpload, Stats,
};
pub use shared::validate::{ValidationErrors, validate};
