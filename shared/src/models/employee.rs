//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Server-assigned, immutable after creation
    pub id: u64,
    pub name: String,
    /// Department reference (String ID)
    pub department_id: String,
    /// ISO date, `YYYY-MM-DD`
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub salary: f64,
    pub status: bool,
    /// Server-side reference to the stored photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Candidate employee record as captured from form input
///
/// Text fields hold the raw strings the user typed; [`crate::validate`]
/// decides whether the draft is submittable. The draft is converted to a
/// multipart payload only at the network boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub department_id: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub salary: String,
    pub status: bool,
    /// Required on create, optional on edit (server keeps the prior photo)
    pub photo: Option<PhotoUpload>,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            department_id: String::new(),
            date_of_birth: String::new(),
            phone: String::new(),
            email: String::new(),
            salary: String::new(),
            // New employees start active
            status: true,
            photo: None,
        }
    }
}

/// Photo binary attached to a draft
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}
