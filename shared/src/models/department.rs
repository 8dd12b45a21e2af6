//! Department Model

use serde::{Deserialize, Serialize};

/// Read-only department reference data, used to populate selection lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}
