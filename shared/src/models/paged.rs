//! Pagination types

use serde::{Deserialize, Serialize};

use super::Employee;

/// One page of items plus pagination metadata
///
/// Invariant: `current_page <= total_pages` whenever `total_pages > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Raw `GET /employees?page={n}` response
///
/// The server echoes only the total page count; the requested page number
/// is supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    pub items: Vec<Employee>,
    pub total_pages: u32,
}

impl EmployeePage {
    /// Attach the page number that produced this response
    pub fn into_page(self, current_page: u32) -> Page<Employee> {
        Page {
            items: self.items,
            current_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_page_wire_format() {
        let json = r#"{
            "items": [{
                "id": 7,
                "name": "Ada Lovelace",
                "departmentId": "3",
                "dateOfBirth": "1990-12-10",
                "phone": "1234567890",
                "email": "ada@example.com",
                "salary": 52000.0,
                "status": true,
                "photo": "/uploads/ada.jpg"
            }],
            "totalPages": 4
        }"#;

        let page: EmployeePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 7);
        assert_eq!(page.items[0].department_id, "3");
        assert_eq!(page.items[0].photo.as_deref(), Some("/uploads/ada.jpg"));
    }

    #[test]
    fn test_missing_photo_deserializes_as_none() {
        let json = r#"{
            "id": 1,
            "name": "Sam",
            "departmentId": "1",
            "dateOfBirth": "1985-01-01",
            "phone": "0123456789",
            "email": "sam@example.com",
            "salary": 40000.0,
            "status": false
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.photo.is_none());
        assert!(!employee.status);
    }

    #[test]
    fn test_into_page_keeps_items_and_totals() {
        let page = EmployeePage {
            items: vec![],
            total_pages: 3,
        };
        let page = page.into_page(2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert!(page.items.is_empty());
    }
}
