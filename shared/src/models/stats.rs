//! Aggregate statistics models
//!
//! Read-only snapshot recomputed by the server on each fetch; the client
//! never merges these, it replaces the whole snapshot.

use serde::{Deserialize, Serialize};

/// `GET /stats` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub highest_salaries: Vec<DepartmentSalary>,
    pub salary_ranges: Vec<SalaryRangeCount>,
    pub youngest: Vec<YoungestEmployee>,
}

/// Highest salary per department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentSalary {
    pub department: String,
    pub max_salary: f64,
}

/// Employee count per salary bracket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRangeCount {
    pub range: String,
    pub count: u32,
}

/// Youngest employee per department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YoungestEmployee {
    pub department: String,
    pub employee_name: String,
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_wire_format() {
        let json = r#"{
            "highestSalaries": [{"department": "Engineering", "maxSalary": 98000.0}],
            "salaryRanges": [{"range": "40k-60k", "count": 12}],
            "youngest": [{"department": "Sales", "employeeName": "Kim", "age": 21}]
        }"#;

        let stats: Stats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.highest_salaries[0].max_salary, 98000.0);
        assert_eq!(stats.salary_ranges[0].count, 12);
        assert_eq!(stats.youngest[0].employee_name, "Kim");
    }
}
