//! Form validation for candidate employee records
//!
//! Pure rule checking: every rule is evaluated independently and all
//! violations are collected into one field -> message map. Field keys use
//! the wire names so the presentation layer can attach messages directly
//! to inputs.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use thiserror::Error;

use crate::models::EmployeeDraft;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").unwrap());

/// Minimum accepted age in whole years
pub const MIN_AGE: i32 = 18;
/// Maximum accepted age in whole years
pub const MAX_AGE: i32 = 70;

/// Field-level validation failures, keyed by wire field name
///
/// An empty map means the draft is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed: {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for one field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// All failures in field-name order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }
}

/// Check a candidate record against the field-level business rules.
///
/// `edit_mode` relaxes the photo requirement: an existing record keeps its
/// prior photo when none is attached.
///
/// The age rule is calendar-year subtraction with no month/day correction.
/// The accepted boundary birth years depend on this exact arithmetic, so it
/// is kept as-is rather than switching to date-aware age math.
pub fn validate(draft: &EmployeeDraft, edit_mode: bool) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.name.trim().is_empty() {
        errors.insert("name", "Name is required");
    } else if draft.name.len() < 2 {
        errors.insert("name", "Name must be at least 2 characters");
    }

    if draft.department_id.is_empty() {
        errors.insert("departmentId", "Please select a department");
    }

    if draft.date_of_birth.is_empty() {
        errors.insert("dateOfBirth", "Date of birth is required");
    } else {
        match NaiveDate::parse_from_str(&draft.date_of_birth, "%Y-%m-%d") {
            Ok(birth) => {
                let age = Utc::now().year() - birth.year();
                if !(MIN_AGE..=MAX_AGE).contains(&age) {
                    errors.insert(
                        "dateOfBirth",
                        "Employee must be between 18 and 70 years old",
                    );
                }
            }
            Err(_) => errors.insert("dateOfBirth", "Enter a valid date"),
        }
    }

    if draft.phone.is_empty() {
        errors.insert("phone", "Phone number is required");
    } else if !PHONE_REGEX.is_match(&draft.phone) {
        errors.insert("phone", "Enter a valid 10-digit phone number");
    }

    if draft.email.is_empty() {
        errors.insert("email", "Email is required");
    } else if !EMAIL_REGEX.is_match(&draft.email) {
        errors.insert("email", "Enter a valid email address");
    }

    if draft.salary.is_empty() {
        errors.insert("salary", "Salary is required");
    } else {
        match draft.salary.parse::<f64>() {
            Ok(value) if value > 0.0 => {}
            _ => errors.insert("salary", "Enter a valid salary amount"),
        }
    }

    if !edit_mode && draft.photo.is_none() {
        errors.insert("photo", "Please upload a photo");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhotoUpload;

    fn dob_with_age(age: i32) -> String {
        format!("{}-06-15", Utc::now().year() - age)
    }

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "Ada Lovelace".to_string(),
            department_id: "3".to_string(),
            date_of_birth: dob_with_age(30),
            phone: "1234567890".to_string(),
            email: "ada@example.com".to_string(),
            salary: "52000".to_string(),
            status: true,
            photo: Some(PhotoUpload {
                file_name: "ada.jpg".to_string(),
                mime_type: "image/jpeg".to_string(),
                bytes: vec![0xff, 0xd8],
            }),
        }
    }

    #[test]
    fn test_valid_draft_passes() {
        let errors = validate(&valid_draft(), false);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn test_missing_fields_flag_exactly_that_field() {
        let cases: [(&str, fn(&mut EmployeeDraft)); 6] = [
            ("name", |d| d.name.clear()),
            ("departmentId", |d| d.department_id.clear()),
            ("dateOfBirth", |d| d.date_of_birth.clear()),
            ("phone", |d| d.phone.clear()),
            ("email", |d| d.email.clear()),
            ("salary", |d| d.salary.clear()),
        ];

        for (field, clear) in cases {
            let mut draft = valid_draft();
            clear(&mut draft);
            let errors = validate(&draft, false);
            assert_eq!(errors.len(), 1, "expected one error for {field}");
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn test_all_violations_collected_in_one_pass() {
        let errors = validate(&EmployeeDraft::default(), false);
        assert_eq!(errors.len(), 7);
        let fields: Vec<&str> = errors.iter().map(|(field, _)| field).collect();
        assert!(fields.contains(&"photo"));
        assert!(fields.contains(&"salary"));
    }

    #[test]
    fn test_name_minimum_length() {
        let mut draft = valid_draft();
        draft.name = "A".to_string();
        let errors = validate(&draft, false);
        assert_eq!(
            errors.get("name"),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_blank_name_is_required_not_too_short() {
        let mut draft = valid_draft();
        draft.name = "   ".to_string();
        let errors = validate(&draft, false);
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_edit_mode_relaxes_photo_only() {
        let mut draft = valid_draft();
        draft.photo = None;

        let create_errors = validate(&draft, false);
        assert_eq!(create_errors.get("photo"), Some("Please upload a photo"));

        let edit_errors = validate(&draft, true);
        assert!(edit_errors.is_empty());
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        for (phone, ok) in [
            ("1234567890", true),
            ("12345", false),
            ("12345678901", false),
            ("12345abcde", false),
        ] {
            let mut draft = valid_draft();
            draft.phone = phone.to_string();
            let errors = validate(&draft, false);
            assert_eq!(errors.get("phone").is_none(), ok, "phone {phone:?}");
        }
    }

    #[test]
    fn test_email_grammar() {
        for (email, ok) in [
            ("a@b.co", true),
            ("first.last+tag@sub.example.org", true),
            ("a@b", false),
            ("a@b.c", false),
            ("@example.com", false),
        ] {
            let mut draft = valid_draft();
            draft.email = email.to_string();
            let errors = validate(&draft, false);
            assert_eq!(errors.get("email").is_none(), ok, "email {email:?}");
        }
    }

    #[test]
    fn test_age_boundaries_use_year_subtraction() {
        for (age, ok) in [(18, true), (70, true), (17, false), (71, false)] {
            let mut draft = valid_draft();
            draft.date_of_birth = dob_with_age(age);
            let errors = validate(&draft, false);
            assert_eq!(errors.get("dateOfBirth").is_none(), ok, "age {age}");
        }
    }

    #[test]
    fn test_unparseable_date_is_rejected() {
        let mut draft = valid_draft();
        draft.date_of_birth = "not-a-date".to_string();
        let errors = validate(&draft, false);
        assert_eq!(errors.get("dateOfBirth"), Some("Enter a valid date"));
    }

    #[test]
    fn test_salary_must_be_a_positive_number() {
        for (salary, ok) in [
            ("52000", true),
            ("0.01", true),
            ("0", false),
            ("-5", false),
            ("lots", false),
            ("NaN", false),
        ] {
            let mut draft = valid_draft();
            draft.salary = salary.to_string();
            let errors = validate(&draft, false);
            assert_eq!(errors.get("salary").is_none(), ok, "salary {salary:?}");
        }
    }
}
