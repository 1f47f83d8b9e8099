//! Field-level validation of candidate submissions.
//!
//! Every field is checked independently and all failures are collected, so a
//! front end can point at each offending input at once. A submission is either
//! accepted in full or rejected in full.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::candidate::models::{split_tech_stack, CandidateSubmission, RawSubmission};

pub const MIN_TEXT_LEN: usize = 2;
pub const MAX_TEXT_LEN: usize = 100;
pub const MAX_YEARS_OF_EXPERIENCE: i64 = 50;

/// Optional leading `+`, optional parenthesised groups, then digit groups
/// separated by at most one space, dot or hyphen.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?\(?[0-9]{1,4}\)?[-\s.]?\(?[0-9]{1,4}\)?[-\s.]?[0-9]{1,5}[-\s.]?[0-9]{1,5}$")
        .expect("phone pattern is valid")
});

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every violated field of one submission, in form order.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validates a raw submission. Returns the normalized submission (tech stack
/// trimmed) or every field error found.
pub fn validate_submission(raw: &RawSubmission) -> Result<CandidateSubmission, ValidationErrors> {
    let mut errors = Vec::new();

    check_text_len("name", &raw.name, &mut errors);
    if let Err(message) = check_email(&raw.email) {
        errors.push(FieldError {
            field: "email",
            message,
        });
    }
    if let Err(message) = check_phone(&raw.phone_number) {
        errors.push(FieldError {
            field: "phone_number",
            message,
        });
    }
    let years = match check_years(raw.years_of_experience) {
        Ok(years) => Some(years),
        Err(message) => {
            errors.push(FieldError {
                field: "years_of_experience",
                message,
            });
            None
        }
    };
    check_text_len("desired_position", &raw.desired_position, &mut errors);
    check_text_len("current_location", &raw.current_location, &mut errors);
    let tech_stack = raw.tech_stack.trim();
    // Separators alone (",", " , , ") leave nothing to store.
    if split_tech_stack(tech_stack).is_empty() {
        errors.push(FieldError {
            field: "tech_stack",
            message: "Tech stack cannot be empty".to_string(),
        });
    }

    match years {
        Some(years_of_experience) if errors.is_empty() => Ok(CandidateSubmission {
            name: raw.name.clone(),
            email: raw.email.clone(),
            phone_number: raw.phone_number.clone(),
            years_of_experience,
            desired_position: raw.desired_position.clone(),
            current_location: raw.current_location.clone(),
            tech_stack: tech_stack.to_string(),
        }),
        _ => Err(ValidationErrors { errors }),
    }
}

fn check_text_len(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    let len = value.chars().count();
    if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&len) {
        errors.push(FieldError {
            field,
            message: format!(
                "Must be between {MIN_TEXT_LEN} and {MAX_TEXT_LEN} characters (got {len})"
            ),
        });
    }
}

fn check_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("This field is required".to_string());
    }
    if EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}

pub fn check_phone(phone: &str) -> Result<(), String> {
    if phone.trim().is_empty() {
        return Err("This field is required".to_string());
    }
    if PHONE_PATTERN.is_match(phone) {
        Ok(())
    } else {
        Err("Invalid phone number format".to_string())
    }
}

fn check_years(years: Option<i64>) -> Result<i32, String> {
    match years {
        None => Err("Must be a whole number".to_string()),
        Some(y) if (0..=MAX_YEARS_OF_EXPERIENCE).contains(&y) => Ok(y as i32),
        Some(_) => Err(format!(
            "Must be between 0 and {MAX_YEARS_OF_EXPERIENCE}"
        )),
    }
}
