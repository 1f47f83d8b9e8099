use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Candidate fields exactly as received from a front end, before validation.
///
/// `years_of_experience` is `None` when the front end could not read a whole
/// number out of the input (the form posts it as text).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSubmission {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub years_of_experience: Option<i64>,
    pub desired_position: String,
    pub current_location: String,
    pub tech_stack: String,
}

/// A submission that passed every field check. Only `validation::validate_submission`
/// constructs one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSubmission {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub years_of_experience: i32,
    pub desired_position: String,
    pub current_location: String,
    /// Trimmed, still comma-separated.
    pub tech_stack: String,
}

impl CandidateSubmission {
    /// Technologies in submission order, each trimmed. Empty segments
    /// (e.g. from a trailing comma) are dropped.
    pub fn tech_stack_items(&self) -> Vec<String> {
        split_tech_stack(&self.tech_stack)
    }

    /// Converts into the shape written to the document store.
    pub fn to_record(&self) -> CandidateRecord {
        CandidateRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            years_of_experience: self.years_of_experience,
            desired_position: self.desired_position.clone(),
            current_location: self.current_location.clone(),
            tech_stack: self.tech_stack_items(),
        }
    }

    /// Markdown-ish block shown back to the candidate after a successful submission.
    pub fn summary(&self) -> String {
        format!(
            "Candidate Information:\n\
             - Name: {}\n\
             - Email: {}\n\
             - Phone: {}\n\
             - Experience: {} years\n\
             - Position: {}\n\
             - Location: {}\n\
             - Tech Stack: {}\n",
            self.name,
            self.email,
            self.phone_number,
            self.years_of_experience,
            self.desired_position,
            self.current_location,
            self.tech_stack,
        )
    }
}

pub fn split_tech_stack(tech_stack: &str) -> Vec<String> {
    tech_stack
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Persisted candidate document. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CandidateRecord {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub years_of_experience: i32,
    pub desired_position: String,
    pub current_location: String,
    pub tech_stack: Vec<String>,
}

/// A record read back from the store together with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct StoredCandidate {
    pub id: Uuid,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub record: CandidateRecord,
}
