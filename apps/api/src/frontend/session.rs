//! Per-session context for the interactive form.
//!
//! The server keeps nothing between requests: `submit` builds a `FormSession`
//! from the posted form, returns it, and the handler renders it into the page.

use serde::Deserialize;

use crate::candidate::models::RawSubmission;
use crate::candidate::store::CandidateStore;
use crate::candidate::validation::ValidationErrors;
use crate::errors::AppError;
use crate::interview::pipeline::run_interview;
use crate::llm_client::Completer;

/// Form fields as posted by the browser. Everything arrives as text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CandidateForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub years_of_experience: String,
    pub desired_position: String,
    pub current_location: String,
    pub tech_stack: String,
}

impl CandidateForm {
    pub fn to_raw(&self) -> RawSubmission {
        RawSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            years_of_experience: self.years_of_experience.trim().parse().ok(),
            desired_position: self.desired_position.clone(),
            current_location: self.current_location.clone(),
            tech_stack: self.tech_stack.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum FormResult {
    Generated { summary: String, questions: String },
    Invalid(ValidationErrors),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct FormSession {
    /// Values of the last submission, re-displayed in the form.
    pub last_submission: Option<CandidateForm>,
    pub questions_generated: bool,
    pub result: Option<FormResult>,
}

impl FormSession {
    /// Clears everything shown on the page.
    pub fn reset(self) -> Self {
        Self::default()
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match &self.result {
            Some(FormResult::Invalid(errors)) => Some(errors),
            _ => None,
        }
    }
}

/// Runs one form submission through the interview pipeline and returns the
/// session describing it.
pub async fn submit(
    form: CandidateForm,
    completer: &dyn Completer,
    store: &dyn CandidateStore,
) -> FormSession {
    let outcome = run_interview(&form.to_raw(), completer, store).await;

    let (questions_generated, result) = match outcome {
        Ok(outcome) => (
            true,
            FormResult::Generated {
                summary: outcome.candidate.summary(),
                questions: outcome.interview_questions,
            },
        ),
        Err(AppError::Validation(errors)) => (false, FormResult::Invalid(errors)),
        Err(e) => {
            tracing::error!("Form submission failed: {e}");
            (false, FormResult::Failed(e.public_message()))
        }
    };

    FormSession {
        last_submission: Some(form),
        questions_generated,
        result: Some(result),
    }
}
