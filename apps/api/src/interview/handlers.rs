//! Axum route handlers for the programmatic API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::candidate::models::{RawSubmission, StoredCandidate};
use crate::errors::AppError;
use crate::interview::pipeline::run_interview;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateInterviewRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub years_of_experience: i64,
    pub desired_position: String,
    pub current_location: String,
    pub tech_stack: String,
}

impl From<GenerateInterviewRequest> for RawSubmission {
    fn from(req: GenerateInterviewRequest) -> Self {
        RawSubmission {
            name: req.name,
            email: req.email,
            phone_number: req.phone_number,
            years_of_experience: Some(req.years_of_experience),
            desired_position: req.desired_position,
            current_location: req.current_location,
            tech_stack: req.tech_stack,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateInterviewResponse {
    pub candidate_name: String,
    pub interview_questions: String,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<StoredCandidate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate-interview
///
/// Validates the candidate, generates questions and stores the record.
pub async fn handle_generate_interview(
    State(state): State<AppState>,
    Json(request): Json<GenerateInterviewRequest>,
) -> Result<Json<GenerateInterviewResponse>, AppError> {
    let raw = RawSubmission::from(request);
    let outcome = run_interview(&raw, state.completer.as_ref(), state.store.as_ref()).await?;

    Ok(Json(GenerateInterviewResponse {
        candidate_name: outcome.candidate.name,
        interview_questions: outcome.interview_questions,
    }))
}

/// GET /candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<CandidateListResponse>, AppError> {
    let candidates = state.store.list().await?;
    Ok(Json(CandidateListResponse { candidates }))
}
