//! Interview pipeline — shared by the JSON API and the interactive form.
//!
//! Flow: validate → render prompt → completion call → persist record → return.
//!
//! Persistence runs after the completion call, so an oracle failure leaves no
//! stored record. A store failure discards the generated text.

use tracing::info;

use crate::candidate::models::{CandidateSubmission, RawSubmission};
use crate::candidate::store::CandidateStore;
use crate::candidate::validation::validate_submission;
use crate::errors::AppError;
use crate::interview::prompts::{render_interview_prompt, InterviewPromptContext};
use crate::llm_client::Completer;

/// Result of one successful pass through the pipeline.
#[derive(Debug, Clone)]
pub struct InterviewOutcome {
    pub candidate: CandidateSubmission,
    /// Passed through from the completion oracle unmodified.
    pub interview_questions: String,
}

pub async fn run_interview(
    raw: &RawSubmission,
    completer: &dyn Completer,
    store: &dyn CandidateStore,
) -> Result<InterviewOutcome, AppError> {
    // Step 1: Validate — nothing external happens for a rejected submission
    let candidate = validate_submission(raw)?;
    info!(
        "Generating interview questions for '{}' ({})",
        candidate.name, candidate.desired_position
    );

    // Step 2: Render
    let prompt = render_interview_prompt(&InterviewPromptContext::from(&candidate));

    // Step 3: Complete
    let interview_questions = completer.complete(&prompt).await?;

    // Step 4: Persist
    let candidate_id = store.save(&candidate.to_record()).await?;
    info!("Stored candidate {candidate_id} for '{}'", candidate.name);

    Ok(InterviewOutcome {
        candidate,
        interview_questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::store::testing::MemoryCandidateStore;
    use crate::llm_client::testing::FakeCompleter;

    fn asha() -> RawSubmission {
        RawSubmission {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: "+91-9876543210".to_string(),
            years_of_experience: Some(3),
            desired_position: "Backend Developer".to_string(),
            current_location: "Pune, India".to_string(),
            tech_stack: "Python, Django, PostgreSQL".to_string(),
        }
    }

    #[tokio::test]
    async fn test_end_to_end_success() {
        let completer = FakeCompleter::replying("Hello Asha Rao,\n\nQuestion 1: ...");
        let store = MemoryCandidateStore::default();

        let outcome = run_interview(&asha(), &completer, &store).await.unwrap();
        assert_eq!(outcome.interview_questions, "Hello Asha Rao,\n\nQuestion 1: ...");
        assert_eq!(outcome.candidate.name, "Asha Rao");

        let prompt = completer.last_prompt().unwrap();
        for needle in ["Asha Rao", "Backend Developer", "3", "Python, Django, PostgreSQL"] {
            assert!(prompt.contains(needle), "prompt missing {needle}");
        }

        let stored = store.list().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].record.tech_stack, vec!["Python", "Django", "PostgreSQL"]);
        assert_eq!(stored[0].record.current_location, "Pune, India");
    }

    #[tokio::test]
    async fn test_invalid_submission_makes_no_external_calls() {
        let completer = FakeCompleter::replying("unused");
        let store = MemoryCandidateStore::default();
        let raw = RawSubmission {
            phone_number: "abcdefg".to_string(),
            ..asha()
        };

        let err = run_interview(&raw, &completer, &store).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref e) if e.message_for("phone_number").is_some()));
        assert!(completer.last_prompt().is_none());
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_oracle_failure_persists_nothing() {
        let completer = FakeCompleter::failing("request timed out");
        let store = MemoryCandidateStore::default();

        let err = run_interview(&asha(), &completer, &store).await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
        assert!(err.to_string().contains("request timed out"));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_after_completion_is_an_error() {
        let completer = FakeCompleter::replying("Question 1: ...");
        let store = MemoryCandidateStore::failing();

        let err = run_interview(&asha(), &completer, &store).await.unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
        assert!(completer.last_prompt().is_some());
    }
}
