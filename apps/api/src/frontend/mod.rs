//! Interactive form front end — same pipeline as the JSON API, rendered as HTML.

pub mod page;
pub mod session;

use axum::{extract::State, http::StatusCode, response::Html, Form};

use crate::frontend::page::{render_page, status_for};
use crate::frontend::session::{submit, CandidateForm, FormSession};
use crate::state::AppState;

fn respond(session: &FormSession) -> (StatusCode, Html<String>) {
    (status_for(session), Html(render_page(session)))
}

/// GET /
pub async fn handle_form_page() -> (StatusCode, Html<String>) {
    respond(&FormSession::default())
}

/// POST /submit
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(form): Form<CandidateForm>,
) -> (StatusCode, Html<String>) {
    let session = submit(form, state.completer.as_ref(), state.store.as_ref()).await;
    respond(&session)
}

/// POST /reset
pub async fn handle_form_reset() -> (StatusCode, Html<String>) {
    respond(&FormSession::default().reset())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
        response::Response,
    };
    use tower::ServiceExt;

    use super::*;
    use crate::candidate::store::testing::MemoryCandidateStore;
    use crate::llm_client::testing::FakeCompleter;
    use crate::routes::build_form_router;

    const ASHA_FORM: &str = "name=Asha+Rao&email=asha%40example.com&phone_number=%2B91-9876543210\
        &years_of_experience=3&desired_position=Backend+Developer\
        &current_location=Pune%2C+India&tech_stack=Python%2C+Django%2C+PostgreSQL";

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn app(completer: FakeCompleter, store: Arc<MemoryCandidateStore>) -> axum::Router {
        build_form_router(AppState {
            completer: Arc::new(completer),
            store,
        })
    }

    #[tokio::test]
    async fn test_form_page_renders() {
        let app = app(
            FakeCompleter::replying("q"),
            Arc::new(MemoryCandidateStore::default()),
        );
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Generate Interview Questions"));
    }

    #[tokio::test]
    async fn test_form_submit_displays_generated_questions() {
        let store = Arc::new(MemoryCandidateStore::default());
        let app = app(
            FakeCompleter::replying("Question 1: How does Django's ORM batch queries?"),
            Arc::clone(&store),
        );

        let response = app.oneshot(post_form("/submit", ASHA_FORM)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Interview questions generated successfully!"));
        assert!(html.contains("How does Django&#39;s ORM batch queries?"));
        assert!(html.contains("value=\"Asha Rao\""));
        assert!(html.contains("Start New Interview"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_form_submit_with_bad_years_is_field_error() {
        let store = Arc::new(MemoryCandidateStore::default());
        let app = app(FakeCompleter::replying("q"), Arc::clone(&store));

        let body = ASHA_FORM.replace("years_of_experience=3", "years_of_experience=lots");
        let response = app.oneshot(post_form("/submit", &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let html = body_text(response).await;
        assert!(html.contains("Must be a whole number"));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_form_submit_separator_only_tech_stack_is_field_error() {
        let store = Arc::new(MemoryCandidateStore::default());
        let completer = FakeCompleter::replying("q");
        let body = ASHA_FORM.replace(
            "tech_stack=Python%2C+Django%2C+PostgreSQL",
            "tech_stack=+%2C+%2C+",
        );
        let app = app(completer, Arc::clone(&store));

        let response = app.oneshot(post_form("/submit", &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("Tech stack cannot be empty"));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_form_reset_clears_page() {
        let app = app(
            FakeCompleter::replying("q"),
            Arc::new(MemoryCandidateStore::default()),
        );
        let response = app.oneshot(post_form("/reset", "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!html.contains("Start New Interview"));
        assert!(html.contains("value=\"\""));
    }
}
