// HTML rendering for the interactive form. All user-supplied text goes through `escape`.

use axum::http::StatusCode;

use crate::frontend::session::{CandidateForm, FormResult, FormSession};
use crate::interview::prompts::{field_prompt, GREETING_MESSAGE};

const STYLE: &str = "body{font-family:sans-serif;max-width:720px;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem;font-weight:bold}\
input,textarea{width:100%;padding:.4rem;box-sizing:border-box}\
.help{color:#666;font-size:.85rem}.field-error{color:#b00020;font-size:.85rem}\
.info{background:#e8f0fe;padding:1rem;white-space:pre-line}\
.success{background:#e6f4ea;padding:1rem}.error{background:#fce8e6;padding:1rem}\
pre{background:#f6f8fa;padding:1rem;white-space:pre-wrap}";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Status code matching what the session's last result says happened.
pub fn status_for(session: &FormSession) -> StatusCode {
    match session.result {
        Some(FormResult::Invalid(_)) => StatusCode::BAD_REQUEST,
        Some(FormResult::Failed(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::OK,
    }
}

pub fn render_page(session: &FormSession) -> String {
    let empty = CandidateForm {
        years_of_experience: "0".to_string(),
        ..Default::default()
    };
    let values = session.last_submission.as_ref().unwrap_or(&empty);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
    html.push_str("<title>AI Hiring Assistant</title>");
    html.push_str(&format!("<style>{STYLE}</style></head><body>"));
    html.push_str("<h1>AI Hiring Assistant</h1><hr>");
    html.push_str(&format!(
        "<div class=\"info\">{}</div>",
        escape(GREETING_MESSAGE)
    ));

    html.push_str("<form method=\"post\" action=\"/submit\"><h2>Candidate Information</h2>");
    html.push_str(&text_input(session, "name", "Full Name", &values.name, "John Doe", "text"));
    html.push_str(&text_input(
        session,
        "email",
        "Email",
        &values.email,
        "john@example.com",
        "email",
    ));
    html.push_str(&text_input(
        session,
        "phone_number",
        "Phone Number",
        &values.phone_number,
        "+91-1234567890",
        "tel",
    ));
    html.push_str(&text_input(
        session,
        "years_of_experience",
        "Years of Experience",
        &values.years_of_experience,
        "0",
        "number",
    ));
    html.push_str(&text_input(
        session,
        "desired_position",
        "Desired Position",
        &values.desired_position,
        "Backend Developer",
        "text",
    ));
    html.push_str(&text_input(
        session,
        "current_location",
        "Current Location",
        &values.current_location,
        "Delhi, India",
        "text",
    ));
    html.push_str(&format!(
        "<label for=\"tech_stack\">Tech Stack</label>\
         <textarea id=\"tech_stack\" name=\"tech_stack\" rows=\"3\" \
         placeholder=\"Python, Django, PostgreSQL, Docker\">{}</textarea>{}",
        escape(&values.tech_stack),
        field_notes(session, "tech_stack"),
    ));
    html.push_str("<p><button type=\"submit\">Generate Interview Questions</button></p></form>");

    match &session.result {
        Some(FormResult::Generated { summary, questions }) => {
            html.push_str(
                "<div class=\"success\">Interview questions generated successfully!</div>",
            );
            html.push_str(&format!("<pre>{}</pre><hr>", escape(summary)));
            html.push_str("<h2>Technical Interview Questions</h2>");
            html.push_str(&format!("<pre>{}</pre>", escape(questions)));
        }
        Some(FormResult::Invalid(_)) => {
            html.push_str(
                "<div class=\"error\">Please correct the highlighted fields.</div>",
            );
        }
        Some(FormResult::Failed(message)) => {
            html.push_str(&format!(
                "<div class=\"error\">Error: {}</div>",
                escape(message)
            ));
        }
        None => {}
    }

    if session.questions_generated {
        html.push_str(
            "<form method=\"post\" action=\"/reset\">\
             <button type=\"submit\">Start New Interview</button></form>",
        );
    }

    html.push_str("</body></html>");
    html
}

fn text_input(
    session: &FormSession,
    field: &str,
    label: &str,
    value: &str,
    placeholder: &str,
    input_type: &str,
) -> String {
    let bounds = if input_type == "number" {
        " min=\"0\" max=\"50\""
    } else {
        ""
    };
    format!(
        "<label for=\"{field}\">{label}</label>\
         <input id=\"{field}\" name=\"{field}\" type=\"{input_type}\"{bounds} \
         value=\"{}\" placeholder=\"{}\">{}",
        escape(value),
        escape(placeholder),
        field_notes(session, field),
    )
}

/// Help text for a field, plus its validation message if it failed.
fn field_notes(session: &FormSession, field: &str) -> String {
    let mut notes = String::new();
    if let Some(prompt) = field_prompt(field) {
        notes.push_str(&format!("<div class=\"help\">{}</div>", escape(prompt)));
    }
    if let Some(message) = session
        .validation_errors()
        .and_then(|errors| errors.message_for(field))
    {
        notes.push_str(&format!(
            "<div class=\"field-error\">{}</div>",
            escape(message)
        ));
    }
    notes
}
