// Prompt text for interview question generation, plus the copy shown on the form.

use crate::candidate::models::CandidateSubmission;

/// Interview prompt template.
/// Replace: {name}, {tech_stack}, {years_of_experience}, {desired_position}
pub const INTERVIEW_PROMPT_TEMPLATE: &str = r#"
You are a senior technical interviewer with 15 years of experience in {tech_stack}.
You are the tech lead of the company.

Your task is to ask the candidate 3-6 **relevant and non-repetitive** technical questions
based on their provided tech stack, years of experience, and the {desired_position} role.

- Cover programming languages, frameworks, databases, and tools from their {tech_stack}.
- Tailor questions to their {years_of_experience} years of experience level.
- If a listed tech stack is irrelevant to the {desired_position}, do not ask questions about it.
  Instead, politely inform the candidate that those skills are not relevant for this role.

After asking the questions, gracefully conclude by thanking the candidate
and informing them about the next steps.

Format:
Hello {name},

Question 1: ...
Question 2: ...
Question 3: ...
(optional more up to 6)

Thank you for your time, {name}. Our team will review your responses and get back to you with the next steps.
"#;

pub const GREETING_MESSAGE: &str = "Hello! I'm your AI Hiring Assistant. I'm here to help conduct your initial technical screening.\n\n\
I'll need to gather some basic information about you first, and then I'll ask you some technical questions based on your experience and tech stack.\n\n\
Let's get started!";

/// Per-field prompts, in form order. Shown as help text under each input.
pub const FIELD_PROMPTS: [(&str, &str); 7] = [
    ("name", "Could you please provide your full name?"),
    ("email", "Great! Now, what's your email address?"),
    ("phone_number", "Thank you! What's your phone number?"),
    (
        "years_of_experience",
        "How many years of professional experience do you have?",
    ),
    ("desired_position", "What position are you applying for?"),
    ("current_location", "Where are you currently located?"),
    (
        "tech_stack",
        "Please list your tech stack (programming languages, frameworks, databases, tools) separated by commas:",
    ),
];

pub fn field_prompt(field: &str) -> Option<&'static str> {
    FIELD_PROMPTS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, prompt)| *prompt)
}

/// The four fields the interview template consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterviewPromptContext<'a> {
    pub name: &'a str,
    pub tech_stack: &'a str,
    pub years_of_experience: i32,
    pub desired_position: &'a str,
}

impl<'a> From<&'a CandidateSubmission> for InterviewPromptContext<'a> {
    fn from(s: &'a CandidateSubmission) -> Self {
        Self {
            name: &s.name,
            tech_stack: &s.tech_stack,
            years_of_experience: s.years_of_experience,
            desired_position: &s.desired_position,
        }
    }
}

/// Substitutes the context into the interview template. Pure: identical input
/// always yields identical output.
pub fn render_interview_prompt(ctx: &InterviewPromptContext<'_>) -> String {
    let years = ctx.years_of_experience.to_string();
    let mut out = String::with_capacity(INTERVIEW_PROMPT_TEMPLATE.len() + 128);
    let mut rest = INTERVIEW_PROMPT_TEMPLATE;

    // Single pass over the template, so braces inside candidate input stay literal.
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };
        let value = match &tail[1..end] {
            "name" => Some(ctx.name),
            "tech_stack" => Some(ctx.tech_stack),
            "years_of_experience" => Some(years.as_str()),
            "desired_position" => Some(ctx.desired_position),
            _ => None,
        };
        match value {
            Some(v) => {
                out.push_str(v);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> InterviewPromptContext<'static> {
        InterviewPromptContext {
            name: "Asha Rao",
            tech_stack: "Python, Django, PostgreSQL",
            years_of_experience: 3,
            desired_position: "Backend Developer",
        }
    }

    #[test]
    fn test_render_substitutes_every_placeholder() {
        let prompt = render_interview_prompt(&ctx());
        assert!(prompt.contains("Hello Asha Rao,"));
        assert!(prompt.contains("Thank you for your time, Asha Rao."));
        assert!(prompt.contains("15 years of experience in Python, Django, PostgreSQL."));
        assert!(prompt.contains("the Backend Developer role"));
        assert!(prompt.contains("their 3 years of experience level"));
        assert!(!prompt.contains('{'), "unreplaced placeholder in:\n{prompt}");
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_interview_prompt(&ctx()), render_interview_prompt(&ctx()));
    }

    #[test]
    fn test_braces_in_input_stay_literal() {
        let prompt = render_interview_prompt(&InterviewPromptContext {
            tech_stack: "{name}",
            ..ctx()
        });
        assert!(prompt.contains("experience in {name}."));
        assert!(prompt.contains("Hello Asha Rao,"));
    }

    #[test]
    fn test_field_prompts_cover_every_form_field() {
        for field in [
            "name",
            "email",
            "phone_number",
            "years_of_experience",
            "desired_position",
            "current_location",
            "tech_stack",
        ] {
            assert!(field_prompt(field).is_some(), "{field}");
        }
        assert!(field_prompt("unknown").is_none());
    }
}
