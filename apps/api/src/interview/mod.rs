// Interview question generation: prompt rendering, the validate → render →
// complete → persist pipeline, and the JSON API handlers.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
