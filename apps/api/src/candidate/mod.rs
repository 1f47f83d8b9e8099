// Candidate data: input shapes, field validation and the document store.

pub mod models;
pub mod store;
pub mod validation;
