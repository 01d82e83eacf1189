//! Submission envelope types shared by the REST handlers, the store and the
//! notification formatters.

mod submission;

pub use submission::{ContactSubmission, RequestSubmission};
