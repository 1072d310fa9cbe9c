//! Submission domain entities.

pub mod model;
pub mod status;
pub mod store;

pub use model::{CreateSubmission, Submission};
pub use status::SubmissionStatus;
pub use store::SubmissionStore;
