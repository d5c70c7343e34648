//! Resource accessors.
//!
//! Each submodule adds methods to [`CanvasClient`](super::CanvasClient) for
//! one area of the Canvas API. Accessors only shape requests (path, query,
//! body envelope); retries and pagination come from the client.
//!
//! Composite accessors in [`reports`] fan out to several endpoints. Bulk
//! enrichment reads tolerate per-entity failures and record them as `null`.

mod analytics;
mod assignments;
mod calendar;
mod content;
mod conversations;
mod courses;
mod discussions;
mod modules;
mod quizzes;
pub mod reports;
mod submissions;
mod users;

pub use assignments::AssignmentFields;
pub use courses::CourseFields;
pub use reports::{DateBound, ScoreSummary};
pub use submissions::{NewSubmission, SubmissionType};
pub use users::EnrollmentRole;
