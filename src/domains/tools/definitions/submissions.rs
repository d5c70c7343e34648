//! Submission and grading tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::canvas::{CanvasClient, CanvasResult, NewSubmission};
use crate::domains::tools::CanvasTool;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AssignmentRefParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the assignment.
    pub assignment_id: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSubmissionParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the assignment.
    pub assignment_id: u64,

    /// User ID, or "self" for the current user.
    #[serde(default = "default_self")]
    pub user_id: String,
}

fn default_self() -> String {
    "self".to_string()
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubmitGradeParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the assignment.
    pub assignment_id: u64,

    /// ID of the student.
    pub user_id: u64,

    /// Grade to post (points, percentage, or letter grade).
    pub grade: String,

    /// Optional comment for the student.
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubmitAssignmentParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the assignment.
    pub assignment_id: u64,

    #[serde(flatten)]
    pub submission: NewSubmission,
}

pub struct ListSubmissionsTool;

#[async_trait]
impl CanvasTool for ListSubmissionsTool {
    const NAME: &'static str = "canvas_list_submissions";
    const DESCRIPTION: &'static str = "List all submissions for an assignment.";
    type Params = AssignmentRefParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .list_submissions(params.course_id, params.assignment_id)
            .await
    }
}

pub struct GetSubmissionTool;

#[async_trait]
impl CanvasTool for GetSubmissionTool {
    const NAME: &'static str = "canvas_get_submission";
    const DESCRIPTION: &'static str = "Get one user's submission for an assignment, with comments.";
    type Params = GetSubmissionParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .get_submission(params.course_id, params.assignment_id, &params.user_id)
            .await
    }
}

pub struct SubmitGradeTool;

#[async_trait]
impl CanvasTool for SubmitGradeTool {
    const NAME: &'static str = "canvas_submit_grade";
    const DESCRIPTION: &'static str = "Grade a student's submission, optionally with a comment.";
    type Params = SubmitGradeParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .submit_grade(
                params.course_id,
                params.assignment_id,
                params.user_id,
                &params.grade,
                params.comment.as_deref(),
            )
            .await
    }
}

pub struct SubmitAssignmentTool;

#[async_trait]
impl CanvasTool for SubmitAssignmentTool {
    const NAME: &'static str = "canvas_submit_assignment";
    const DESCRIPTION: &'static str = "Submit work for an assignment as text, a URL, or uploaded files.";
    type Params = SubmitAssignmentParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .submit_assignment(params.course_id, params.assignment_id, &params.submission)
            .await
    }
}
