//! Assignment tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::courses::CourseIdParams;
use crate::canvas::{AssignmentFields, CanvasClient, CanvasResult};
use crate::domains::tools::CanvasTool;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListAssignmentsParams {
    /// ID of the course.
    pub course_id: u64,

    /// Embed the current user's submission in each assignment.
    #[serde(default)]
    pub include_submissions: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAssignmentParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the assignment.
    pub assignment_id: u64,

    /// Embed the current user's submission.
    #[serde(default)]
    pub include_submission: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAssignmentParams {
    /// ID of the course.
    pub course_id: u64,

    /// Name of the assignment.
    pub name: String,

    /// Description (HTML).
    #[serde(default)]
    pub description: Option<String>,

    /// Due date (ISO 8601).
    #[serde(default)]
    pub due_at: Option<String>,

    /// Maximum points.
    #[serde(default)]
    pub points_possible: Option<f64>,

    /// Accepted submission types.
    #[serde(default)]
    pub submission_types: Option<Vec<String>>,

    /// Publish immediately.
    #[serde(default)]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateAssignmentParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the assignment.
    pub assignment_id: u64,

    /// Fields to change; unset fields are left as they are.
    #[serde(flatten)]
    pub fields: AssignmentFields,
}

pub struct ListAssignmentsTool;

#[async_trait]
impl CanvasTool for ListAssignmentsTool {
    const NAME: &'static str = "canvas_list_assignments";
    const DESCRIPTION: &'static str = "List assignments in a course, ordered by due date.";
    type Params = ListAssignmentsParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .list_assignments(params.course_id, params.include_submissions)
            .await
    }
}

pub struct GetAssignmentTool;

#[async_trait]
impl CanvasTool for GetAssignmentTool {
    const NAME: &'static str = "canvas_get_assignment";
    const DESCRIPTION: &'static str = "Get details of an assignment.";
    type Params = GetAssignmentParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .get_assignment(params.course_id, params.assignment_id, params.include_submission)
            .await
    }
}

pub struct CreateAssignmentTool;

#[async_trait]
impl CanvasTool for CreateAssignmentTool {
    const NAME: &'static str = "canvas_create_assignment";
    const DESCRIPTION: &'static str = "Create a new assignment in a course.";
    type Params = CreateAssignmentParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        let fields = AssignmentFields {
            name: Some(params.name),
            description: params.description,
            due_at: params.due_at,
            points_possible: params.points_possible,
            submission_types: params.submission_types,
            published: params.published,
        };
        client.create_assignment(params.course_id, &fields).await
    }
}

pub struct UpdateAssignmentTool;

#[async_trait]
impl CanvasTool for UpdateAssignmentTool {
    const NAME: &'static str = "canvas_update_assignment";
    const DESCRIPTION: &'static str = "Update an existing assignment.";
    type Params = UpdateAssignmentParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .update_assignment(params.course_id, params.assignment_id, &params.fields)
            .await
    }
}

pub struct ListAssignmentGroupsTool;

#[async_trait]
impl CanvasTool for ListAssignmentGroupsTool {
    const NAME: &'static str = "canvas_list_assignment_groups";
    const DESCRIPTION: &'static str = "List assignment groups of a course with their assignments.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_assignment_groups(params.course_id).await
    }
}

pub struct ListRubricsTool;

#[async_trait]
impl CanvasTool for ListRubricsTool {
    const NAME: &'static str = "canvas_list_rubrics";
    const DESCRIPTION: &'static str = "List rubrics of a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_rubrics(params.course_id).await
    }
}
