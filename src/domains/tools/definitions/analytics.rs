//! Analytics and report tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::courses::CourseIdParams;
use super::submissions::AssignmentRefParams;
use crate::canvas::{CanvasClient, CanvasResult};
use crate::domains::tools::CanvasTool;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct StudentRefParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the student.
    pub student_id: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubmissionRangeParams {
    /// ID of the course.
    pub course_id: u64,

    /// Window start (YYYY-MM-DD or RFC 3339).
    pub start_date: String,

    /// Window end, inclusive (YYYY-MM-DD or RFC 3339).
    pub end_date: String,
}

pub struct GetCourseActivityTool;

#[async_trait]
impl CanvasTool for GetCourseActivityTool {
    const NAME: &'static str = "canvas_get_course_activity";
    const DESCRIPTION: &'static str = "Get daily page views and participations for a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_course_activity(params.course_id).await
    }
}

pub struct GetStudentSummariesTool;

#[async_trait]
impl CanvasTool for GetStudentSummariesTool {
    const NAME: &'static str = "canvas_get_student_summaries";
    const DESCRIPTION: &'static str = "Get per-student activity and tardiness summaries for a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_student_summaries(params.course_id).await
    }
}

pub struct GetStudentActivityTool;

#[async_trait]
impl CanvasTool for GetStudentActivityTool {
    const NAME: &'static str = "canvas_get_student_activity";
    const DESCRIPTION: &'static str = "Get page views and participations of one student in a course.";
    type Params = StudentRefParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .get_student_activity(params.course_id, params.student_id)
            .await
    }
}

pub struct GetRosterWithActivityTool;

#[async_trait]
impl CanvasTool for GetRosterWithActivityTool {
    const NAME: &'static str = "canvas_get_roster_with_activity";
    const DESCRIPTION: &'static str = "List students of a course with each student's activity. Students whose activity cannot be fetched get a null activity.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_roster_with_activity(params.course_id).await
    }
}

pub struct GetStudentProgressTool;

#[async_trait]
impl CanvasTool for GetStudentProgressTool {
    const NAME: &'static str = "canvas_get_student_progress";
    const DESCRIPTION: &'static str = "Count submitted, on-time, late and missing assignments for every student of a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_student_progress(params.course_id).await
    }
}

pub struct ListSubmissionsInRangeTool;

#[async_trait]
impl CanvasTool for ListSubmissionsInRangeTool {
    const NAME: &'static str = "canvas_list_submissions_in_range";
    const DESCRIPTION: &'static str = "List course submissions submitted between two dates (end date inclusive).";
    type Params = SubmissionRangeParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .list_submissions_in_range(params.course_id, &params.start_date, &params.end_date)
            .await
    }
}

pub struct GetAssignmentStatisticsTool;

#[async_trait]
impl CanvasTool for GetAssignmentStatisticsTool {
    const NAME: &'static str = "canvas_get_assignment_statistics";
    const DESCRIPTION: &'static str = "Submission counts and score statistics (mean, median, min, max) for an assignment.";
    type Params = AssignmentRefParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .get_assignment_statistics(params.course_id, params.assignment_id)
            .await
    }
}
