//! People and enrollment tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::courses::CourseIdParams;
use crate::canvas::{CanvasClient, CanvasResult, EnrollmentRole};
use crate::domains::tools::CanvasTool;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListEnrollmentsParams {
    /// ID of the course.
    pub course_id: u64,

    /// Enrollment type filter (e.g. "StudentEnrollment").
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EnrollUserParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the user to enroll.
    pub user_id: u64,

    /// Enrollment role.
    #[serde(default)]
    pub role: EnrollmentRole,

    /// Send an enrollment notification to the user.
    #[serde(default)]
    pub notify: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserProfileParams {
    /// User ID, or "self" for the current user.
    #[serde(default = "default_self")]
    pub user_id: String,
}

fn default_self() -> String {
    "self".to_string()
}

pub struct ListStudentsTool;

#[async_trait]
impl CanvasTool for ListStudentsTool {
    const NAME: &'static str = "canvas_list_students";
    const DESCRIPTION: &'static str = "List students enrolled in a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_students(params.course_id).await
    }
}

pub struct ListEnrollmentsTool;

#[async_trait]
impl CanvasTool for ListEnrollmentsTool {
    const NAME: &'static str = "canvas_list_enrollments";
    const DESCRIPTION: &'static str = "List enrollments of a course, optionally filtered by type.";
    type Params = ListEnrollmentsParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .list_enrollments(params.course_id, params.kind.as_deref())
            .await
    }
}

pub struct EnrollUserTool;

#[async_trait]
impl CanvasTool for EnrollUserTool {
    const NAME: &'static str = "canvas_enroll_user";
    const DESCRIPTION: &'static str = "Enroll a user in a course with a given role.";
    type Params = EnrollUserParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .enroll_user(params.course_id, params.user_id, params.role, params.notify)
            .await
    }
}

pub struct GetUserProfileTool;

#[async_trait]
impl CanvasTool for GetUserProfileTool {
    const NAME: &'static str = "canvas_get_user_profile";
    const DESCRIPTION: &'static str = "Get a user's profile (the current user by default).";
    type Params = UserProfileParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_user_profile(&params.user_id).await
    }
}

pub struct GetCourseGradesTool;

#[async_trait]
impl CanvasTool for GetCourseGradesTool {
    const NAME: &'static str = "canvas_get_course_grades";
    const DESCRIPTION: &'static str = "Get the current user's grades in a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_course_grades(params.course_id).await
    }
}
