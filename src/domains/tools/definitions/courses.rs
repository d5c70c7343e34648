//! Course tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::canvas::{CanvasClient, CanvasResult, CourseFields};
use crate::domains::tools::CanvasTool;

// ============================================================================
// Tool Parameters
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCoursesParams {
    /// Include courses from concluded enrollments.
    #[serde(default)]
    pub include_ended: bool,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CourseIdParams {
    /// ID of the course.
    pub course_id: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateCourseParams {
    /// ID of the account to create the course in.
    pub account_id: u64,

    /// Name of the course.
    pub name: String,

    /// Course code (e.g. "BIO-101").
    #[serde(default)]
    pub course_code: Option<String>,

    /// Start date (ISO 8601).
    #[serde(default)]
    pub start_at: Option<String>,

    /// End date (ISO 8601).
    #[serde(default)]
    pub end_at: Option<String>,

    /// License (e.g. "private", "cc_by").
    #[serde(default)]
    pub license: Option<String>,

    /// Whether the course is public.
    #[serde(default)]
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateCourseParams {
    /// ID of the course.
    pub course_id: u64,

    /// Fields to change; unset fields are left as they are.
    #[serde(flatten)]
    pub fields: CourseFields,
}

// ============================================================================
// Tool Definitions
// ============================================================================

pub struct ListCoursesTool;

#[async_trait]
impl CanvasTool for ListCoursesTool {
    const NAME: &'static str = "canvas_list_courses";
    const DESCRIPTION: &'static str = "List courses for the current user. Only active enrollments unless include_ended is set.";
    type Params = ListCoursesParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_courses(params.include_ended).await
    }
}

pub struct GetCourseTool;

#[async_trait]
impl CanvasTool for GetCourseTool {
    const NAME: &'static str = "canvas_get_course";
    const DESCRIPTION: &'static str = "Get details of a course, including term and syllabus.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_course(params.course_id).await
    }
}

pub struct CreateCourseTool;

#[async_trait]
impl CanvasTool for CreateCourseTool {
    const NAME: &'static str = "canvas_create_course";
    const DESCRIPTION: &'static str = "Create a new course in an account.";
    type Params = CreateCourseParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        let fields = CourseFields {
            name: Some(params.name),
            course_code: params.course_code,
            start_at: params.start_at,
            end_at: params.end_at,
            license: params.license,
            is_public: params.is_public,
            syllabus_body: None,
        };
        client.create_course(params.account_id, &fields).await
    }
}

pub struct UpdateCourseTool;

#[async_trait]
impl CanvasTool for UpdateCourseTool {
    const NAME: &'static str = "canvas_update_course";
    const DESCRIPTION: &'static str = "Update course attributes such as name, code, dates or syllabus.";
    type Params = UpdateCourseParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.update_course(params.course_id, &params.fields).await
    }
}

pub struct GetSyllabusTool;

#[async_trait]
impl CanvasTool for GetSyllabusTool {
    const NAME: &'static str = "canvas_get_syllabus";
    const DESCRIPTION: &'static str = "Get the syllabus of a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_syllabus(params.course_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_params_flatten_fields() {
        let params: UpdateCourseParams =
            serde_json::from_value(json!({ "course_id": 3, "name": "Renamed" })).unwrap();
        assert_eq!(params.course_id, 3);
        assert_eq!(params.fields.name.as_deref(), Some("Renamed"));
        assert!(params.fields.syllabus_body.is_none());
    }

    #[test]
    fn test_create_requires_name() {
        let result = serde_json::from_value::<CreateCourseParams>(json!({ "account_id": 1 }));
        assert!(result.is_err());
    }
}
