//! Quiz tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::courses::CourseIdParams;
use crate::canvas::{CanvasClient, CanvasResult};
use crate::domains::tools::CanvasTool;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct QuizRefParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the quiz.
    pub quiz_id: u64,
}

pub struct ListQuizzesTool;

#[async_trait]
impl CanvasTool for ListQuizzesTool {
    const NAME: &'static str = "canvas_list_quizzes";
    const DESCRIPTION: &'static str = "List quizzes of a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_quizzes(params.course_id).await
    }
}

pub struct GetQuizTool;

#[async_trait]
impl CanvasTool for GetQuizTool {
    const NAME: &'static str = "canvas_get_quiz";
    const DESCRIPTION: &'static str = "Get details of a quiz.";
    type Params = QuizRefParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_quiz(params.course_id, params.quiz_id).await
    }
}
