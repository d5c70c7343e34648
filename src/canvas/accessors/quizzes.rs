use serde_json::Value;

use crate::canvas::{CanvasClient, CanvasResult, Query};

impl CanvasClient {
    pub async fn list_quizzes(&self, course_id: u64) -> CanvasResult<Value> {
        self.get(&format!("/courses/{}/quizzes", course_id), Query::paged())
            .await
    }

    pub async fn get_quiz(&self, course_id: u64, quiz_id: u64) -> CanvasResult<Value> {
        self.get(
            &format!("/courses/{}/quizzes/{}", course_id, quiz_id),
            Query::new(),
        )
        .await
    }
}
