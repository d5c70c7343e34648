use serde_json::Value;

use crate::canvas::{CanvasClient, CanvasResult, Query};

impl CanvasClient {
    /// Daily page views and participations for a course.
    pub async fn get_course_activity(&self, course_id: u64) -> CanvasResult<Value> {
        self.get(
            &format!("/courses/{}/analytics/activity", course_id),
            Query::new(),
        )
        .await
    }

    pub async fn get_student_summaries(&self, course_id: u64) -> CanvasResult<Value> {
        self.get(
            &format!("/courses/{}/analytics/student_summaries", course_id),
            Query::paged(),
        )
        .await
    }

    pub async fn get_student_activity(&self, course_id: u64, student_id: u64) -> CanvasResult<Value> {
        self.get(
            &format!("/courses/{}/analytics/users/{}/activity", course_id, student_id),
            Query::new(),
        )
        .await
    }

    /// Per-assignment status (`on_time`, `late`, `missing`, `floating`) for one student.
    pub async fn get_student_assignment_data(&self, course_id: u64, student_id: u64) -> CanvasResult<Value> {
        self.get(
            &format!("/courses/{}/analytics/users/{}/assignments", course_id, student_id),
            Query::new(),
        )
        .await
    }
}
