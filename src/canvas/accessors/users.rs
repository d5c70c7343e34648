use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::canvas::{CanvasClient, CanvasError, CanvasResult, Query};

/// Course enrollment roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum EnrollmentRole {
    #[default]
    StudentEnrollment,
    TeacherEnrollment,
    TaEnrollment,
    ObserverEnrollment,
    DesignerEnrollment,
}

/// A user path segment: `"self"` or a numeric Canvas user id.
pub(super) fn user_ref(user_id: &str) -> CanvasResult<&str> {
    let id = user_id.trim();
    if id == "self" || (!id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())) {
        Ok(id)
    } else {
        Err(CanvasError::invalid_argument(format!(
            "Invalid user id: '{}'",
            user_id
        )))
    }
}

impl CanvasClient {
    /// Students of a course, with their enrollments.
    pub async fn list_students(&self, course_id: u64) -> CanvasResult<Value> {
        let params = Query::paged()
            .push("enrollment_type[]", "student")
            .extend("include[]", ["enrollments", "email"]);
        self.get(&format!("/courses/{}/users", course_id), params).await
    }

    /// Enrollments of a course, optionally filtered by type (e.g. "StudentEnrollment").
    pub async fn list_enrollments(&self, course_id: u64, kind: Option<&str>) -> CanvasResult<Value> {
        let params = Query::paged().push_opt("type[]", kind);
        self.get(&format!("/courses/{}/enrollments", course_id), params)
            .await
    }

    pub async fn enroll_user(
        &self,
        course_id: u64,
        user_id: u64,
        role: EnrollmentRole,
        notify: bool,
    ) -> CanvasResult<Value> {
        let body = json!({
            "enrollment": {
                "user_id": user_id,
                "type": role,
                "enrollment_state": "active",
                "notify": notify,
            }
        });
        self.post(&format!("/courses/{}/enrollments", course_id), body)
            .await
    }

    /// Profile of a user; `user_id` may be `"self"`.
    pub async fn get_user_profile(&self, user_id: &str) -> CanvasResult<Value> {
        let user = user_ref(user_id)?;
        self.get(&format!("/users/{}/profile", user), Query::new())
            .await
    }

    /// The current user's grades in a course (from their enrollment).
    pub async fn get_course_grades(&self, course_id: u64) -> CanvasResult<Value> {
        let params = Query::paged().push("user_id", "self").push("include[]", "grades");
        self.get(&format!("/courses/{}/enrollments", course_id), params)
            .await
    }
}
