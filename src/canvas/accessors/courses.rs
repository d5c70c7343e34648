use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::canvas::{CanvasClient, CanvasResult, Query};

/// Writable course attributes, sent inside a `{"course": ...}` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CourseFields {
    /// Course name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short course code (e.g. "BIO-101").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,

    /// Start date (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_at: Option<String>,

    /// End date (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_at: Option<String>,

    /// License identifier (e.g. "private", "cc_by").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Whether the course is publicly visible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    /// Syllabus HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syllabus_body: Option<String>,
}

impl CanvasClient {
    /// Courses of the current user. Only active enrollments unless `include_ended`.
    pub async fn list_courses(&self, include_ended: bool) -> CanvasResult<Value> {
        let params = Query::paged()
            .extend("include[]", ["term", "total_students"])
            .push_if(!include_ended, "enrollment_state", "active");
        self.get("/courses", params).await
    }

    pub async fn get_course(&self, course_id: u64) -> CanvasResult<Value> {
        let params = Query::new().extend("include[]", ["term", "syllabus_body", "total_students"]);
        self.get(&format!("/courses/{}", course_id), params).await
    }

    pub async fn create_course(&self, account_id: u64, fields: &CourseFields) -> CanvasResult<Value> {
        self.post(
            &format!("/accounts/{}/courses", account_id),
            json!({ "course": fields }),
        )
        .await
    }

    pub async fn update_course(&self, course_id: u64, fields: &CourseFields) -> CanvasResult<Value> {
        self.put(&format!("/courses/{}", course_id), json!({ "course": fields }))
            .await
    }

    /// Syllabus of a course, trimmed to `{course_id, name, syllabus_body}`.
    pub async fn get_syllabus(&self, course_id: u64) -> CanvasResult<Value> {
        let params = Query::new().push("include[]", "syllabus_body");
        let course = self.get(&format!("/courses/{}", course_id), params).await?;
        Ok(json!({
            "course_id": course_id,
            "name": course.get("name").cloned().unwrap_or(Value::Null),
            "syllabus_body": course.get("syllabus_body").cloned().unwrap_or(Value::Null),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ClientOptions;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CanvasClient {
        CanvasClient::with_base_url(
            format!("{}/api/v1", server.uri()),
            "token",
            ClientOptions {
                max_retries: 0,
                ..ClientOptions::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn test_course_fields_skip_unset() {
        let fields = CourseFields {
            name: Some("Biology".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&fields).unwrap(), json!({ "name": "Biology" }));
    }

    #[tokio::test]
    async fn test_list_courses_active_only_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses"))
            .and(query_param("enrollment_state", "active"))
            .and(query_param("per_page", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
            .expect(1)
            .mount(&server)
            .await;

        let courses = client(&server).list_courses(false).await.unwrap();
        assert_eq!(courses, json!([{ "id": 1 }]));
    }

    #[tokio::test]
    async fn test_create_course_wraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/accounts/1/courses"))
            .and(body_json(json!({ "course": { "name": "Chemistry", "course_code": "CHEM" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 9 })))
            .expect(1)
            .mount(&server)
            .await;

        let fields = CourseFields {
            name: Some("Chemistry".into()),
            course_code: Some("CHEM".into()),
            ..Default::default()
        };
        let course = client(&server).create_course(1, &fields).await.unwrap();
        assert_eq!(course["id"], 9);
    }

    #[tokio::test]
    async fn test_get_syllabus_trims_course() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({ "id": 5, "name": "Art", "syllabus_body": "<p>Hi</p>", "term": {} }),
            ))
            .mount(&server)
            .await;

        let syllabus = client(&server).get_syllabus(5).await.unwrap();
        assert_eq!(
            syllabus,
            json!({ "course_id": 5, "name": "Art", "syllabus_body": "<p>Hi</p>" })
        );
    }
}
