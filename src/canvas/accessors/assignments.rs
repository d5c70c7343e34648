use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::canvas::{CanvasClient, CanvasResult, Query};

/// Writable assignment attributes, sent inside an `{"assignment": ...}` envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AssignmentFields {
    /// Assignment name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Description (HTML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Due date (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<String>,

    /// Maximum points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_possible: Option<f64>,

    /// Accepted submission types (e.g. "online_text_entry", "online_upload").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_types: Option<Vec<String>>,

    /// Publish immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

impl CanvasClient {
    pub async fn list_assignments(&self, course_id: u64, include_submissions: bool) -> CanvasResult<Value> {
        let params = Query::paged()
            .push("order_by", "due_at")
            .push_if(include_submissions, "include[]", "submission");
        self.get(&format!("/courses/{}/assignments", course_id), params)
            .await
    }

    pub async fn get_assignment(
        &self,
        course_id: u64,
        assignment_id: u64,
        include_submission: bool,
    ) -> CanvasResult<Value> {
        let params = Query::new().push_if(include_submission, "include[]", "submission");
        self.get(
            &format!("/courses/{}/assignments/{}", course_id, assignment_id),
            params,
        )
        .await
    }

    pub async fn create_assignment(&self, course_id: u64, fields: &AssignmentFields) -> CanvasResult<Value> {
        self.post(
            &format!("/courses/{}/assignments", course_id),
            json!({ "assignment": fields }),
        )
        .await
    }

    pub async fn update_assignment(
        &self,
        course_id: u64,
        assignment_id: u64,
        fields: &AssignmentFields,
    ) -> CanvasResult<Value> {
        self.put(
            &format!("/courses/{}/assignments/{}", course_id, assignment_id),
            json!({ "assignment": fields }),
        )
        .await
    }

    /// Assignment groups with their assignments embedded.
    pub async fn list_assignment_groups(&self, course_id: u64) -> CanvasResult<Value> {
        let params = Query::paged().push("include[]", "assignments");
        self.get(&format!("/courses/{}/assignment_groups", course_id), params)
            .await
    }

    pub async fn list_rubrics(&self, course_id: u64) -> CanvasResult<Value> {
        self.get(&format!("/courses/{}/rubrics", course_id), Query::paged())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ClientOptions;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CanvasClient {
        CanvasClient::with_base_url(format!("{}/api/v1", server.uri()), "token", ClientOptions::default())
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_assignments_with_submissions() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/3/assignments"))
            .and(query_param("include[]", "submission"))
            .and(query_param("order_by", "due_at"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 10 }])))
            .expect(1)
            .mount(&server)
            .await;

        let list = client(&server).list_assignments(3, true).await.unwrap();
        assert_eq!(list[0]["id"], 10);
    }

    #[tokio::test]
    async fn test_update_assignment_sends_only_set_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/courses/3/assignments/10"))
            .and(body_json(json!({ "assignment": { "points_possible": 50.0, "published": true } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 10 })))
            .expect(1)
            .mount(&server)
            .await;

        let fields = AssignmentFields {
            points_possible: Some(50.0),
            published: Some(true),
            ..Default::default()
        };
        client(&server).update_assignment(3, 10, &fields).await.unwrap();
    }
}
