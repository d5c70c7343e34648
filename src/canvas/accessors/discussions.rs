use serde_json::{Value, json};

use crate::canvas::{CanvasClient, CanvasResult, Query};

impl CanvasClient {
    pub async fn list_discussion_topics(&self, course_id: u64) -> CanvasResult<Value> {
        self.get(
            &format!("/courses/{}/discussion_topics", course_id),
            Query::paged(),
        )
        .await
    }

    pub async fn get_discussion_topic(&self, course_id: u64, topic_id: u64) -> CanvasResult<Value> {
        self.get(
            &format!("/courses/{}/discussion_topics/{}", course_id, topic_id),
            Query::new(),
        )
        .await
    }

    /// Post a top-level entry to a discussion topic.
    pub async fn post_to_discussion(&self, course_id: u64, topic_id: u64, message: &str) -> CanvasResult<Value> {
        self.post(
            &format!("/courses/{}/discussion_topics/{}/entries", course_id, topic_id),
            json!({ "message": message }),
        )
        .await
    }

    pub async fn list_announcements(&self, course_id: u64) -> CanvasResult<Value> {
        let params = Query::paged().push("context_codes[]", format!("course_{}", course_id));
        self.get("/announcements", params).await
    }

    /// Announcements are discussion topics flagged `is_announcement`.
    pub async fn create_announcement(&self, course_id: u64, title: &str, message: &str) -> CanvasResult<Value> {
        self.post(
            &format!("/courses/{}/discussion_topics", course_id),
            json!({ "title": title, "message": message, "is_announcement": true }),
        )
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
    async fn test_announcements_use_context_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/announcements"))
            .and(query_param("context_codes[]", "course_12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let list = client(&server).list_announcements(12).await.unwrap();
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_create_announcement_flags_topic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/courses/12/discussion_topics"))
            .and(body_json(json!({ "title": "Exam", "message": "Friday", "is_announcement": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 3 })))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .create_announcement(12, "Exam", "Friday")
            .await
            .unwrap();
    }
}
