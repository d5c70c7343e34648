use serde_json::{Value, json};

use crate::canvas::{CanvasClient, CanvasError, CanvasResult, Query};

impl CanvasClient {
    /// Inbox conversations; `scope` is one of "unread", "starred", "archived", "sent".
    pub async fn list_conversations(&self, scope: Option<&str>) -> CanvasResult<Value> {
        self.get("/conversations", Query::paged().push_opt("scope", scope))
            .await
    }

    pub async fn create_conversation(&self, recipients: &[String], subject: &str, body: &str) -> CanvasResult<Value> {
        if recipients.is_empty() {
            return Err(CanvasError::invalid_argument(
                "At least one recipient is required",
            ));
        }
        self.post(
            "/conversations",
            json!({ "recipients": recipients, "subject": subject, "body": body }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ClientOptions;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CanvasClient {
        CanvasClient::with_base_url(format!("{}/api/v1", server.uri()), "token", ClientOptions::default())
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_conversation_requires_recipients() {
        let server = MockServer::start().await;
        let err = client(&server)
            .create_conversation(&[], "Hello", "Body")
            .await
            .unwrap_err();
        assert!(matches!(err, CanvasError::InvalidArgument(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_conversation_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/conversations"))
            .and(body_json(json!({
                "recipients": ["12", "group_3"],
                "subject": "Project",
                "body": "Meeting at noon"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([{ "id": 99 }])))
            .expect(1)
            .mount(&server)
            .await;

        let created = client(&server)
            .create_conversation(&["12".to_string(), "group_3".to_string()], "Project", "Meeting at noon")
            .await
            .unwrap();
        assert_eq!(created[0]["id"], 99);
    }
}
