use serde_json::Value;

use crate::canvas::{CanvasClient, CanvasResult, Query};

impl CanvasClient {
    /// Calendar events, optionally scoped to a course and a date window.
    pub async fn list_calendar_events(
        &self,
        course_id: Option<u64>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> CanvasResult<Value> {
        let params = Query::paged()
            .push("type", "event")
            .push_opt("context_codes[]", course_id.map(|id| format!("course_{}", id)))
            .push_opt("start_date", start_date)
            .push_opt("end_date", end_date)
            .push_if(start_date.is_none() && end_date.is_none(), "all_events", true);
        self.get("/calendar_events", params).await
    }

    /// Upcoming events of the current user that are assignments.
    pub async fn get_upcoming_assignments(&self) -> CanvasResult<Value> {
        let events = self.get("/users/self/upcoming_events", Query::new()).await?;
        let assignments = match events {
            Value::Array(items) => items
                .into_iter()
                .filter(|event| event.get("assignment").is_some_and(|a| !a.is_null()))
                .collect(),
            _ => Vec::new(),
        };
        Ok(Value::Array(assignments))
    }

    pub async fn get_dashboard_cards(&self) -> CanvasResult<Value> {
        self.get("/dashboard/dashboard_cards", Query::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ClientOptions;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CanvasClient {
        CanvasClient::with_base_url(format!("{}/api/v1", server.uri()), "token", ClientOptions::default())
            .unwrap()
    }

    #[tokio::test]
    async fn test_upcoming_assignments_drops_plain_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users/self/upcoming_events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "assignment_1", "assignment": { "id": 1, "name": "Lab report" } },
                { "id": 2, "title": "Office hours" },
                { "id": 3, "title": "Holiday", "assignment": null },
                { "id": "assignment_4", "assignment": { "id": 4, "name": "Quiz prep" } }
            ])))
            .mount(&server)
            .await;

        let upcoming = client(&server).get_upcoming_assignments().await.unwrap();
        let names: Vec<_> = upcoming
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["assignment"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Lab report", "Quiz prep"]);
    }

    #[tokio::test]
    async fn test_calendar_events_scoped_to_course() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/calendar_events"))
            .and(query_param("context_codes[]", "course_12"))
            .and(query_param("start_date", "2024-09-01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
            .expect(1)
            .mount(&server)
            .await;

        let events = client(&server)
            .list_calendar_events(Some(12), Some("2024-09-01"), None)
            .await
            .unwrap();
        assert_eq!(events, json!([{ "id": 1 }]));
    }
}
