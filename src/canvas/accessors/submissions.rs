use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::users::user_ref;
use crate::canvas::{CanvasClient, CanvasError, CanvasResult, Query};

/// How a student submission is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    OnlineTextEntry,
    OnlineUrl,
    OnlineUpload,
}

impl SubmissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnlineTextEntry => "online_text_entry",
            Self::OnlineUrl => "online_url",
            Self::OnlineUpload => "online_upload",
        }
    }
}

/// A submission on behalf of the current user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NewSubmission {
    pub submission_type: SubmissionType,

    /// Text body (required for `online_text_entry`).
    #[serde(default)]
    pub body: Option<String>,

    /// URL (required for `online_url`).
    #[serde(default)]
    pub url: Option<String>,

    /// Previously uploaded file IDs (required for `online_upload`).
    #[serde(default)]
    pub file_ids: Option<Vec<u64>>,
}

impl NewSubmission {
    /// Build the `{"submission": ...}` envelope, checking the field the type needs.
    fn envelope(&self) -> CanvasResult<Value> {
        let mut submission = Map::new();
        submission.insert("submission_type".into(), json!(self.submission_type.as_str()));

        match self.submission_type {
            SubmissionType::OnlineTextEntry => {
                let body = required(self.body.as_ref(), "body", self.submission_type)?;
                submission.insert("body".into(), json!(body));
            }
            SubmissionType::OnlineUrl => {
                let url = required(self.url.as_ref(), "url", self.submission_type)?;
                submission.insert("url".into(), json!(url));
            }
            SubmissionType::OnlineUpload => {
                let ids = self
                    .file_ids
                    .as_ref()
                    .filter(|ids| !ids.is_empty())
                    .ok_or_else(|| missing("file_ids", self.submission_type))?;
                submission.insert("file_ids".into(), json!(ids));
            }
        }

        Ok(json!({ "submission": submission }))
    }
}

fn required<'a>(value: Option<&'a String>, field: &str, kind: SubmissionType) -> CanvasResult<&'a String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| missing(field, kind))
}

fn missing(field: &str, kind: SubmissionType) -> CanvasError {
    CanvasError::invalid_argument(format!("'{}' is required for {} submissions", field, kind.as_str()))
}

impl CanvasClient {
    pub async fn list_submissions(&self, course_id: u64, assignment_id: u64) -> CanvasResult<Value> {
        let params = Query::paged().push("include[]", "user");
        self.get(
            &format!("/courses/{}/assignments/{}/submissions", course_id, assignment_id),
            params,
        )
        .await
    }

    /// One user's submission; `user_id` may be `"self"`.
    pub async fn get_submission(&self, course_id: u64, assignment_id: u64, user_id: &str) -> CanvasResult<Value> {
        let user = user_ref(user_id)?;
        let params = Query::new().push("include[]", "submission_comments");
        self.get(
            &format!(
                "/courses/{}/assignments/{}/submissions/{}",
                course_id, assignment_id, user
            ),
            params,
        )
        .await
    }

    /// All submissions of all students in a course.
    pub async fn list_course_submissions(&self, course_id: u64) -> CanvasResult<Value> {
        let params = Query::paged().push("student_ids[]", "all");
        self.get(&format!("/courses/{}/students/submissions", course_id), params)
            .await
    }

    /// Grade a submission, optionally leaving a comment.
    pub async fn submit_grade(
        &self,
        course_id: u64,
        assignment_id: u64,
        user_id: u64,
        grade: &str,
        comment: Option<&str>,
    ) -> CanvasResult<Value> {
        let mut body = json!({ "submission": { "posted_grade": grade } });
        if let Some(text) = comment {
            body["comment"] = json!({ "text_comment": text });
        }
        self.put(
            &format!(
                "/courses/{}/assignments/{}/submissions/{}",
                course_id, assignment_id, user_id
            ),
            body,
        )
        .await
    }

    pub async fn submit_assignment(
        &self,
        course_id: u64,
        assignment_id: u64,
        submission: &NewSubmission,
    ) -> CanvasResult<Value> {
        let body = submission.envelope()?;
        self.post(
            &format!("/courses/{}/assignments/{}/submissions", course_id, assignment_id),
            body,
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

    #[test]
    fn test_text_submission_envelope() {
        let submission = NewSubmission {
            submission_type: SubmissionType::OnlineTextEntry,
            body: Some("My essay".into()),
            url: None,
            file_ids: None,
        };
        assert_eq!(
            submission.envelope().unwrap(),
            json!({ "submission": { "submission_type": "online_text_entry", "body": "My essay" } })
        );
    }

    #[test]
    fn test_missing_required_field_rejected() {
        let submission = NewSubmission {
            submission_type: SubmissionType::OnlineUrl,
            body: Some("ignored".into()),
            url: None,
            file_ids: None,
        };
        let err = submission.envelope().unwrap_err();
        assert!(matches!(err, CanvasError::InvalidArgument(_)));
        assert!(err.to_string().contains("'url'"));

        let upload = NewSubmission {
            submission_type: SubmissionType::OnlineUpload,
            body: None,
            url: None,
            file_ids: Some(vec![]),
        };
        assert!(upload.envelope().is_err());
    }

    #[tokio::test]
    async fn test_submit_grade_with_comment() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/v1/courses/1/assignments/2/submissions/3"))
            .and(body_json(json!({
                "submission": { "posted_grade": "95" },
                "comment": { "text_comment": "Great work" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "score": 95 })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client(&server)
            .submit_grade(1, 2, 3, "95", Some("Great work"))
            .await
            .unwrap();
        assert_eq!(result["score"], 95);
    }

    #[tokio::test]
    async fn test_invalid_submission_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let submission = NewSubmission {
            submission_type: SubmissionType::OnlineTextEntry,
            body: None,
            url: None,
            file_ids: None,
        };
        let err = client(&server).submit_assignment(1, 2, &submission).await.unwrap_err();
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_get_submission_for_self() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/3/assignments/8/submissions/self"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 40 })))
            .expect(1)
            .mount(&server)
            .await;

        let submission = client(&server).get_submission(3, 8, "self").await.unwrap();
        assert_eq!(submission["id"], 40);
    }

    #[tokio::test]
    async fn test_get_submission_rejects_path_in_user_id() {
        let server = MockServer::start().await;
        let err = client(&server)
            .get_submission(3, 8, "../../../../users/self")
            .await
            .unwrap_err();
        assert!(matches!(err, CanvasError::InvalidArgument(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
