//! Composite accessors.
//!
//! These combine several primitive reads and reshape the result client-side.
//! The roster and progress reports are bulk enrichments: a failed per-student
//! lookup is logged and recorded as `null` for that student, and the report
//! still succeeds. The range and statistics reports depend on every read they
//! make, so their failures propagate.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use futures::future::join_all;
use serde::Serialize;
use serde_json::{Value, json};
use std::future::Future;
use tracing::warn;

use crate::canvas::{CanvasClient, CanvasError, CanvasResult};

/// Which end of a date window an input date describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// A bare date means midnight at the start of the day.
    Start,
    /// A bare date means the last millisecond of the day (inclusive end).
    End,
}

impl DateBound {
    /// Parse an RFC 3339 timestamp or a `YYYY-MM-DD` date as UTC.
    pub fn parse(self, input: &str) -> CanvasResult<DateTime<Utc>> {
        let input = input.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
            return Ok(ts.with_timezone(&Utc));
        }

        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
            CanvasError::invalid_argument(format!(
                "Invalid date '{}': expected YYYY-MM-DD or RFC 3339",
                input
            ))
        })?;
        let naive = match self {
            Self::Start => date.and_hms_opt(0, 0, 0),
            Self::End => date.and_hms_milli_opt(23, 59, 59, 999),
        }
        .ok_or_else(|| CanvasError::invalid_argument(format!("Invalid date '{}'", input)))?;

        Ok(Utc.from_utc_datetime(&naive))
    }
}

/// Basic statistics over a set of scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
}

impl ScoreSummary {
    /// `None` when there are no scores.
    pub fn from_scores(scores: &[f64]) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }
        let mut sorted = scores.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            mean: sorted.iter().sum::<f64>() / count as f64,
            median,
            min: sorted[0],
            max: sorted[count - 1],
        })
    }
}

impl CanvasClient {
    /// Students of a course, each with an `activity` field (or `null` if the lookup failed).
    pub async fn get_roster_with_activity(&self, course_id: u64) -> CanvasResult<Value> {
        let students = into_items(self.list_students(course_id).await?);
        let roster = enrich_each(students, "activity", |student_id| {
            self.get_student_activity(course_id, student_id)
        })
        .await;
        Ok(Value::Array(roster))
    }

    /// Students of a course, each with a `progress` summary (or `null` if the lookup failed).
    pub async fn get_student_progress(&self, course_id: u64) -> CanvasResult<Value> {
        let students = into_items(self.list_students(course_id).await?);
        let report = enrich_each(students, "progress", |student_id| async move {
            self.get_student_assignment_data(course_id, student_id)
                .await
                .map(|data| progress_counts(&data))
        })
        .await;
        Ok(Value::Array(report))
    }

    /// Course submissions whose `submitted_at` falls inside `[start, end]`.
    ///
    /// Unsubmitted entries are excluded.
    pub async fn list_submissions_in_range(&self, course_id: u64, start: &str, end: &str) -> CanvasResult<Value> {
        let from = DateBound::Start.parse(start)?;
        let to = DateBound::End.parse(end)?;
        if from > to {
            return Err(CanvasError::invalid_argument(format!(
                "start_date '{}' is after end_date '{}'",
                start, end
            )));
        }

        let submissions = into_items(self.list_course_submissions(course_id).await?);
        let in_range = submissions
            .into_iter()
            .filter(|submission| {
                submitted_at(submission).is_some_and(|at| at >= from && at <= to)
            })
            .collect();
        Ok(Value::Array(in_range))
    }

    /// Submission counts and score statistics for one assignment.
    pub async fn get_assignment_statistics(&self, course_id: u64, assignment_id: u64) -> CanvasResult<Value> {
        let (assignment, submissions) = futures::try_join!(
            self.get_assignment(course_id, assignment_id, false),
            self.list_submissions(course_id, assignment_id)
        )?;
        let submissions = into_items(submissions);

        let count_where = |pred: fn(&Value) -> bool| submissions.iter().filter(|s| pred(s)).count();
        let scores: Vec<f64> = submissions
            .iter()
            .filter_map(|s| s.get("score").and_then(Value::as_f64))
            .collect();

        Ok(json!({
            "assignment_id": assignment_id,
            "name": assignment.get("name").cloned().unwrap_or(Value::Null),
            "points_possible": assignment.get("points_possible").cloned().unwrap_or(Value::Null),
            "total_submissions": submissions.len(),
            "submitted": count_where(|s| submitted_at(s).is_some()),
            "graded": count_where(|s| s.get("workflow_state").and_then(Value::as_str) == Some("graded")),
            "missing": count_where(|s| flag(s, "missing")),
            "late": count_where(|s| flag(s, "late")),
            "scores": ScoreSummary::from_scores(&scores),
        }))
    }
}

/// Run `lookup` for every entity concurrently and store each result under `field`.
///
/// Failures (and entities without an `id`) yield `null` and never abort the batch.
async fn enrich_each<F, Fut>(entities: Vec<Value>, field: &str, lookup: F) -> Vec<Value>
where
    F: Fn(u64) -> Fut,
    Fut: Future<Output = CanvasResult<Value>>,
{
    let lookups = entities.iter().map(|entity| {
        let id = entity.get("id").and_then(Value::as_u64);
        let pending = id.map(&lookup);
        async move {
            let (Some(id), Some(pending)) = (id, pending) else {
                return Value::Null;
            };
            match pending.await {
                Ok(value) => value,
                Err(e) => {
                    warn!(entity_id = id, field, error = %e, "Sub-request failed, recording null");
                    Value::Null
                }
            }
        }
    });
    let results = join_all(lookups).await;

    entities
        .into_iter()
        .zip(results)
        .map(|(mut entity, value)| {
            if let Value::Object(map) = &mut entity {
                map.insert(field.to_string(), value);
            }
            entity
        })
        .collect()
}

fn into_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

fn submitted_at(submission: &Value) -> Option<DateTime<Utc>> {
    let raw = submission.get("submitted_at")?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

fn flag(value: &Value, key: &str) -> bool {
    value.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Summarize analytics assignment data for one student.
fn progress_counts(data: &Value) -> Value {
    let entries = data.as_array().map(Vec::as_slice).unwrap_or_default();
    let status_count = |status: &str| {
        entries
            .iter()
            .filter(|e| e.get("status").and_then(Value::as_str) == Some(status))
            .count()
    };
    let submitted = entries
        .iter()
        .filter(|e| {
            e.get("submission")
                .and_then(|s| s.get("submitted_at"))
                .is_some_and(|at| !at.is_null())
        })
        .count();

    json!({
        "total": entries.len(),
        "submitted": submitted,
        "on_time": status_count("on_time"),
        "late": status_count("late"),
        "missing": status_count("missing"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_dates() {
        let start = DateBound::Start.parse("2024-03-01").unwrap();
        let end = DateBound::End.parse("2024-03-01").unwrap();
        assert_eq!(start.to_rfc3339(), "2024-03-01T00:00:00+00:00");
        assert!(end > start);
        assert_eq!(end.date_naive(), start.date_naive());
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = DateBound::End.parse("2024-03-01T10:00:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T08:00:00+00:00");
    }

    #[test]
    fn test_parse_invalid_date() {
        let err = DateBound::Start.parse("March 1st").unwrap_err();
        assert!(matches!(err, CanvasError::InvalidArgument(_)));
    }

    #[test]
    fn test_score_summary() {
        let summary = ScoreSummary::from_scores(&[90.0, 70.0, 80.0, 100.0]).unwrap();
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 85.0);
        assert_eq!(summary.median, 85.0);
        assert_eq!(summary.min, 70.0);
        assert_eq!(summary.max, 100.0);

        assert_eq!(ScoreSummary::from_scores(&[3.0, 1.0, 2.0]).unwrap().median, 2.0);
        assert!(ScoreSummary::from_scores(&[]).is_none());
    }

    #[test]
    fn test_progress_counts() {
        let data = json!([
            { "status": "on_time", "submission": { "submitted_at": "2024-01-01T00:00:00Z" } },
            { "status": "late", "submission": { "submitted_at": "2024-01-05T00:00:00Z" } },
            { "status": "missing", "submission": { "submitted_at": null } },
            { "status": "floating" }
        ]);
        assert_eq!(
            progress_counts(&data),
            json!({ "total": 4, "submitted": 2, "on_time": 1, "late": 1, "missing": 1 })
        );
        assert_eq!(progress_counts(&Value::Null)["total"], 0);
    }

    #[tokio::test]
    async fn test_enrich_each_records_null_on_failure() {
        let entities = vec![json!({ "id": 1 }), json!({ "id": 2 }), json!({ "name": "no id" })];
        let enriched = enrich_each(entities, "extra", |id| async move {
            if id == 2 {
                Err(CanvasError::invalid_argument("boom"))
            } else {
                Ok(json!(id * 10))
            }
        })
        .await;

        assert_eq!(enriched[0], json!({ "id": 1, "extra": 10 }));
        assert_eq!(enriched[1], json!({ "id": 2, "extra": null }));
        assert_eq!(enriched[2], json!({ "name": "no id", "extra": null }));
    }

    // ========================================================================
    // Against a mock Canvas
    // ========================================================================

    use crate::canvas::ClientOptions;
    use wiremock::matchers::{method, path};
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

    async fn mount_students(server: &MockServer, course_id: u64, ids: &[u64]) {
        let students: Vec<Value> = ids
            .iter()
            .map(|id| json!({ "id": id, "name": format!("Student {}", id) }))
            .collect();
        Mock::given(method("GET"))
            .and(path(format!("/api/v1/courses/{}/users", course_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(students))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_roster_keeps_students_whose_activity_failed() {
        let server = MockServer::start().await;
        mount_students(&server, 7, &[1, 2, 3, 4, 5]).await;
        for id in 1..=5u64 {
            let response = if id == 3 {
                ResponseTemplate::new(404).set_body_json(json!({ "message": "Not found" }))
            } else {
                ResponseTemplate::new(200).set_body_json(json!({ "page_views": { "2024-01-01": id } }))
            };
            Mock::given(method("GET"))
                .and(path(format!("/api/v1/courses/7/analytics/users/{}/activity", id)))
                .respond_with(response)
                .mount(&server)
                .await;
        }

        let roster = client(&server).get_roster_with_activity(7).await.unwrap();
        let roster = roster.as_array().unwrap();
        assert_eq!(roster.len(), 5);
        for entry in roster {
            let id = entry["id"].as_u64().unwrap();
            if id == 3 {
                assert!(entry["activity"].is_null());
            } else {
                assert_eq!(entry["activity"]["page_views"]["2024-01-01"], id);
            }
        }
    }

    #[tokio::test]
    async fn test_roster_fails_when_student_list_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/7/users"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthorized" })))
            .mount(&server)
            .await;

        let err = client(&server).get_roster_with_activity(7).await.unwrap_err();
        assert_eq!(err.to_string(), "API Error (401): Unauthorized");
    }

    #[tokio::test]
    async fn test_student_progress() {
        let server = MockServer::start().await;
        mount_students(&server, 8, &[1, 2]).await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/8/analytics/users/1/assignments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "status": "on_time", "submission": { "submitted_at": "2024-01-01T00:00:00Z" } },
                { "status": "missing" }
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/8/analytics/users/2/assignments"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let report = client(&server).get_student_progress(8).await.unwrap();
        assert_eq!(report[0]["progress"]["total"], 2);
        assert_eq!(report[0]["progress"]["missing"], 1);
        assert!(report[1]["progress"].is_null());
    }

    #[tokio::test]
    async fn test_submissions_in_range_is_inclusive() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/9/students/submissions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "submitted_at": "2024-02-28T23:59:59Z" },
                { "id": 2, "submitted_at": "2024-03-01T00:00:00Z" },
                { "id": 3, "submitted_at": "2024-03-05T23:59:59Z" },
                { "id": 4, "submitted_at": "2024-03-06T00:00:00Z" },
                { "id": 5, "submitted_at": null },
                { "id": 6 }
            ])))
            .mount(&server)
            .await;

        let result = client(&server)
            .list_submissions_in_range(9, "2024-03-01", "2024-03-05")
            .await
            .unwrap();
        let ids: Vec<u64> = result
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[tokio::test]
    async fn test_submissions_in_range_rejects_inverted_window() {
        let server = MockServer::start().await;
        let err = client(&server)
            .list_submissions_in_range(9, "2024-03-05", "2024-03-01")
            .await
            .unwrap_err();
        assert!(matches!(err, CanvasError::InvalidArgument(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assignment_statistics() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/1/assignments/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 2, "name": "Essay", "points_possible": 100
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/1/assignments/2/submissions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "workflow_state": "graded", "score": 90.0, "submitted_at": "2024-01-01T00:00:00Z" },
                { "workflow_state": "graded", "score": 70.0, "submitted_at": "2024-01-02T00:00:00Z", "late": true },
                { "workflow_state": "unsubmitted", "score": null, "submitted_at": null, "missing": true }
            ])))
            .mount(&server)
            .await;

        let stats = client(&server).get_assignment_statistics(1, 2).await.unwrap();
        assert_eq!(stats["name"], "Essay");
        assert_eq!(stats["total_submissions"], 3);
        assert_eq!(stats["submitted"], 2);
        assert_eq!(stats["graded"], 2);
        assert_eq!(stats["missing"], 1);
        assert_eq!(stats["late"], 1);
        assert_eq!(stats["scores"]["count"], 2);
        assert_eq!(stats["scores"]["mean"], 80.0);
    }

    #[tokio::test]
    async fn test_assignment_statistics_propagates_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/1/assignments/2"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not found" })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/1/assignments/2/submissions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = client(&server).get_assignment_statistics(1, 2).await.unwrap_err();
        assert_eq!(err.to_string(), "API Error (404): Not found");
    }
}
