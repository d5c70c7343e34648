//! Calendar and dashboard tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::canvas::{CanvasClient, CanvasResult};
use crate::domains::tools::{CanvasTool, NoParams};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCalendarEventsParams {
    /// Restrict to one course.
    #[serde(default)]
    pub course_id: Option<u64>,

    /// Window start (YYYY-MM-DD or ISO 8601).
    #[serde(default)]
    pub start_date: Option<String>,

    /// Window end (YYYY-MM-DD or ISO 8601).
    #[serde(default)]
    pub end_date: Option<String>,
}

pub struct ListCalendarEventsTool;

#[async_trait]
impl CanvasTool for ListCalendarEventsTool {
    const NAME: &'static str = "canvas_list_calendar_events";
    const DESCRIPTION: &'static str = "List calendar events, optionally for one course and a date window.";
    type Params = ListCalendarEventsParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .list_calendar_events(
                params.course_id,
                params.start_date.as_deref(),
                params.end_date.as_deref(),
            )
            .await
    }
}

pub struct GetUpcomingAssignmentsTool;

#[async_trait]
impl CanvasTool for GetUpcomingAssignmentsTool {
    const NAME: &'static str = "canvas_get_upcoming_assignments";
    const DESCRIPTION: &'static str = "List the current user's upcoming assignments.";
    type Params = NoParams;

    async fn run(client: &CanvasClient, _params: Self::Params) -> CanvasResult<Value> {
        client.get_upcoming_assignments().await
    }
}

pub struct GetDashboardCardsTool;

#[async_trait]
impl CanvasTool for GetDashboardCardsTool {
    const NAME: &'static str = "canvas_get_dashboard_cards";
    const DESCRIPTION: &'static str = "Get the course cards shown on the user's dashboard.";
    type Params = NoParams;

    async fn run(client: &CanvasClient, _params: Self::Params) -> CanvasResult<Value> {
        client.get_dashboard_cards().await
    }
}
