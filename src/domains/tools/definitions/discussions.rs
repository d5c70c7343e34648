//! Discussion and announcement tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::courses::CourseIdParams;
use crate::canvas::{CanvasClient, CanvasResult};
use crate::domains::tools::CanvasTool;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TopicRefParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the discussion topic.
    pub topic_id: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PostToDiscussionParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the discussion topic.
    pub topic_id: u64,

    /// Message body (HTML allowed).
    pub message: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateAnnouncementParams {
    /// ID of the course.
    pub course_id: u64,

    /// Announcement title.
    pub title: String,

    /// Announcement body (HTML allowed).
    pub message: String,
}

pub struct ListDiscussionTopicsTool;

#[async_trait]
impl CanvasTool for ListDiscussionTopicsTool {
    const NAME: &'static str = "canvas_list_discussion_topics";
    const DESCRIPTION: &'static str = "List discussion topics of a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_discussion_topics(params.course_id).await
    }
}

pub struct GetDiscussionTopicTool;

#[async_trait]
impl CanvasTool for GetDiscussionTopicTool {
    const NAME: &'static str = "canvas_get_discussion_topic";
    const DESCRIPTION: &'static str = "Get a discussion topic.";
    type Params = TopicRefParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .get_discussion_topic(params.course_id, params.topic_id)
            .await
    }
}

pub struct PostToDiscussionTool;

#[async_trait]
impl CanvasTool for PostToDiscussionTool {
    const NAME: &'static str = "canvas_post_to_discussion";
    const DESCRIPTION: &'static str = "Post an entry to a discussion topic.";
    type Params = PostToDiscussionParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .post_to_discussion(params.course_id, params.topic_id, &params.message)
            .await
    }
}

pub struct ListAnnouncementsTool;

#[async_trait]
impl CanvasTool for ListAnnouncementsTool {
    const NAME: &'static str = "canvas_list_announcements";
    const DESCRIPTION: &'static str = "List announcements of a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_announcements(params.course_id).await
    }
}

pub struct CreateAnnouncementTool;

#[async_trait]
impl CanvasTool for CreateAnnouncementTool {
    const NAME: &'static str = "canvas_create_announcement";
    const DESCRIPTION: &'static str = "Create an announcement in a course.";
    type Params = CreateAnnouncementParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .create_announcement(params.course_id, &params.title, &params.message)
            .await
    }
}
