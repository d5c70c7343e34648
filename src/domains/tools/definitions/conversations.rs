//! Inbox tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::canvas::{CanvasClient, CanvasResult};
use crate::domains::tools::CanvasTool;

/// Inbox filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ConversationScope {
    Unread,
    Starred,
    Archived,
    Sent,
}

impl ConversationScope {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "unread",
            Self::Starred => "starred",
            Self::Archived => "archived",
            Self::Sent => "sent",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListConversationsParams {
    /// Inbox filter; all conversations when omitted.
    #[serde(default)]
    pub scope: Option<ConversationScope>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateConversationParams {
    /// Recipient user IDs (or context codes such as "course_12_students").
    pub recipients: Vec<String>,

    /// Message subject.
    pub subject: String,

    /// Message body.
    pub body: String,
}

pub struct ListConversationsTool;

#[async_trait]
impl CanvasTool for ListConversationsTool {
    const NAME: &'static str = "canvas_list_conversations";
    const DESCRIPTION: &'static str = "List conversations in the current user's inbox.";
    type Params = ListConversationsParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .list_conversations(params.scope.as_ref().map(ConversationScope::as_str))
            .await
    }
}

pub struct CreateConversationTool;

#[async_trait]
impl CanvasTool for CreateConversationTool {
    const NAME: &'static str = "canvas_create_conversation";
    const DESCRIPTION: &'static str = "Send a new message to one or more recipients.";
    type Params = CreateConversationParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .create_conversation(&params.recipients, &params.subject, &params.body)
            .await
    }
}
