//! The `CanvasTool` trait shared by every tool definition.
//!
//! A tool is a unit struct naming one Canvas operation. It declares its
//! parameters (deserialized from the call arguments, and published as the
//! tool's input schema) and delegates to a [`CanvasClient`] accessor.

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{info, warn};

use super::error::ToolError;
use crate::canvas::{CanvasClient, CanvasResult};

/// Parameters for tools that take no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// One named operation of the tool catalog.
#[async_trait]
pub trait CanvasTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Perform the Canvas call.
    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value>;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Parse the arguments of `T` and run it.
///
/// Malformed arguments are a [`ToolError`]; a Canvas failure is a successful
/// dispatch whose result carries `isError: true` and the error message.
pub fn execute<T: CanvasTool>(
    client: &CanvasClient,
    args: JsonObject,
) -> BoxFuture<'_, Result<CallToolResult, ToolError>> {
    async move {
        let params: T::Params = serde_json::from_value(Value::Object(args))
            .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))?;

        info!(tool = T::NAME, "Tool called");
        match T::run(client, params).await {
            Ok(value) => {
                let text = serde_json::to_string_pretty(&value)
                    .map_err(|e| ToolError::internal(e.to_string()))?;
                Ok(CallToolResult::success(vec![Content::text(text)]))
            }
            Err(e) => {
                warn!(tool = T::NAME, error = %e, "Tool call failed");
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ClientOptions;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct EchoCourseTool;

    #[derive(Deserialize, JsonSchema)]
    struct EchoParams {
        course_id: u64,
    }

    #[async_trait]
    impl CanvasTool for EchoCourseTool {
        const NAME: &'static str = "echo_course";
        const DESCRIPTION: &'static str = "Fetch one course";
        type Params = EchoParams;

        async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
            client.get_course(params.course_id).await
        }
    }

    fn object(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

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
    fn test_to_tool_publishes_schema() {
        let tool = EchoCourseTool::to_tool();
        assert_eq!(tool.name, "echo_course");
        let props = tool.input_schema.get("properties").unwrap();
        assert!(props.get("course_id").is_some());
    }

    #[tokio::test]
    async fn test_execute_success_is_pretty_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1 })))
            .mount(&server)
            .await;

        let client = client(&server);
        let result = execute::<EchoCourseTool>(&client, object(json!({ "course_id": 1 })))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(false));
        let text = &result.content[0].as_text().unwrap().text;
        assert_eq!(serde_json::from_str::<Value>(text).unwrap(), json!({ "id": 1 }));
    }

    #[tokio::test]
    async fn test_execute_api_error_is_error_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/2"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid access token." })))
            .mount(&server)
            .await;

        let client = client(&server);
        let result = execute::<EchoCourseTool>(&client, object(json!({ "course_id": 2 })))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result.content[0].as_text().unwrap().text,
            "API Error (401): Invalid access token."
        );
    }

    #[tokio::test]
    async fn test_execute_rejects_bad_arguments() {
        let server = MockServer::start().await;
        let client = client(&server);
        let err = execute::<EchoCourseTool>(&client, object(json!({ "course_id": "abc" })))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
