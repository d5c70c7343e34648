//! Resource service implementation.
//!
//! Static resources are registered from `registry.rs`; templated URIs
//! (`canvas://course/{course_id}/...`) are parsed on read. Every read goes
//! through the same Canvas accessors as the tools.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::canvas::CanvasClient;

const COURSE_PREFIX: &str = "canvas://course/";

/// Service for managing and accessing resources.
pub struct ResourceService {
    client: Arc<CanvasClient>,

    /// Reported in `canvas://server/info`.
    server_name: String,

    /// Key: resource URI.
    resources: HashMap<String, ResourceEntry>,

    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// What reading the resource resolves to.
    pub content: DynamicResourceType,
}

/// Everything a resource URI can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicResourceType {
    ServerInfo,
    Courses,
    UserProfile,
    DashboardCards,
    Course(u64),
    Syllabus(u64),
    Assignments(u64),
    Modules(u64),
}

impl DynamicResourceType {
    /// Parse a static or templated resource URI.
    pub fn from_uri(uri: &str) -> Option<Self> {
        match uri {
            "canvas://server/info" => return Some(Self::ServerInfo),
            "canvas://courses" => return Some(Self::Courses),
            "canvas://user/profile" => return Some(Self::UserProfile),
            "canvas://dashboard/cards" => return Some(Self::DashboardCards),
            _ => {}
        }

        let rest = uri.strip_prefix(COURSE_PREFIX)?;
        let (id, section) = match rest.split_once('/') {
            Some((id, section)) => (id, Some(section)),
            None => (rest, None),
        };
        let course_id = id.parse().ok()?;

        match section {
            None => Some(Self::Course(course_id)),
            Some("syllabus") => Some(Self::Syllabus(course_id)),
            Some("assignments") => Some(Self::Assignments(course_id)),
            Some("modules") => Some(Self::Modules(course_id)),
            Some(_) => None,
        }
    }
}

impl ResourceService {
    /// Create a new ResourceService backed by `client`.
    pub fn new(client: Arc<CanvasClient>, server_name: impl Into<String>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            client,
            server_name: server_name.into(),
            resources: HashMap::new(),
            templates: get_all_resource_templates(),
        };
        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let kind = match self.resources.get(uri) {
            Some(entry) => entry.content,
            None if uri.starts_with(COURSE_PREFIX) => {
                DynamicResourceType::from_uri(uri).ok_or_else(|| ResourceError::invalid_uri(uri))?
            }
            None => return Err(ResourceError::not_found(uri)),
        };

        let payload = self.resolve(kind).await?;
        let text = serde_json::to_string_pretty(&payload)
            .map_err(|e| ResourceError::internal(e.to_string()))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: Some("application/json".to_string()),
                text,
                meta: None,
            }],
        })
    }

    async fn resolve(&self, kind: DynamicResourceType) -> Result<Value, ResourceError> {
        let client = &self.client;
        let value = match kind {
            DynamicResourceType::ServerInfo => serde_json::json!({
                "server": self.server_name,
                "version": env!("CARGO_PKG_VERSION"),
                "canvas_api": client.base_url(),
            }),
            DynamicResourceType::Courses => client.list_courses(false).await?,
            DynamicResourceType::UserProfile => client.get_user_profile("self").await?,
            DynamicResourceType::DashboardCards => client.get_dashboard_cards().await?,
            DynamicResourceType::Course(id) => client.get_course(id).await?,
            DynamicResourceType::Syllabus(id) => client.get_syllabus(id).await?,
            DynamicResourceType::Assignments(id) => client.list_assignments(id, false).await?,
            DynamicResourceType::Modules(id) => client.list_modules(id).await?,
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ClientOptions;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(base_url: String) -> ResourceService {
        let client = CanvasClient::with_base_url(
            base_url,
            "token",
            ClientOptions {
                max_retries: 0,
                ..ClientOptions::default()
            },
        )
        .unwrap();
        ResourceService::new(Arc::new(client), "canvas-mcp-server")
    }

    fn text_of(result: &ReadResourceResult) -> Value {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => serde_json::from_str(text).unwrap(),
            other => panic!("unexpected contents: {:?}", other),
        }
    }

    #[test]
    fn test_parse_uris() {
        assert_eq!(
            DynamicResourceType::from_uri("canvas://course/12"),
            Some(DynamicResourceType::Course(12))
        );
        assert_eq!(
            DynamicResourceType::from_uri("canvas://course/12/modules"),
            Some(DynamicResourceType::Modules(12))
        );
        assert_eq!(DynamicResourceType::from_uri("canvas://course/abc"), None);
        assert_eq!(DynamicResourceType::from_uri("canvas://course/12/grades"), None);
        assert_eq!(DynamicResourceType::from_uri("file:///etc/passwd"), None);
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service_for("https://canvas.test/api/v1".into());
        assert_eq!(service.list_resources().await.len(), 4);
        assert_eq!(service.list_resource_templates().await.len(), 4);
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let service = service_for("https://canvas.test/api/v1".into());
        let result = service.read_resource("canvas://server/info").await.unwrap();
        let info = text_of(&result);
        assert_eq!(info["server"], "canvas-mcp-server");
        assert_eq!(info["canvas_api"], "https://canvas.test/api/v1");
    }

    #[tokio::test]
    async fn test_read_templated_resource() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/courses/7/modules"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1, "name": "Week 1" }])))
            .expect(1)
            .mount(&server)
            .await;

        let service = service_for(format!("{}/api/v1", server.uri()));
        let result = service.read_resource("canvas://course/7/modules").await.unwrap();
        assert_eq!(text_of(&result)[0]["name"], "Week 1");
    }

    #[tokio::test]
    async fn test_read_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/users/self/profile"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid access token." })))
            .mount(&server)
            .await;

        let service = service_for(format!("{}/api/v1", server.uri()));
        let err = service.read_resource("canvas://user/profile").await.unwrap_err();
        assert!(matches!(err, ResourceError::Upstream(_)));
        assert_eq!(err.to_string(), "API Error (401): Invalid access token.");
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service_for("https://canvas.test/api/v1".into());
        assert!(matches!(
            service.read_resource("mcp://server/nonexistent").await,
            Err(ResourceError::NotFound(_))
        ));
        assert!(matches!(
            service.read_resource("canvas://course/x/syllabus").await,
            Err(ResourceError::InvalidUri(_))
        ));
    }
}
