//! Server info resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::DynamicResourceType;

/// Server name, version and the Canvas API root it talks to.
pub struct ServerInfoResource;

impl ResourceDefinition for ServerInfoResource {
    const URI: &'static str = "canvas://server/info";
    const NAME: &'static str = "Server Information";
    const DESCRIPTION: &'static str = "Information about this MCP server and its Canvas instance";

    fn content() -> DynamicResourceType {
        DynamicResourceType::ServerInfo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_info_metadata() {
        assert_eq!(ServerInfoResource::URI, "canvas://server/info");
        assert_eq!(ServerInfoResource::MIME_TYPE, "application/json");
        assert_eq!(
            DynamicResourceType::from_uri(ServerInfoResource::URI),
            Some(ServerInfoResource::content())
        );
    }
}
