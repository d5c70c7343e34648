use super::ResourceDefinition;
use crate::domains::resources::service::DynamicResourceType;

pub struct UserProfileResource;

impl ResourceDefinition for UserProfileResource {
    const URI: &'static str = "canvas://user/profile";
    const NAME: &'static str = "User Profile";
    const DESCRIPTION: &'static str = "Profile of the user owning the API token";

    fn content() -> DynamicResourceType {
        DynamicResourceType::UserProfile
    }
}
