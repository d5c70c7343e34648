use super::ResourceDefinition;
use crate::domains::resources::service::DynamicResourceType;

/// Active courses of the current user.
pub struct CoursesResource;

impl ResourceDefinition for CoursesResource {
    const URI: &'static str = "canvas://courses";
    const NAME: &'static str = "My Courses";
    const DESCRIPTION: &'static str = "Courses the current user is actively enrolled in";

    fn content() -> DynamicResourceType {
        DynamicResourceType::Courses
    }
}
