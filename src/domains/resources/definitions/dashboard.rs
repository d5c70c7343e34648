use super::ResourceDefinition;
use crate::domains::resources::service::DynamicResourceType;

pub struct DashboardCardsResource;

impl ResourceDefinition for DashboardCardsResource {
    const URI: &'static str = "canvas://dashboard/cards";
    const NAME: &'static str = "Dashboard";
    const DESCRIPTION: &'static str = "Course cards shown on the user's Canvas dashboard";

    fn content() -> DynamicResourceType {
        DynamicResourceType::DashboardCards
    }
}
