//! Resource definitions module.
//!
//! Each static resource is defined in its own file with its URI, metadata
//! and the Canvas read that backs it.
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod courses;
mod dashboard;
mod profile;
mod server_info;

pub use courses::CoursesResource;
pub use dashboard::DashboardCardsResource;
pub use profile::UserProfileResource;
pub use server_info::ServerInfoResource;

use super::service::DynamicResourceType;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str = "application/json";

    /// What reading the resource resolves to.
    fn content() -> DynamicResourceType;
}
