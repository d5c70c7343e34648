//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate, ResourceTemplate};

use super::definitions::{
    CoursesResource, DashboardCardsResource, ResourceDefinition, ServerInfoResource,
    UserProfileResource,
};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        content: R::content(),
    }
}

fn build_template(uri_template: &str, name: &str, title: &str, description: &str) -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: uri_template.to_string(),
        name: name.to_string(),
        title: Some(title.to_string()),
        description: Some(description.to_string()),
        mime_type: Some("application/json".to_string()),
    }
    .no_annotation()
}

/// Get all registered resources as ResourceEntries.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<ServerInfoResource>(),
        build_resource::<CoursesResource>(),
        build_resource::<UserProfileResource>(),
        build_resource::<DashboardCardsResource>(),
    ]
}

/// Get all registered resource templates (RFC 6570 URI templates).
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        build_template(
            "canvas://course/{course_id}",
            "Course",
            "Course Details",
            "Details of a course, including term and syllabus",
        ),
        build_template(
            "canvas://course/{course_id}/syllabus",
            "Course Syllabus",
            "Syllabus",
            "Syllabus of a course",
        ),
        build_template(
            "canvas://course/{course_id}/assignments",
            "Course Assignments",
            "Assignments",
            "Assignments of a course, ordered by due date",
        ),
        build_template(
            "canvas://course/{course_id}/modules",
            "Course Modules",
            "Modules",
            "Modules of a course",
        ),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![
        ServerInfoResource::URI,
        CoursesResource::URI,
        UserProfileResource::URI,
        DashboardCardsResource::URI,
    ]
}
