//! Module tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::courses::CourseIdParams;
use crate::canvas::{CanvasClient, CanvasResult};
use crate::domains::tools::CanvasTool;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ModuleRefParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the module.
    pub module_id: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ModuleItemParams {
    /// ID of the course.
    pub course_id: u64,

    /// ID of the module.
    pub module_id: u64,

    /// ID of the module item.
    pub item_id: u64,
}

pub struct ListModulesTool;

#[async_trait]
impl CanvasTool for ListModulesTool {
    const NAME: &'static str = "canvas_list_modules";
    const DESCRIPTION: &'static str = "List modules of a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_modules(params.course_id).await
    }
}

pub struct ListModuleItemsTool;

#[async_trait]
impl CanvasTool for ListModuleItemsTool {
    const NAME: &'static str = "canvas_list_module_items";
    const DESCRIPTION: &'static str = "List the items of a module.";
    type Params = ModuleRefParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .list_module_items(params.course_id, params.module_id)
            .await
    }
}

pub struct MarkModuleItemCompleteTool;

#[async_trait]
impl CanvasTool for MarkModuleItemCompleteTool {
    const NAME: &'static str = "canvas_mark_module_item_complete";
    const DESCRIPTION: &'static str = "Mark a module item as done for the current user.";
    type Params = ModuleItemParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client
            .mark_module_item_complete(params.course_id, params.module_id, params.item_id)
            .await
    }
}
