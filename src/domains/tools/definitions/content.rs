//! File and page tools.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::courses::CourseIdParams;
use crate::canvas::{CanvasClient, CanvasResult};
use crate::domains::tools::CanvasTool;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListFilesParams {
    /// ID of the course.
    pub course_id: u64,

    /// Restrict the listing to one folder.
    #[serde(default)]
    pub folder_id: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FileRefParams {
    /// ID of the file.
    pub file_id: u64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PageRefParams {
    /// ID of the course.
    pub course_id: u64,

    /// URL slug of the page (e.g. "course-overview").
    pub page_url: String,
}

pub struct ListFilesTool;

#[async_trait]
impl CanvasTool for ListFilesTool {
    const NAME: &'static str = "canvas_list_files";
    const DESCRIPTION: &'static str = "List files of a course or of one of its folders.";
    type Params = ListFilesParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_files(params.course_id, params.folder_id).await
    }
}

pub struct GetFileTool;

#[async_trait]
impl CanvasTool for GetFileTool {
    const NAME: &'static str = "canvas_get_file";
    const DESCRIPTION: &'static str = "Get file metadata, including its download URL.";
    type Params = FileRefParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_file(params.file_id).await
    }
}

pub struct ListPagesTool;

#[async_trait]
impl CanvasTool for ListPagesTool {
    const NAME: &'static str = "canvas_list_pages";
    const DESCRIPTION: &'static str = "List wiki pages of a course.";
    type Params = CourseIdParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.list_pages(params.course_id).await
    }
}

pub struct GetPageTool;

#[async_trait]
impl CanvasTool for GetPageTool {
    const NAME: &'static str = "canvas_get_page";
    const DESCRIPTION: &'static str = "Get the content of a wiki page.";
    type Params = PageRefParams;

    async fn run(client: &CanvasClient, params: Self::Params) -> CanvasResult<Value> {
        client.get_page(params.course_id, &params.page_url).await
    }
}
