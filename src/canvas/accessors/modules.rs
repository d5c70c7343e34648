use reqwest::Method;
use serde_json::Value;

use crate::canvas::{CanvasClient, CanvasResult, Query, RequestOptions};

impl CanvasClient {
    pub async fn list_modules(&self, course_id: u64) -> CanvasResult<Value> {
        self.get(&format!("/courses/{}/modules", course_id), Query::paged())
            .await
    }

    pub async fn list_module_items(&self, course_id: u64, module_id: u64) -> CanvasResult<Value> {
        let params = Query::paged().push("include[]", "content_details");
        self.get(
            &format!("/courses/{}/modules/{}/items", course_id, module_id),
            params,
        )
        .await
    }

    /// Mark a "must mark done" module item as done for the current user.
    pub async fn mark_module_item_complete(
        &self,
        course_id: u64,
        module_id: u64,
        item_id: u64,
    ) -> CanvasResult<Value> {
        self.execute(
            Method::PUT,
            &format!(
                "/courses/{}/modules/{}/items/{}/done",
                course_id, module_id, item_id
            ),
            RequestOptions::default(),
        )
        .await
    }
}
