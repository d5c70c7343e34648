use serde_json::Value;

use crate::canvas::{CanvasClient, CanvasError, CanvasResult, Query};

impl CanvasClient {
    /// Files of a course, or of one folder when `folder_id` is given.
    pub async fn list_files(&self, course_id: u64, folder_id: Option<u64>) -> CanvasResult<Value> {
        let path = match folder_id {
            Some(folder) => format!("/folders/{}/files", folder),
            None => format!("/courses/{}/files", course_id),
        };
        self.get(&path, Query::paged()).await
    }

    pub async fn get_file(&self, file_id: u64) -> CanvasResult<Value> {
        self.get(&format!("/files/{}", file_id), Query::new()).await
    }

    pub async fn list_pages(&self, course_id: u64) -> CanvasResult<Value> {
        self.get(&format!("/courses/{}/pages", course_id), Query::paged())
            .await
    }

    /// A wiki page by its URL slug (e.g. "course-overview").
    pub async fn get_page(&self, course_id: u64, page_url: &str) -> CanvasResult<Value> {
        let slug = page_url.trim();
        if slug.is_empty() || slug.contains(['/', '?', '#']) || slug.chars().all(|c| c == '.') {
            return Err(CanvasError::invalid_argument(format!(
                "Invalid page url: '{}'",
                page_url
            )));
        }
        self.get(&format!("/courses/{}/pages/{}", course_id, slug), Query::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ClientOptions;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CanvasClient {
        CanvasClient::with_base_url(format!("{}/api/v1", server.uri()), "token", ClientOptions::default())
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_files_in_folder() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/folders/8/files"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).list_files(2, Some(8)).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_page_rejects_path_traversal() {
        let server = MockServer::start().await;
        let err = client(&server).get_page(2, "../../users").await.unwrap_err();
        assert!(matches!(err, CanvasError::InvalidArgument(_)));
        assert!(client(&server).get_page(2, "  ").await.is_err());
        assert!(client(&server).get_page(2, "..").await.is_err());
    }
}
