//! `PostStore` implementation over the Firestore REST client.

use async_trait::async_trait;

use folio_core::domain::{Post, PostPath};
use folio_core::error::StoreError;
use folio_core::ports::PostStore;

use super::client::FirestoreClient;

/// Name of the collection holding post documents.
const POSTS_COLLECTION: &str = "posts";

/// Post store backed by a Firestore collection.
///
/// Document ids double as post ids. `list_all` sorts ascending by title;
/// the ordering is this store's own contract.
pub struct FirestorePostStore {
    client: FirestoreClient,
}

impl FirestorePostStore {
    /// Build a store on top of an already-initialized client handle.
    pub fn new(client: FirestoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PostStore for FirestorePostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let documents = self.client.list_documents(POSTS_COLLECTION).await?;

        let mut posts = documents
            .into_iter()
            .map(|document| document.into_post())
            .collect::<Result<Vec<_>, _>>()?;

        posts.sort_by(|a, b| a.title.cmp(&b.title));

        Ok(posts)
    }

    async fn list_ids(&self) -> Result<Vec<PostPath>, StoreError> {
        let documents = self.client.list_documents(POSTS_COLLECTION).await?;

        Ok(documents
            .iter()
            .map(|document| PostPath::new(document.id()))
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        match self.client.get_document(POSTS_COLLECTION, id).await? {
            Some(document) => Ok(Some(document.into_post()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::super::client::FirestoreConfig;
    use super::*;

    const DOCUMENTS_PATH: &str = "/v1/projects/test-project/databases/(default)/documents/posts";

    fn store_for(server: &MockServer) -> FirestorePostStore {
        let mut config = FirestoreConfig::new("test-project", "test-key");
        config.endpoint = server.base_url();

        FirestorePostStore::new(FirestoreClient::new(config).unwrap())
    }

    fn doc_json(id: &str, title: &str, date: &str, content_html: &str) -> serde_json::Value {
        serde_json::json!({
            "name": format!(
                "projects/test-project/databases/(default)/documents/posts/{}",
                id
            ),
            "fields": {
                "title": {"stringValue": title},
                "date": {"stringValue": date},
                "contentHtml": {"stringValue": content_html}
            },
            "createTime": "2024-01-01T00:00:00Z",
            "updateTime": "2024-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_all_sorts_ascending_by_title() {
        let server = MockServer::start();
        let list_mock = server.mock(|when, then| {
            when.method(GET)
                .path(DOCUMENTS_PATH)
                .query_param("key", "test-key");
            then.status(200).json_body(serde_json::json!({
                "documents": [
                    doc_json("z", "Zebra", "2024-01-01", "<p>z</p>"),
                    doc_json("a", "Apple", "2024-02-01", "<p>a</p>"),
                ]
            }));
        });

        let posts = store_for(&server).list_all().await.unwrap();

        list_mock.assert();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Zebra"]);
    }

    #[tokio::test]
    async fn list_all_returns_empty_for_an_empty_collection() {
        let server = MockServer::start();
        // Firestore sends `{}` when the collection has no documents.
        server.mock(|when, then| {
            when.method(GET).path(DOCUMENTS_PATH);
            then.status(200).json_body(serde_json::json!({}));
        });

        let posts = store_for(&server).list_all().await.unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn list_all_rejects_a_document_missing_a_field() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(DOCUMENTS_PATH);
            then.status(200).json_body(serde_json::json!({
                "documents": [{
                    "name": "projects/test-project/databases/(default)/documents/posts/bad",
                    "fields": {
                        "title": {"stringValue": "No date"},
                        "contentHtml": {"stringValue": "<p>x</p>"}
                    }
                }]
            }));
        });

        let err = store_for(&server).list_all().await.unwrap_err();

        assert!(matches!(err, StoreError::MissingField { field: "date", .. }));
    }

    #[tokio::test]
    async fn list_all_propagates_server_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(DOCUMENTS_PATH);
            then.status(503);
        });

        let err = store_for(&server).list_all().await.unwrap_err();

        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn list_ids_keeps_the_store_enumeration_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(DOCUMENTS_PATH);
            then.status(200).json_body(serde_json::json!({
                "documents": [
                    doc_json("z", "Zebra", "2024-01-01", "<p>z</p>"),
                    doc_json("a", "Apple", "2024-02-01", "<p>a</p>"),
                ]
            }));
        });

        let ids = store_for(&server).list_ids().await.unwrap();

        assert_eq!(ids, vec![PostPath::new("z"), PostPath::new("a")]);
    }

    #[tokio::test]
    async fn get_by_id_returns_the_projected_post() {
        let server = MockServer::start();
        let get_mock = server.mock(|when, then| {
            when.method(GET)
                .path(format!("{}/first-post", DOCUMENTS_PATH))
                .query_param("key", "test-key");
            then.status(200).json_body({
                let mut doc = doc_json("first-post", "Hello", "2024-01-01", "<p>x</p>");
                doc["fields"]["views"] = serde_json::json!({"integerValue": "42"});
                doc
            });
        });

        let post = store_for(&server)
            .get_by_id("first-post")
            .await
            .unwrap()
            .unwrap();

        get_mock.assert();
        assert_eq!(post.id, "first-post");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.date, "2024-01-01");
        assert_eq!(post.content_html, "<p>x</p>");
        // Extra stored fields never leak into the public shape.
        assert_eq!(
            serde_json::to_value(&post)
                .unwrap()
                .as_object()
                .unwrap()
                .len(),
            4
        );
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_an_unknown_id() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(format!("{}/missing", DOCUMENTS_PATH));
            then.status(404).json_body(serde_json::json!({
                "error": {"code": 404, "status": "NOT_FOUND", "message": "Document not found"}
            }));
        });

        let result = store_for(&server).get_by_id("missing").await.unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn get_by_id_distinguishes_store_failure_from_not_found() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path(format!("{}/first-post", DOCUMENTS_PATH));
            then.status(500);
        });

        let err = store_for(&server).get_by_id("first-post").await.unwrap_err();

        assert!(matches!(err, StoreError::Unavailable(_)));
    }

    #[tokio::test]
    async fn an_unreachable_endpoint_surfaces_as_unavailable() {
        let mut config = FirestoreConfig::new("test-project", "test-key");
        config.endpoint = "http://127.0.0.1:1".to_string();
        let store = FirestorePostStore::new(FirestoreClient::new(config).unwrap());

        let err = store.list_all().await.unwrap_err();

        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
