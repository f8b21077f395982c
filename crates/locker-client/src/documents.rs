use locker_types::{Document, DocumentDraft, MessageResponse};
use reqwest::Method;

use crate::error::ClientError;
use crate::http::ApiClient;

const DOCUMENTS_PATH: &str = "/api/documents/";

/// Document CRUD and moderation calls. Every call goes straight to the
/// backend; nothing is cached.
#[derive(Clone)]
pub struct DocumentService {
    api: ApiClient,
}

impl DocumentService {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Document>, ClientError> {
        self.api.get(DOCUMENTS_PATH).await
    }

    pub async fn get(&self, id: i64) -> Result<Document, ClientError> {
        self.api.get(&format!("{DOCUMENTS_PATH}{id}")).await
    }

    pub async fn create(&self, draft: &DocumentDraft) -> Result<Document, ClientError> {
        self.api.send_json(Method::POST, DOCUMENTS_PATH, draft).await
    }

    pub async fn update(&self, id: i64, draft: &DocumentDraft) -> Result<Document, ClientError> {
        self.api
            .send_json(Method::PUT, &format!("{DOCUMENTS_PATH}{id}"), draft)
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, ClientError> {
        let url = self.api.url(&format!("{DOCUMENTS_PATH}{id}"))?;
        self.api.send(self.api.request(Method::DELETE, url)).await
    }

    /// Returns the document with its verification flag set.
    pub async fn verify(&self, id: i64) -> Result<Document, ClientError> {
        self.api
            .send_json(Method::PUT, &format!("{DOCUMENTS_PATH}{id}/verify"), &serde_json::json!({}))
            .await
    }

    pub async fn reject(&self, id: i64) -> Result<MessageResponse, ClientError> {
        self.api
            .send_json(Method::PUT, &format!("{DOCUMENTS_PATH}{id}/reject"), &serde_json::json!({}))
            .await
    }

    pub async fn search(&self, name: &str) -> Result<Vec<Document>, ClientError> {
        let mut url = self.api.url(&format!("{DOCUMENTS_PATH}search"))?;
        url.query_pairs_mut().append_pair("name", name);
        self.api.send(self.api.request(Method::GET, url)).await
    }

    /// Documents waiting for a moderator.
    pub async fn unverified(&self) -> Result<Vec<Document>, ClientError> {
        self.api.get(&format!("{DOCUMENTS_PATH}unverified")).await
    }
}
