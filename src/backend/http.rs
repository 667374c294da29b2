//! HTTP implementation of [`TaskStore`] on top of reqwest.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::{StoreError, TaskStore};
use crate::task::{HealthReport, Task, TaskDraft, TaskId};

/// Talks to a REST to-do API rooted at `base_url` (e.g. `http://localhost:5000/api`).
#[derive(Debug, Clone)]
pub struct HttpTaskStore {
    client: Client,
    base_url: String,
}

/// Error body the API sends along with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpTaskStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/todos/3/toggle`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        log::debug!("{} {}", method, url);
        self.client.request(method, url)
    }

    /// Send the request and turn transport errors and non-2xx statuses into [`StoreError`].
    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = request.send().await.map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("request failed").to_string()
                } else {
                    body.trim().to_string()
                }
            });

        Err(StoreError::Status {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
        response.json::<T>().await.map_err(|e| StoreError::InvalidData(e.to_string()))
    }

    fn task_path(id: &TaskId) -> String {
        format!("/todos/{}", id)
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn health(&self) -> Result<HealthReport, StoreError> {
        let response = self.send(self.request(Method::GET, "/health")).await?;
        Self::decode(response).await
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let response = self.send(self.request(Method::GET, "/todos")).await?;
        Self::decode(response).await
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task, StoreError> {
        let response = self.send(self.request(Method::GET, &Self::task_path(id))).await?;
        Self::decode(response).await
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, StoreError> {
        let response = self.send(self.request(Method::POST, "/todos").json(draft)).await?;
        Self::decode(response).await
    }

    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, StoreError> {
        let response = self
            .send(self.request(Method::PUT, &Self::task_path(id)).json(draft))
            .await?;
        Self::decode(response).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), StoreError> {
        // The confirmation body carries nothing the client needs.
        self.send(self.request(Method::DELETE, &Self::task_path(id))).await?;
        Ok(())
    }

    async fn toggle_task(&self, id: &TaskId) -> Result<Task, StoreError> {
        let path = format!("{}/toggle", Self::task_path(id));
        let response = self.send(self.request(Method::PATCH, &path)).await?;
        Self::decode(response).await
    }
}
