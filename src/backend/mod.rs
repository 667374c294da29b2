//! Task store abstraction.
//!
//! This module defines the interface the client uses to talk to the remote
//! task API, along with the error type every operation reports. The store is
//! the source of truth; nothing here caches or retries.

use async_trait::async_trait;

use crate::task::{HealthReport, Task, TaskDraft, TaskId};

pub mod factory;
pub mod http;

pub use factory::create_store;
pub use http::HttpTaskStore;

/// A store request failed.
///
/// Every variant means the operation did not take effect as far as the
/// client can tell; callers surface it to the user and never retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The request never got a response (connection refused, DNS, reset...).
    #[error("Network error: {0}")]
    Network(String),

    /// The store answered with a non-success status.
    #[error("Store returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The store answered with a body the client could not decode.
    #[error("Invalid response: {0}")]
    InvalidData(String),
}

impl StoreError {
    /// Whether the failure happened at the transport level.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// HTTP status of a store-side failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Operations offered by the remote task API.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Human-readable location of the store, used in log lines.
    fn endpoint(&self) -> &str;

    async fn health(&self) -> Result<HealthReport, StoreError>;

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError>;
    async fn get_task(&self, id: &TaskId) -> Result<Task, StoreError>;
    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, StoreError>;
    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, StoreError>;
    async fn delete_task(&self, id: &TaskId) -> Result<(), StoreError>;
    async fn toggle_task(&self, id: &TaskId) -> Result<Task, StoreError>;
}
