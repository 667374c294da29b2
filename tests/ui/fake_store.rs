#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use todoterm::backend::{StoreError, TaskStore};
use todoterm::task::{HealthReport, Task, TaskDraft, TaskId};

/// In-memory store with switchable failures.
#[derive(Default)]
pub struct FakeStore {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicUsize,

    pub fail_list: AtomicBool,
    pub fail_writes: AtomicBool,
    pub offline: AtomicBool,

    pub list_calls: AtomicUsize,
    pub write_calls: AtomicUsize,
}

impl FakeStore {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let store = Self::default();
        store.next_id.store(tasks.len() + 1, Ordering::SeqCst);
        *store.tasks.lock().unwrap() = tasks;
        store
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }

    pub fn set(&self, flag: &AtomicBool, value: bool) {
        flag.store(value, Ordering::SeqCst);
    }

    pub fn writes(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    fn check_write(&self) -> Result<(), StoreError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Status {
                status: 500,
                message: "Internal server error".to_string(),
            });
        }
        Ok(())
    }

    fn not_found() -> StoreError {
        StoreError::Status {
            status: 404,
            message: "Todo not found".to_string(),
        }
    }

    fn with_task<T>(&self, id: &TaskId, f: impl FnOnce(&mut Task) -> T) -> Result<T, StoreError> {
        let mut tasks = self.tasks.lock().unwrap();
        tasks.iter_mut().find(|t| &t.id == id).map(f).ok_or_else(Self::not_found)
    }
}

#[async_trait]
impl TaskStore for FakeStore {
    fn endpoint(&self) -> &str {
        "memory"
    }

    async fn health(&self) -> Result<HealthReport, StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Network("connection refused".to_string()));
        }
        Ok(HealthReport {
            status: "OK".to_string(),
            database: Some("connected".to_string()),
            timestamp: None,
        })
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(StoreError::Network("connection refused".to_string()));
        }
        Ok(self.tasks())
    }

    async fn get_task(&self, id: &TaskId) -> Result<Task, StoreError> {
        self.with_task(id, |t| t.clone())
    }

    async fn create_task(&self, draft: &TaskDraft) -> Result<Task, StoreError> {
        self.check_write()?;
        let now = Utc::now();
        let task = Task {
            id: TaskId::from(self.next_id.fetch_add(1, Ordering::SeqCst) as u64),
            title: draft.title.clone(),
            description: Some(draft.description.clone()).filter(|d| !d.is_empty()),
            completed: draft.completed,
            created_at: now,
            updated_at: now,
        };
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: &TaskId, draft: &TaskDraft) -> Result<Task, StoreError> {
        self.check_write()?;
        self.with_task(id, |t| {
            t.title = draft.title.clone();
            t.description = Some(draft.description.clone()).filter(|d| !d.is_empty());
            t.completed = draft.completed;
            t.updated_at = Utc::now();
            t.clone()
        })
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), StoreError> {
        self.check_write()?;
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn toggle_task(&self, id: &TaskId) -> Result<Task, StoreError> {
        self.check_write()?;
        self.with_task(id, |t| {
            t.completed = !t.completed;
            t.updated_at = Utc::now();
            t.clone()
        })
    }
}
