use super::actions::{Action, HealthOutcome};
use crate::backend::TaskStore;
use crate::task::{TaskDraft, TaskId};
use crate::ui::state::MutationKind;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type JobId = u64;

#[derive(Debug)]
pub struct BackgroundJob {
    pub id: JobId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// A validated store write, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationRequest {
    Create(TaskDraft),
    Update(TaskId, TaskDraft),
    Delete(TaskId),
    Toggle(TaskId),
}

impl MutationRequest {
    pub fn kind(&self) -> MutationKind {
        match self {
            Self::Create(_) => MutationKind::Create,
            Self::Update(..) => MutationKind::Update,
            Self::Delete(_) => MutationKind::Delete,
            Self::Toggle(_) => MutationKind::Toggle,
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Create(draft) => format!("Create task '{}'", draft.title),
            Self::Update(id, _) => format!("Update task {}", id),
            Self::Delete(id) => format!("Delete task {}", id),
            Self::Toggle(id) => format!("Toggle task {}", id),
        }
    }
}

/// Runs store requests on the tokio runtime and reports each result back
/// as an [`Action`] on the channel returned by [`TaskManager::new`].
pub struct TaskManager {
    jobs: HashMap<JobId, BackgroundJob>,
    next_job_id: JobId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                jobs: HashMap::new(),
                next_job_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn spawn<Fut>(&mut self, description: String, job: Fut) -> JobId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let job_id = self.next_job_id;
        self.next_job_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            // The receiver is gone only when the app is shutting down
            let _ = action_sender.send(job.await);
        });

        log::debug!("Background: spawned job {} ({})", job_id, description);
        self.jobs.insert(
            job_id,
            BackgroundJob {
                id: job_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        job_id
    }

    /// Fetch the whole list. The result carries `generation` back so the
    /// controller can drop answers to superseded loads.
    pub fn spawn_load(&mut self, store: Arc<dyn TaskStore>, generation: u64) -> JobId {
        self.spawn(format!("Load tasks (#{})", generation), async move {
            match store.list_tasks().await {
                Ok(tasks) => {
                    log::info!("Loaded {} tasks from {}", tasks.len(), store.endpoint());
                    Action::TasksLoaded { generation, tasks }
                }
                Err(e) => {
                    log::error!("Failed to load tasks: {}", e);
                    Action::LoadFailed {
                        generation,
                        error: e.to_string(),
                    }
                }
            }
        })
    }

    /// Fetch one task so the edit form can be prefilled.
    pub fn spawn_fetch_task(&mut self, store: Arc<dyn TaskStore>, id: TaskId) -> JobId {
        self.spawn(format!("Fetch task {}", id), async move {
            match store.get_task(&id).await {
                Ok(task) => Action::TaskFetched(task),
                Err(e) => {
                    log::warn!("Failed to fetch task {}: {}", id, e);
                    Action::TaskFetchFailed(e.to_string())
                }
            }
        })
    }

    pub fn spawn_health_check(&mut self, store: Arc<dyn TaskStore>) -> JobId {
        self.spawn("Health check".to_string(), async move {
            match store.health().await {
                Ok(report) => {
                    log::debug!("Health: {:?}", report);
                    Action::HealthChecked(HealthOutcome::Reported(report))
                }
                Err(e) => {
                    log::warn!("Health check failed: {}", e);
                    Action::HealthChecked(HealthOutcome::Unreachable(e.to_string()))
                }
            }
        })
    }

    /// Send a create, update, delete or toggle request.
    pub fn spawn_mutation(&mut self, store: Arc<dyn TaskStore>, request: MutationRequest) -> JobId {
        let description = request.describe();
        let kind = request.kind();
        let label = description.clone();

        self.spawn(description, async move {
            let result = match &request {
                MutationRequest::Create(draft) => store.create_task(draft).await.map(|_| ()),
                MutationRequest::Update(id, draft) => store.update_task(id, draft).await.map(|_| ()),
                MutationRequest::Delete(id) => store.delete_task(id).await,
                MutationRequest::Toggle(id) => store.toggle_task(id).await.map(|_| ()),
            };

            match result {
                Ok(()) => {
                    log::info!("{}: done", label);
                    Action::MutationSucceeded(kind)
                }
                Err(e) => {
                    log::error!("{}: {}", label, e);
                    Action::MutationFailed {
                        kind,
                        error: e.to_string(),
                    }
                }
            }
        })
    }

    /// Forget jobs whose handle has finished. Their result was already sent.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<JobId> {
        let finished: Vec<JobId> = self
            .jobs
            .iter()
            .filter(|(_, job)| job.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for job_id in &finished {
            if let Some(job) = self.jobs.remove(job_id) {
                log::debug!(
                    "Background: job {} ({}) finished after {:?}",
                    job.id,
                    job.description,
                    job.started_at.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running jobs
    pub fn cancel_all_tasks(&mut self) {
        for (_, job) in self.jobs.drain() {
            job.handle.abort();
        }
    }

    /// Get the number of active jobs
    pub fn task_count(&self) -> usize {
        self.jobs.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all jobs when the manager is dropped
        self.cancel_all_tasks();
    }
}
