//! Top-level controller.
//!
//! `AppComponent` owns the [`AppState`], routes keys to the child components,
//! turns the resulting [`Action`]s into state changes and store requests, and
//! applies the results that background jobs send back.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

use crate::backend::TaskStore;
use crate::config::Config;
use crate::constants::{
    ERROR_API_UNHEALTHY, ERROR_API_UNREACHABLE, ERROR_LOAD_FAILED, ERROR_TASK_DELETE_FAILED, ERROR_TASK_FETCH_FAILED,
    ERROR_TASK_SAVE_FAILED, ERROR_TASK_TOGGLE_FAILED, SUCCESS_API_CONNECTED, SUCCESS_TASK_CREATED,
    SUCCESS_TASK_DELETED, SUCCESS_TASK_UPDATED,
};
use crate::icons::IconService;
use crate::task::TaskId;
use crate::ui::components::{status_bar, toast, DialogComponent, SidebarComponent, TaskListComponent, ToolbarComponent};
use crate::ui::core::{Action, Component, EventType, HealthOutcome, MutationRequest, TaskManager};
use crate::ui::layout::LayoutManager;
use crate::ui::state::{
    AppState, FormInput, FormMode, HealthState, LoadState, MutationKind, MutationState, PendingMutation, TaskForm, ToastKind,
};
use crate::ui::view::{render_page, PageView};
use crate::utils::datetime::today_utc;

pub struct AppComponent {
    // Component composition
    sidebar: SidebarComponent,
    toolbar: ToolbarComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    config: Config,

    // Services
    store: Arc<dyn TaskStore>,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    // Bumped on every list fetch; only the latest fetch's answer is applied
    load_generation: u64,

    // Health bookkeeping
    last_health_check: Option<Instant>,
    last_health: Option<HealthState>,
    announce_health: bool,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: Arc<dyn TaskStore>, config: Config) -> Self {
        let icons = IconService::new(config.display.icon_theme);
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            sidebar: SidebarComponent::new(icons.clone()),
            toolbar: ToolbarComponent::new(icons.clone()),
            task_list: TaskListComponent::new(icons.clone()),
            dialog: DialogComponent::new(icons),
            state: AppState::new(&config.ui),
            config,
            store,
            task_manager,
            background_action_rx,
            load_generation: 0,
            last_health_check: None,
            last_health: None,
            announce_health: false,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the number of active background jobs
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Kick off the first list fetch and health check.
    pub fn start(&mut self) {
        log::info!("Starting session against {}", self.store.endpoint());
        self.dispatch(Action::LoadTasks);
        self.dispatch(Action::CheckHealth);
    }

    /// Describe the current screen.
    pub fn page(&self) -> PageView {
        render_page(&self.state, today_utc(), &self.config.display)
    }

    /// Route a key to whichever component owns the keyboard right now.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        if DialogComponent::is_visible(&self.state) {
            return self.dialog.handle_key_events(key, &self.state);
        }

        // The search box swallows every key while focused
        if self.state.search_focused {
            return self.toolbar.handle_key_events(key, &self.state);
        }

        let action = self.sidebar.handle_key_events(key, &self.state);
        if !matches!(action, Action::None) {
            return action;
        }
        let action = self.toolbar.handle_key_events(key, &self.state);
        if !matches!(action, Action::None) {
            return action;
        }
        let action = self.task_list.handle_key_events(key, &self.state);
        if !matches!(action, Action::None) {
            return action;
        }

        self.handle_global_key(key)
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('?') => Action::ShowHelp(true),
            KeyCode::Char('r') => Action::LoadTasks,
            KeyCode::Char('H') => Action::CheckHealth,
            KeyCode::Char('x') => Action::DismissToast,
            _ => Action::None,
        }
    }

    /// Process an event from the terminal loop. Returns whether a redraw is needed.
    pub fn handle_event(&mut self, event: EventType) -> bool {
        match event {
            EventType::Key(key) => {
                let action = self.handle_key(key);
                self.dispatch(action);
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => self.on_tick(Instant::now()),
            EventType::Other => false,
        }
    }

    /// Periodic housekeeping: apply finished jobs, expire the toast and
    /// schedule the periodic health check. Returns whether anything changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let actions = self.process_background_actions();
        let mut changed = !actions.is_empty();
        for action in actions {
            self.dispatch(action);
        }

        let ttl = Duration::from_secs(self.config.ui.toast_seconds);
        changed |= self.state.expire_toast(now, ttl);

        let interval = self.config.health.check_interval_seconds;
        if interval > 0 {
            let due = self
                .last_health_check
                .map_or(true, |at| now.saturating_duration_since(at) >= Duration::from_secs(interval));
            if due {
                self.request_health_check(false, now);
            }
        }

        changed
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        // Process all available background actions
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {:?}", action);
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: cleaned up {} finished jobs", finished.len());
        }

        actions
    }

    /// Wait for the next result from a background job.
    pub async fn recv_background_action(&mut self) -> Option<Action> {
        self.background_action_rx.recv().await
    }

    /// Apply an action and every follow-up it produces.
    pub fn dispatch(&mut self, action: Action) {
        let mut next = action;
        while !matches!(next, Action::None) {
            let action = self.sidebar.update(next);
            let action = self.toolbar.update(action);
            let action = self.task_list.update(action);
            let action = self.dialog.update(action);
            next = self.handle_app_action(action);
        }
    }

    fn request_health_check(&mut self, announce: bool, now: Instant) {
        if announce {
            self.announce_health = true;
            self.state.health = HealthState::Checking;
        }
        self.last_health_check = Some(now);
        self.task_manager.spawn_health_check(Arc::clone(&self.store));
    }

    fn submit(&mut self, request: MutationRequest, pending: PendingMutation) {
        log::info!("Submitting {:?}", request.kind());
        self.state.mutation = MutationState::Submitting(pending);
        self.task_manager.spawn_mutation(Arc::clone(&self.store), request);
    }

    fn handle_form_input(&mut self, input: FormInput) {
        let MutationState::Editing(form) = &mut self.state.mutation else {
            return;
        };

        match input {
            FormInput::Cancel => self.state.mutation = MutationState::Idle,
            FormInput::Submit => match form.to_draft() {
                Err(message) => {
                    log::debug!("Form rejected: {}", message);
                    form.error = Some(message.to_string());
                }
                Ok(draft) => {
                    form.error = None;
                    let request = match &form.mode {
                        FormMode::Create => MutationRequest::Create(draft),
                        FormMode::Edit(id) => MutationRequest::Update(id.clone(), draft),
                    };
                    let pending = PendingMutation::Save(form.clone());
                    self.submit(request, pending);
                }
            },
            other => {
                form.error = None;
                form.apply(other);
            }
        }
    }

    fn task_title(&self, id: &TaskId) -> String {
        self.state
            .tasks
            .iter()
            .find(|task| &task.id == id)
            .map(|task| task.title.clone())
            .unwrap_or_else(|| id.to_string())
    }

    fn is_idle(&self) -> bool {
        self.state.mutation == MutationState::Idle
    }

    /// Handle app-level actions that require business logic. Returns a follow-up action.
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        let today = today_utc();

        match action {
            Action::SetFilter(filter) => {
                self.state.query.filter = filter;
                self.state.selected = 0;
            }
            Action::CycleFilter => {
                self.state.query.filter = self.state.query.filter.next();
                self.state.selected = 0;
            }
            Action::CycleSort => {
                self.state.query.sort = self.state.query.sort.next();
                self.state.selected = 0;
            }
            Action::ToggleView => self.state.view_mode = self.state.view_mode.toggle(),
            Action::NextTask => self.state.select_next(today),
            Action::PreviousTask => self.state.select_previous(),

            Action::FocusSearch(focused) => self.state.search_focused = focused,
            Action::SearchInput(c) => {
                self.state.query.search.push(c);
                self.state.selected = 0;
            }
            Action::SearchBackspace => {
                self.state.query.search.pop();
                self.state.selected = 0;
            }
            Action::ClearSearch => {
                self.state.query.search.clear();
                self.state.selected = 0;
            }

            Action::LoadTasks => {
                self.load_generation += 1;
                self.state.load = LoadState::Loading;
                self.task_manager
                    .spawn_load(Arc::clone(&self.store), self.load_generation);
            }
            Action::TasksLoaded { generation, .. } | Action::LoadFailed { generation, .. }
                if generation != self.load_generation =>
            {
                log::debug!(
                    "Dropping result of superseded load #{} (latest #{})",
                    generation,
                    self.load_generation
                );
            }
            Action::TasksLoaded { tasks, .. } => self.state.replace_tasks(tasks, today),
            Action::LoadFailed { error, .. } => {
                // The cached list is kept; only the body switches to the error view
                self.state.load = LoadState::Failed(error.clone());
                self.state
                    .show_toast(ToastKind::Error, format!("{}: {}", ERROR_LOAD_FAILED, error));
            }

            Action::CheckHealth => self.request_health_check(true, Instant::now()),
            Action::HealthChecked(outcome) => {
                let health = match &outcome {
                    HealthOutcome::Reported(report) if report.is_ok() => HealthState::Healthy,
                    HealthOutcome::Reported(_) => HealthState::Unhealthy,
                    HealthOutcome::Unreachable(_) => HealthState::Offline,
                };
                let changed = self.last_health != Some(health);
                self.last_health = Some(health);
                self.state.health = health;

                if self.announce_health || changed {
                    match outcome {
                        HealthOutcome::Reported(report) if report.is_ok() => {
                            self.state.show_toast(ToastKind::Success, SUCCESS_API_CONNECTED)
                        }
                        HealthOutcome::Reported(report) => self
                            .state
                            .show_toast(ToastKind::Error, format!("{} ({})", ERROR_API_UNHEALTHY, report.status)),
                        HealthOutcome::Unreachable(error) => self
                            .state
                            .show_toast(ToastKind::Error, format!("{}: {}", ERROR_API_UNREACHABLE, error)),
                    }
                }
                self.announce_health = false;
            }

            Action::OpenCreateForm => {
                if self.is_idle() {
                    self.state.mutation = MutationState::Editing(TaskForm::create());
                }
            }
            Action::RequestEdit(id) => {
                if self.is_idle() {
                    self.task_manager.spawn_fetch_task(Arc::clone(&self.store), id);
                }
            }
            Action::TaskFetched(task) => {
                // A late answer must not clobber a dialog opened in the meantime
                if self.is_idle() {
                    self.state.mutation = MutationState::Editing(TaskForm::edit(&task));
                }
            }
            Action::TaskFetchFailed(error) => {
                self.state
                    .show_toast(ToastKind::Error, format!("{}: {}", ERROR_TASK_FETCH_FAILED, error));
            }
            Action::Form(input) => self.handle_form_input(input),
            Action::RequestDelete(id) => {
                if self.is_idle() {
                    let title = self.task_title(&id);
                    self.state.mutation = MutationState::ConfirmingDelete { id, title };
                }
            }
            Action::ConfirmDelete => {
                if let MutationState::ConfirmingDelete { id, .. } = &self.state.mutation {
                    let id = id.clone();
                    self.submit(MutationRequest::Delete(id.clone()), PendingMutation::Delete(id));
                }
            }
            Action::CancelMutation => {
                if matches!(
                    self.state.mutation,
                    MutationState::Editing(_) | MutationState::ConfirmingDelete { .. }
                ) {
                    self.state.mutation = MutationState::Idle;
                }
            }
            Action::ToggleTask(id) => {
                if self.is_idle() {
                    self.submit(MutationRequest::Toggle(id.clone()), PendingMutation::Toggle(id));
                }
            }
            Action::MutationSucceeded(kind) => {
                self.state.mutation = MutationState::Idle;
                let message = match kind {
                    MutationKind::Create => Some(SUCCESS_TASK_CREATED),
                    MutationKind::Update => Some(SUCCESS_TASK_UPDATED),
                    MutationKind::Delete => Some(SUCCESS_TASK_DELETED),
                    MutationKind::Toggle => None,
                };
                if let Some(message) = message {
                    self.state.show_toast(ToastKind::Success, message);
                }
                return Action::LoadTasks;
            }
            Action::MutationFailed { kind, error } => {
                let previous = std::mem::take(&mut self.state.mutation);
                if let MutationState::Submitting(PendingMutation::Save(form)) = previous {
                    self.state.mutation = MutationState::Editing(form);
                }
                let prefix = match kind {
                    MutationKind::Create | MutationKind::Update => ERROR_TASK_SAVE_FAILED,
                    MutationKind::Delete => ERROR_TASK_DELETE_FAILED,
                    MutationKind::Toggle => ERROR_TASK_TOGGLE_FAILED,
                };
                self.state.show_toast(ToastKind::Error, format!("{}: {}", prefix, error));
            }

            Action::ShowHelp(show) => self.state.show_help = show,
            Action::DismissToast => self.state.toast = None,
            Action::Quit => {
                log::info!("Quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }

        Action::None
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let page = self.page();
        let areas = LayoutManager::main_layout(rect);

        self.sidebar.render(f, areas.sidebar, &page);
        self.toolbar.render(f, areas.toolbar, &page);
        self.task_list.render(f, areas.tasks, &page);
        status_bar::render_status_bar(f, areas.status, &page);

        // Render dialog on top if visible
        self.dialog.render(f, rect, &page);

        if let Some(toast_view) = &page.toast {
            toast::render_toast(f, rect, &self.dialog.icons, toast_view);
        }
    }
}
