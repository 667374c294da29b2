//! Filter, sort and search over the cached task list.
//!
//! Everything here is pure: the same tasks, query and day always produce the
//! same output. [`derive`] composes the three stages in their fixed order,
//! filter first, then sort, then search.

use std::cmp::Ordering;

use chrono::NaiveDate;
use feruca::Collator;
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Which slice of the task list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    /// Tasks created on the current (UTC) day.
    Today,
    Pending,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Today, Filter::Pending, Filter::Completed];

    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => task.created_day() == today,
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Today,
            Self::Today => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Today => "Today",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    /// Title, ascending.
    Az,
    /// Title, descending.
    Za,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Az,
            Self::Az => Self::Za,
            Self::Za => Self::Newest,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
            Self::Az => "Title A-Z",
            Self::Za => "Title Z-A",
        }
    }

    fn compare(self, a: &Task, b: &Task, collator: &mut Collator) -> Ordering {
        match self {
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
            Self::Az => collator.collate(a.title.as_str(), b.title.as_str()),
            Self::Za => collator.collate(b.title.as_str(), a.title.as_str()),
        }
    }
}

/// How the derived list is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::List => Self::Grid,
            Self::Grid => Self::List,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Grid => "Grid",
        }
    }
}

/// The UI-selected inputs of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewQuery {
    pub filter: Filter,
    pub sort: SortOrder,
    pub search: String,
}

/// Title comparison using the Unicode Collation Algorithm with the CLDR root
/// order: accents and case only matter once the base letters are equal, so
/// `Ávila` sorts with the `A`s and `apple` just before `Apple`.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

pub fn filter_tasks(tasks: &[Task], filter: Filter, today: NaiveDate) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task, today)).collect()
}

/// Stable sort; tasks with equal keys keep their relative order.
pub fn sort_tasks(mut tasks: Vec<&Task>, order: SortOrder) -> Vec<&Task> {
    let mut collator = Collator::default();
    tasks.sort_by(|a, b| order.compare(a, b, &mut collator));
    tasks
}

/// Case-insensitive substring match on title and description. The term is
/// used as typed; only an empty term passes everything through.
pub fn search_tasks<'a>(tasks: Vec<&'a Task>, term: &str) -> Vec<&'a Task> {
    if term.is_empty() {
        return tasks;
    }

    let needle = term.to_lowercase();
    tasks
        .into_iter()
        .filter(|task| {
            task.title.to_lowercase().contains(&needle)
                || task
                    .description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Run filter, sort and search in that order.
pub fn derive<'a>(tasks: &'a [Task], query: &ViewQuery, today: NaiveDate) -> Vec<&'a Task> {
    let filtered = filter_tasks(tasks, query.filter, today);
    let sorted = sort_tasks(filtered, query.sort);
    search_tasks(sorted, &query.search)
}

/// Counters shown next to the navigation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub today: usize,
}

impl TaskStats {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
            today: tasks.iter().filter(|t| t.created_day() == today).count(),
        }
    }

    pub fn count_for(&self, filter: Filter) -> usize {
        match filter {
            Filter::All => self.total,
            Filter::Today => self.today,
            Filter::Pending => self.pending,
            Filter::Completed => self.completed,
        }
    }
}
