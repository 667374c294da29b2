#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use todoterm::task::{Task, TaskId};

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

pub fn task(id: u64, title: &str, completed: bool, created_at: DateTime<Utc>) -> Task {
    Task {
        id: TaskId::from(id),
        title: title.to_string(),
        description: None,
        completed,
        created_at,
        updated_at: created_at,
    }
}

pub fn with_description(mut task: Task, description: &str) -> Task {
    task.description = Some(description.to_string());
    task
}

/// A small list spread over two days, relative to `now`.
pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    let yesterday = now - Duration::days(1);
    vec![
        task(1, "Buy milk", false, yesterday),
        task(2, "Pay bills", true, yesterday + Duration::hours(1)),
        with_description(task(3, "write report", false, now), "Quarterly numbers"),
        task(4, "Call mom", true, now),
    ]
}
