//! Task data structure.
//!
//! This module defines the core `Task` struct representing a single work item
//! owned by a user, with status, priority, date and tag metadata.

use serde::{Deserialize, Serialize};

use crate::fields::{Priority, TaskStatus};

/// A work item belonging to one user.
///
/// The `id` identifies the task for the duration of a run; it is assigned
/// when the database is loaded or when the task is created, and is not
/// written to the persisted document. `due_date` and `start_date` hold
/// `YYYY-MM-DD` strings validated at the input boundary, which keeps
/// lexicographic ordering equal to chronological ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip)]
    pub id: u64,
    pub username: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: String,
    pub start_date: String,
    pub tags: Vec<String>,
}
