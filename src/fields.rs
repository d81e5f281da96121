//! Enumerations for task categorisation.
//!
//! Status and priority travel as plain integers in the persisted JSON
//! document, so both enums carry explicit discriminants and convert through
//! `i64` for serde. The conversion is total: integers outside the known
//! range land on the reserved `NoStatus` / `NoPriority` variants instead of
//! failing the whole load.

use serde::{Deserialize, Serialize};

/// Task completion status.
///
/// `NoStatus` is reserved; validated input is restricted to the first three.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i64", into = "i64")]
pub enum TaskStatus {
    Todo = 1,
    InProgress = 2,
    Completed = 3,
    NoStatus = 4,
}

impl From<i64> for TaskStatus {
    fn from(n: i64) -> Self {
        match n {
            1 => TaskStatus::Todo,
            2 => TaskStatus::InProgress,
            3 => TaskStatus::Completed,
            _ => TaskStatus::NoStatus,
        }
    }
}

impl From<TaskStatus> for i64 {
    fn from(s: TaskStatus) -> Self {
        s as i64
    }
}

/// Task priority.
///
/// `NoPriority` is reserved; validated input is restricted to the first four.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "i64", into = "i64")]
pub enum Priority {
    Urgent = 1,
    High = 2,
    Normal = 3,
    Low = 4,
    NoPriority = 5,
}

impl From<i64> for Priority {
    fn from(n: i64) -> Self {
        match n {
            1 => Priority::Urgent,
            2 => Priority::High,
            3 => Priority::Normal,
            4 => Priority::Low,
            _ => Priority::NoPriority,
        }
    }
}

impl From<Priority> for i64 {
    fn from(p: Priority) -> Self {
        p as i64
    }
}

/// Date field a task listing can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    DueDate,
    StartDate,
}

/// Format a task status for display. The reserved variant renders empty.
pub fn format_status(s: TaskStatus) -> &'static str {
    match s {
        TaskStatus::Todo => "TODO",
        TaskStatus::InProgress => "IN PROGRESS",
        TaskStatus::Completed => "COMPLETED",
        TaskStatus::NoStatus => "",
    }
}

/// Format a priority for display. The reserved variant renders empty.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::Urgent => "URGENT",
        Priority::High => "HIGH",
        Priority::Normal => "NORMAL",
        Priority::Low => "LOW",
        Priority::NoPriority => "",
    }
}
