//! Database operations and utility functions for task management.
//!
//! This module provides the `Database` struct owning the user and task
//! collections backed by a single JSON document, along with date validation,
//! date-field sorting and tag parsing helpers.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::user::User;

/// In-memory database holding every user and task.
///
/// The persisted form is a single JSON document with top-level `users` and
/// `tasks` arrays; a document missing either array loads as empty.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Database {
    /// Load the database from a JSON file, returning an empty database if the
    /// file doesn't exist. Loaded tasks are assigned fresh sequential ids.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Database::default();
        }
        let mut buf = String::new();
        let mut db = match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) if buf.trim().is_empty() => Database::default(),
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(db) => db,
                Err(e) => {
                    eprintln!("Error parsing database, starting fresh: {e}");
                    Database::default()
                }
            },
            Err(e) => {
                eprintln!("Error reading database, starting fresh: {e}");
                Database::default()
            }
        };
        for (i, t) in db.tasks.iter_mut().enumerate() {
            t.id = i as u64 + 1;
        }
        db
    }

    /// Save the database using an atomic write (temp file + rename),
    /// creating the containing directory if it doesn't exist.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let tmp = path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(self).unwrap();
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Generate the next available task ID.
    pub fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        self.tasks.get_mut(idx)
    }

    /// Remove a task by ID. Returns false if no task has that ID.
    /// Remaining tasks keep their ids.
    pub fn remove(&mut self, id: u64) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.tasks.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// Check that a string is a real calendar date in strict `YYYY-MM-DD` form.
///
/// The parsed date is formatted back and compared to the input, which rejects
/// unpadded fields and anything chrono would normalise away.
pub fn is_date_valid(date: &str) -> bool {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%Y-%m-%d").to_string() == date,
        Err(_) => false,
    }
}

/// Sort tasks ascending by a string date field using a stable adjacent-swap
/// (bubble) sort. Swaps happen only on strict inequality, so equal keys keep
/// their relative order; a pass with no swaps ends the sort early.
pub fn sort_by_date<F>(tasks: &mut [Task], key: F)
where
    F: Fn(&Task) -> &str,
{
    let n = tasks.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if key(&tasks[j]) > key(&tasks[j + 1]) {
                tasks.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Split a comma-separated tag string. The split is literal: no trimming, and
/// an empty input yields a single empty tag rather than none.
pub fn split_tags(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.to_string()).collect()
}
