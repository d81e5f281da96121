//! Session state and business rules.
//!
//! A `Session` tracks who is logged in and applies every mutation to a
//! `Database` passed in by the caller; nothing here touches global state.
//! Authentication and uniqueness checks are linear scans over the user
//! collection, matching the scale this tool is built for.

use crate::db::{self, Database};
use crate::error::Error;
use crate::fields::{DateField, Priority, TaskStatus};
use crate::task::Task;
use crate::user::User;

/// How a user's own tasks are grouped for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    ByStatus,
    ByPriority,
}

/// A headed group of task references, in original relative order.
pub struct TaskGroup<'a> {
    pub heading: &'static str,
    pub tasks: Vec<&'a Task>,
}

/// A single field edit applied to a selected task.
#[derive(Debug, Clone)]
pub enum TaskEdit {
    Title(String),
    Description(String),
    Status(TaskStatus),
    Priority(Priority),
    DueDate(String),
    StartDate(String),
    Tags(Vec<String>),
}

/// The state associated with one logged-in user between login and logout.
#[derive(Debug, Default)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Session::default()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_username(&self) -> Option<&str> {
        self.current_user.as_ref().map(|u| u.username.as_str())
    }

    pub fn logout(&mut self) {
        self.current_user = None;
    }

    /// Register a new account. Fails without mutating anything if the
    /// username is already taken; success logs the new account in.
    pub fn register(&mut self, db: &mut Database, candidate: User) -> Result<(), Error> {
        if db.users.iter().any(|u| u.username == candidate.username) {
            return Err(Error::UsernameTaken);
        }
        db.users.push(candidate.clone());
        self.current_user = Some(candidate);
        Ok(())
    }

    /// Log in with an exact username and password match.
    pub fn login(&mut self, db: &Database, candidate: &User) -> Result<(), Error> {
        let found = db
            .users
            .iter()
            .any(|u| u.username == candidate.username && u.password == candidate.password);
        if !found {
            return Err(Error::InvalidCredentials);
        }
        self.current_user = Some(candidate.clone());
        Ok(())
    }

    /// Add a task owned by the current user, returning its id. The menu flow
    /// can't reach this without a session; the guard is for any other caller.
    pub fn add_task(&self, db: &mut Database, mut task: Task) -> Result<u64, Error> {
        let Some(user) = &self.current_user else {
            return Err(Error::NotLoggedIn);
        };
        task.username = user.username.clone();
        task.id = db.next_id();
        let id = task.id;
        db.tasks.push(task);
        Ok(id)
    }

    /// The current user's tasks, grouped per the filter. Other users' tasks
    /// are never included, and relative order is preserved within groups.
    pub fn list_tasks<'a>(&self, db: &'a Database, filter: TaskFilter) -> Vec<TaskGroup<'a>> {
        match filter {
            TaskFilter::All => vec![TaskGroup {
                heading: "All Tasks",
                tasks: self.own_tasks(db, |_| true),
            }],
            TaskFilter::ByStatus => [
                ("Todo Tasks", TaskStatus::Todo),
                ("In Progress Tasks", TaskStatus::InProgress),
                ("Completed Tasks", TaskStatus::Completed),
            ]
            .into_iter()
            .map(|(heading, status)| TaskGroup {
                heading,
                tasks: self.own_tasks(db, |t| t.status == status),
            })
            .collect(),
            TaskFilter::ByPriority => [
                ("Urgent Tasks", Priority::Urgent),
                ("High Tasks", Priority::High),
                ("Normal Tasks", Priority::Normal),
                ("Low Tasks", Priority::Low),
            ]
            .into_iter()
            .map(|(heading, priority)| TaskGroup {
                heading,
                tasks: self.own_tasks(db, |t| t.priority == priority),
            })
            .collect(),
        }
    }

    fn own_tasks<'a, P>(&self, db: &'a Database, pred: P) -> Vec<&'a Task>
    where
        P: Fn(&Task) -> bool,
    {
        let Some(username) = self.current_username() else {
            return Vec::new();
        };
        db.tasks
            .iter()
            .filter(|t| t.username == username && pred(t))
            .collect()
    }

    /// A copy of every task in the store, sorted ascending by the chosen date
    /// field. Note this deliberately spans all owners, unlike `list_tasks` --
    /// the presentation layer narrows it back down to the current user.
    pub fn tasks_sorted_by(&self, db: &Database, field: DateField) -> Vec<Task> {
        let mut tasks = db.tasks.clone();
        match field {
            DateField::DueDate => db::sort_by_date(&mut tasks, |t| &t.due_date),
            DateField::StartDate => db::sort_by_date(&mut tasks, |t| &t.start_date),
        }
        tasks
    }

    /// Resolve a task by id.
    pub fn find_task<'a>(&self, db: &'a Database, id: u64) -> Result<&'a Task, Error> {
        db.get(id).ok_or(Error::InvalidTaskId)
    }

    /// Mark a task completed.
    pub fn complete_task(&self, db: &mut Database, id: u64) -> Result<(), Error> {
        let task = db.get_mut(id).ok_or(Error::InvalidTaskId)?;
        task.status = TaskStatus::Completed;
        Ok(())
    }

    /// Apply one field edit. Dates are re-validated here even though the
    /// input boundary already checks them; status and priority arrive as
    /// typed values, so their range is enforced by construction.
    pub fn apply_edit(&self, db: &mut Database, id: u64, edit: TaskEdit) -> Result<(), Error> {
        if let TaskEdit::DueDate(d) | TaskEdit::StartDate(d) = &edit {
            if !db::is_date_valid(d) {
                return Err(Error::InvalidDate);
            }
        }
        let task = db.get_mut(id).ok_or(Error::InvalidTaskId)?;
        match edit {
            TaskEdit::Title(v) => task.title = v,
            TaskEdit::Description(v) => task.description = v,
            TaskEdit::Status(v) => task.status = v,
            TaskEdit::Priority(v) => task.priority = v,
            TaskEdit::DueDate(v) => task.due_date = v,
            TaskEdit::StartDate(v) => task.start_date = v,
            TaskEdit::Tags(v) => task.tags = v,
        }
        Ok(())
    }

    /// Delete a task. Remaining tasks keep their ids.
    pub fn delete_task(&self, db: &mut Database, id: u64) -> Result<(), Error> {
        if db.remove(id) {
            Ok(())
        } else {
            Err(Error::InvalidTaskId)
        }
    }
}
