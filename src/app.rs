//! Top-level menu state machine.
//!
//! Two states: logged out (login / register / exit) and logged in (add /
//! view / select / logout). The caller loads the database before `run` and
//! saves it after `run` returns; exiting the loop is the only way out.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::db::Database;
use crate::fields::{DateField, Priority, TaskStatus};
use crate::menu;
use crate::session::{Session, TaskEdit, TaskFilter};

/// Drive the interactive loop until the user picks Exit.
pub fn run<R: BufRead, W: Write>(db: &mut Database, con: &mut Console<R, W>) {
    let mut session = Session::new();

    loop {
        menu::user_menu(con);
        match con.read_integer_in("Enter your choice: ", 1, 3) {
            1 => {
                let candidate = menu::login_or_register(con, "Login");
                match session.login(db, &candidate) {
                    Ok(()) => con.write_line("Login successful."),
                    Err(e) => con.write_line(&e.to_string()),
                }
            }
            2 => {
                let candidate = menu::login_or_register(con, "Register");
                match session.register(db, candidate) {
                    Ok(()) => con.write_line("Registration successful."),
                    Err(e) => con.write_line(&e.to_string()),
                }
            }
            _ => break,
        }

        while session.is_logged_in() {
            menu::main_menu(con);
            match con.read_integer_in("Enter your choice: ", 1, 4) {
                1 => {
                    let task = menu::add_task_form(con);
                    if let Err(e) = session.add_task(db, task) {
                        con.write_line(&e.to_string());
                    }
                }
                2 => view_tasks(db, con, &session),
                3 => select_task(db, con, &session),
                _ => session.logout(),
            }
        }
    }
}

/// The view submenu loop: filtered listings and the two date sorts.
fn view_tasks<R: BufRead, W: Write>(db: &Database, con: &mut Console<R, W>, session: &Session) {
    let username = session.current_username().unwrap_or_default().to_string();
    loop {
        menu::view_menu(con);
        match con.read_integer_in("Enter your choice: ", 1, 6) {
            choice @ (1 | 2 | 3) => {
                let filter = match choice {
                    1 => TaskFilter::All,
                    2 => TaskFilter::ByStatus,
                    _ => TaskFilter::ByPriority,
                };
                for group in session.list_tasks(db, filter) {
                    menu::print_tasks(con, group.tasks, group.heading, &username);
                }
            }
            4 => {
                let sorted = session.tasks_sorted_by(db, DateField::DueDate);
                menu::print_tasks(con, sorted.iter(), "Tasks by Due Date", &username);
            }
            5 => {
                let sorted = session.tasks_sorted_by(db, DateField::StartDate);
                menu::print_tasks(con, sorted.iter(), "Tasks by Start Date", &username);
            }
            _ => return,
        }
    }
}

/// Prompt for a task id and run the complete/update/delete loop on it.
fn select_task<R: BufRead, W: Write>(db: &mut Database, con: &mut Console<R, W>, session: &Session) {
    let raw = con.read_integer("Enter the task ID: ");
    let id = match u64::try_from(raw) {
        Ok(id) => id,
        Err(_) => {
            con.write_line("Invalid task ID.");
            return;
        }
    };
    if let Err(e) = session.find_task(db, id) {
        con.write_line(&e.to_string());
        return;
    }

    loop {
        let Ok(task) = session.find_task(db, id) else {
            return;
        };
        menu::print_task(con, task);
        menu::select_menu(con);
        match con.read_integer_in("Enter your choice: ", 1, 4) {
            1 => {
                match session.complete_task(db, id) {
                    Ok(()) => con.write_line("Task completed successfully."),
                    Err(e) => con.write_line(&e.to_string()),
                }
                return;
            }
            2 => update_task(db, con, session, id),
            3 => {
                match session.delete_task(db, id) {
                    Ok(()) => con.write_line("Task deleted successfully."),
                    Err(e) => con.write_line(&e.to_string()),
                }
                return;
            }
            _ => return,
        }
    }
}

/// The field-edit loop. Each edit is applied as soon as it is collected.
fn update_task<R: BufRead, W: Write>(
    db: &mut Database,
    con: &mut Console<R, W>,
    session: &Session,
    id: u64,
) {
    loop {
        menu::update_menu(con);
        let edit = match con.read_integer_in("Enter your choice: ", 1, 8) {
            1 => TaskEdit::Title(con.read_string("Enter the new title: ")),
            2 => TaskEdit::Description(con.read_string("Enter the new description: ")),
            3 => TaskEdit::Status(TaskStatus::from(con.read_integer_in(
                "Enter the new status (1. TODO, 2. IN PROGRESS, 3. COMPLETED): ",
                1,
                3,
            ))),
            4 => TaskEdit::Priority(Priority::from(con.read_integer_in(
                "Enter the new priority (1. URGENT, 2. HIGH, 3. NORMAL, 4. LOW): ",
                1,
                4,
            ))),
            5 => TaskEdit::DueDate(con.read_date("Enter the new due date: ")),
            6 => TaskEdit::StartDate(con.read_date("Enter the new start date: ")),
            7 => TaskEdit::Tags(con.read_tags("Enter the new tags (separated by comma): ")),
            _ => return,
        };
        if let Err(e) = session.apply_edit(db, id, edit) {
            con.write_line(&e.to_string());
        }
    }
}
