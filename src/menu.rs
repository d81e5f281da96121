//! Menu rendering and input forms.
//!
//! Pure presentation: these functions draw menus and task listings and
//! collect validated input through the console, but hold no business rules.

use std::io::{BufRead, Write};

use crate::console::Console;
use crate::fields::{format_priority, format_status, Priority, TaskStatus};
use crate::task::Task;
use crate::user::User;

fn print_line<R: BufRead, W: Write>(con: &mut Console<R, W>) {
    con.write_line("---------------------------------");
}

/// Draw a section heading between separator rules.
pub fn print_heading<R: BufRead, W: Write>(con: &mut Console<R, W>, heading: &str) {
    con.write_line("");
    print_line(con);
    con.write_line(&format!("Tasky - {heading}"));
    print_line(con);
}

/// The logged-out top-level menu.
pub fn user_menu<R: BufRead, W: Write>(con: &mut Console<R, W>) {
    print_heading(con, "Main Menu");
    con.write_line("1. Login");
    con.write_line("2. Register");
    con.write_line("3. Exit");
}

/// Collect credentials under a Login or Register heading.
pub fn login_or_register<R: BufRead, W: Write>(con: &mut Console<R, W>, heading: &str) -> User {
    print_heading(con, heading);
    let username = con.read_string("Username: ");
    let password = con.read_string("Password: ");
    User { username, password }
}

/// The logged-in main menu.
pub fn main_menu<R: BufRead, W: Write>(con: &mut Console<R, W>) {
    print_heading(con, "Main Menu");
    con.write_line("1. Add Task");
    con.write_line("2. View Task");
    con.write_line("3. Select Task");
    con.write_line("4. Logout");
}

/// The view submenu. Sorted listings live here alongside the filters.
pub fn view_menu<R: BufRead, W: Write>(con: &mut Console<R, W>) {
    print_heading(con, "View Task");
    con.write_line("1. View All Tasks");
    con.write_line("2. View Tasks by Status");
    con.write_line("3. View Tasks by Priority");
    con.write_line("4. View Tasks by Due Date");
    con.write_line("5. View Tasks by Start Date");
    con.write_line("6. Back");
}

/// The select-task submenu.
pub fn select_menu<R: BufRead, W: Write>(con: &mut Console<R, W>) {
    print_heading(con, "Select Task");
    con.write_line("1. Complete Task");
    con.write_line("2. Update Task");
    con.write_line("3. Delete Task");
    con.write_line("4. Back");
}

/// The field-edit submenu used while updating a task.
pub fn update_menu<R: BufRead, W: Write>(con: &mut Console<R, W>) {
    print_heading(con, "Update Task");
    con.write_line("1. Title");
    con.write_line("2. Description");
    con.write_line("3. Status");
    con.write_line("4. Priority");
    con.write_line("5. Due Date");
    con.write_line("6. Start Date");
    con.write_line("7. Tags");
    con.write_line("8. Back");
}

/// Print one task in full. The tags line only appears when tags exist.
pub fn print_task<R: BufRead, W: Write>(con: &mut Console<R, W>, task: &Task) {
    con.write_line("");
    con.write_line(&format!("ID: {}", task.id));
    con.write_line(&format!("Title: {}", task.title));
    con.write_line(&format!("Description: {}", task.description));
    con.write_line(&format!("Status: {}", format_status(task.status)));
    con.write_line(&format!("Priority: {}", format_priority(task.priority)));
    con.write_line(&format!("Due Date: {}", task.due_date));
    con.write_line(&format!("Start Date: {}", task.start_date));
    if !task.tags.is_empty() {
        con.write_line(&format!("Tags: {}", task.tags.join(", ")));
    }
}

/// Print a headed listing, narrowed to the given owner.
pub fn print_tasks<'a, R, W, I>(con: &mut Console<R, W>, tasks: I, heading: &str, username: &str)
where
    R: BufRead,
    W: Write,
    I: IntoIterator<Item = &'a Task>,
{
    print_heading(con, heading);
    for task in tasks {
        if task.username == username {
            print_task(con, task);
        }
    }
}

/// Collect a new task from the add-task prompt sequence. The owner and id
/// are left unset; the session fills them in.
pub fn add_task_form<R: BufRead, W: Write>(con: &mut Console<R, W>) -> Task {
    print_heading(con, "Add Task");
    let title = con.read_string("Title: ");
    let description = con.read_string("Description: ");
    let status = TaskStatus::from(con.read_integer_in(
        "Status (1. TODO, 2. IN PROGRESS, 3. COMPLETED): ",
        1,
        3,
    ));
    let priority = Priority::from(con.read_integer_in(
        "Priority (1. URGENT, 2. HIGH, 3. NORMAL, 4. LOW): ",
        1,
        4,
    ));
    let start_date = con.read_date("Start Date (YYYY-MM-DD): ");
    let due_date = con.read_date("Due Date (YYYY-MM-DD): ");
    let tags = con.read_tags("Tags (separated by commas): ");
    Task {
        id: 0,
        username: String::new(),
        title,
        description,
        status,
        priority,
        due_date,
        start_date,
        tags,
    }
}
