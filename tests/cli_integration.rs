#[allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create tempdir"),
        }
    }

    fn db_path(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }

    /// Run the binary with the given stdin script against the temp database.
    fn run(&self, script: &str) -> assert_cmd::assert::Assert {
        Command::cargo_bin("tasky")
            .expect("binary")
            .arg("--db")
            .arg(self.db_path())
            .write_stdin(script)
            .assert()
    }

    fn read_db(&self) -> Value {
        let raw = fs::read_to_string(self.db_path()).expect("read db file");
        serde_json::from_str(&raw).unwrap_or_else(|e| panic!("parse db failed: {e}\nraw: {raw}"))
    }
}

// Register alice and add one task, then log out and exit.
const REGISTER_AND_ADD: &str = "2\nalice\nsecret\n\
                                1\nBuy milk\nTwo bottles\n1\n2\n2024-05-01\n2024-05-10\nhome,errands\n\
                                4\n3\n";

// ─── tests ─────────────────────────────────────────────────────────

#[test]
fn exit_on_empty_store_writes_an_empty_database() {
    let env = TestEnv::new();
    env.run("3\n").success();
    let db = env.read_db();
    assert_eq!(db["users"], serde_json::json!([]));
    assert_eq!(db["tasks"], serde_json::json!([]));
}

#[test]
fn register_and_add_persists_the_task() {
    let env = TestEnv::new();
    env.run(REGISTER_AND_ADD)
        .success()
        .stdout(predicate::str::contains("Registration successful."));

    let db = env.read_db();
    assert_eq!(db["users"][0]["username"], "alice");
    assert_eq!(db["users"][0]["password"], "secret");

    let task = &db["tasks"][0];
    assert_eq!(task["username"], "alice");
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["description"], "Two bottles");
    assert_eq!(task["status"], 1);
    assert_eq!(task["priority"], 2);
    assert_eq!(task["start_date"], "2024-05-01");
    assert_eq!(task["due_date"], "2024-05-10");
    assert_eq!(task["tags"], serde_json::json!(["home", "errands"]));
    assert!(task.get("id").is_none(), "ids must stay out of the file");
}

#[test]
fn a_second_run_logs_in_and_completes_the_task() {
    let env = TestEnv::new();
    env.run(REGISTER_AND_ADD).success();

    env.run("1\nalice\nsecret\n3\n1\n1\n4\n3\n")
        .success()
        .stdout(predicate::str::contains("Login successful."))
        .stdout(predicate::str::contains("Task completed successfully."));

    let db = env.read_db();
    assert_eq!(db["tasks"][0]["status"], 3);
}

#[test]
fn a_second_run_can_delete_the_task() {
    let env = TestEnv::new();
    env.run(REGISTER_AND_ADD).success();

    env.run("1\nalice\nsecret\n3\n1\n3\n4\n3\n")
        .success()
        .stdout(predicate::str::contains("Task deleted successfully."));

    let db = env.read_db();
    assert_eq!(db["tasks"], serde_json::json!([]));
    // The account itself is untouched.
    assert_eq!(db["users"][0]["username"], "alice");
}

#[test]
fn wrong_password_is_rejected() {
    let env = TestEnv::new();
    env.run(REGISTER_AND_ADD).success();

    env.run("1\nalice\nwrong\n3\n")
        .success()
        .stdout(predicate::str::contains("Invalid username or password."));
}

#[test]
fn duplicate_username_is_rejected_across_runs() {
    let env = TestEnv::new();
    env.run(REGISTER_AND_ADD).success();

    env.run("2\nalice\nother\n3\n")
        .success()
        .stdout(predicate::str::contains("Username already exists."));

    let db = env.read_db();
    assert_eq!(db["users"].as_array().unwrap().len(), 1);
}

#[test]
fn invalid_menu_input_reprompts_until_valid() {
    let env = TestEnv::new();
    env.run("abc\n9\n3\n")
        .success()
        .stdout(predicate::str::contains("Please enter a valid integer."))
        .stdout(predicate::str::contains(
            "Please enter a valid integer within the specified range.",
        ));
}

#[test]
fn view_by_due_date_lists_tasks_in_date_order() {
    let env = TestEnv::new();
    env.run(
        "2\nalice\nsecret\n\
         1\nLate task\n\n1\n3\n2024-11-01\n2024-12-01\n\n\
         1\nEarly task\n\n1\n3\n2024-01-01\n2024-01-05\n\n\
         4\n3\n",
    )
    .success();

    let assert = env.run("1\nalice\nsecret\n2\n4\n6\n4\n3\n").success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let early = out.find("Early task").expect("early task shown");
    let late = out.find("Late task").expect("late task shown");
    assert!(early < late, "due-date sort should list the earlier task first");
}

#[test]
fn completions_subcommand_prints_a_script() {
    Command::cargo_bin("tasky")
        .expect("binary")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tasky"));
}
