use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with deterministic flags for testing
fn recall_cmd() -> Command {
    let mut cmd = Command::cargo_bin("recall").expect("Failed to find recall binary");
    cmd.args(["--no-color", "--owner", "tester"]);
    cmd
}

/// Extract a created resource ID from command output
fn extract_id_from_output(output: &str) -> String {
    output
        .lines()
        .find_map(|line| line.strip_prefix("Created topic with ID: "))
        .expect("Output should contain a created topic ID")
        .trim()
        .to_string()
}

#[test]
fn test_cli_create_topic_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    recall_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "topic",
            "create",
            "Test Title",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Title"))
        .stdout(predicate::str::contains("Created topic with ID: 1"));
}

#[test]
fn test_cli_create_topic_with_description() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    recall_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "topic",
            "create",
            "Test Title With Description",
            "--description",
            "A detailed description",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Test Title With Description"))
        .stdout(predicate::str::contains("A detailed description"));
}

#[test]
fn test_cli_create_topic_with_first_review_date() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    recall_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "topic",
            "create",
            "Dated Topic",
            "--first-review",
            "2099-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2099-06-01"));
}

#[test]
fn test_cli_list_empty_topics() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    recall_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "topic", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics found."));
}

#[test]
fn test_cli_list_topics() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    recall_cmd()
        .args(["--database-file", db_arg, "topic", "create", "List Title"])
        .assert()
        .success();

    recall_cmd()
        .args(["--database-file", db_arg, "topic", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Topics"))
        .stdout(predicate::str::contains("List Title"));
}

#[test]
fn test_cli_show_topic() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let output = recall_cmd()
        .args([
            "--database-file",
            db_arg,
            "topic",
            "create",
            "Show Title",
            "--description",
            "Test Description",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8(output).expect("Invalid UTF-8");
    let topic_id = extract_id_from_output(&output_str);

    recall_cmd()
        .args(["--database-file", db_arg, "topic", "show", &topic_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Show Title"))
        .stdout(predicate::str::contains("Test Description"))
        .stdout(predicate::str::contains("○ Pending"));
}

#[test]
fn test_cli_show_topic_not_found() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    recall_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "topic", "show", "999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Topic with ID 999 not found"));
}

#[test]
fn test_cli_update_topic() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let output = recall_cmd()
        .args(["--database-file", db_arg, "topic", "create", "Old Title"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8(output).expect("Invalid UTF-8");
    let topic_id = extract_id_from_output(&output_str);

    recall_cmd()
        .args([
            "--database-file",
            db_arg,
            "topic",
            "update",
            &topic_id,
            "--title",
            "New Title",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated topic with ID:"))
        .stdout(predicate::str::contains("Updated title"))
        .stdout(predicate::str::contains("New Title"));
}

#[test]
fn test_cli_delete_topic_requires_confirm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    let output = recall_cmd()
        .args(["--database-file", db_arg, "topic", "create", "Doomed"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let output_str = String::from_utf8(output).expect("Invalid UTF-8");
    let topic_id = extract_id_from_output(&output_str);

    // Without --confirm the deletion is rejected
    recall_cmd()
        .args(["--database-file", db_arg, "topic", "delete", &topic_id])
        .assert()
        .failure();

    // With --confirm it goes through
    recall_cmd()
        .args([
            "--database-file",
            db_arg,
            "topic",
            "delete",
            &topic_id,
            "--confirm",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted topic 'Doomed'"));
}

#[test]
fn test_cli_complete_revision() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    recall_cmd()
        .args(["--database-file", db_arg, "topic", "create", "Review Me"])
        .assert()
        .success();

    // The seed revision of the first topic gets ID 1
    recall_cmd()
        .args(["--database-file", db_arg, "complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed revision 1"))
        .stdout(predicate::str::contains("Next review scheduled for"));

    // Completing it again fails: the revision is no longer pending
    recall_cmd()
        .args(["--database-file", db_arg, "complete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not pending"));
}

#[test]
fn test_cli_postpone_revision() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    recall_cmd()
        .args(["--database-file", db_arg, "topic", "create", "Defer Me"])
        .assert()
        .success();

    recall_cmd()
        .args(["--database-file", db_arg, "postpone", "1", "--days", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Postponed revision 1"))
        .stdout(predicate::str::contains("Review moved to"));
}

#[test]
fn test_cli_review_list_and_show() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    recall_cmd()
        .args(["--database-file", db_arg, "topic", "create", "Listed"])
        .assert()
        .success();

    recall_cmd()
        .args(["--database-file", db_arg, "review", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Revisions"))
        .stdout(predicate::str::contains("○ Pending"));

    recall_cmd()
        .args(["--database-file", db_arg, "review", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interval: 1 day(s)"));

    // Status filter narrows the listing
    recall_cmd()
        .args([
            "--database-file",
            db_arg,
            "review",
            "list",
            "--status",
            "completed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No revisions found."));
}

#[test]
fn test_cli_due_overdue_and_stats() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    recall_cmd()
        .args(["--database-file", db_arg, "topic", "create", "Fresh"])
        .assert()
        .success();

    // The seed is due tomorrow, so today's queue is empty
    recall_cmd()
        .args(["--database-file", db_arg, "due"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Due Today"))
        .stdout(predicate::str::contains("No revisions found."));

    recall_cmd()
        .args(["--database-file", db_arg, "overdue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Overdue Reviews"))
        .stdout(predicate::str::contains("No revisions found."));

    recall_cmd()
        .args(["--database-file", db_arg, "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Review Statistics"))
        .stdout(predicate::str::contains("Topics: 1"));
}

#[test]
fn test_cli_now() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    recall_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "now"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Server Time"))
        .stdout(predicate::str::contains("Timezone:"));
}

#[test]
fn test_cli_owner_isolation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    recall_cmd()
        .args(["--database-file", db_arg, "topic", "create", "Mine"])
        .assert()
        .success();

    // A different owner sees an empty list in the same database
    let mut other = Command::cargo_bin("recall").expect("Failed to find recall binary");
    other
        .args(["--no-color", "--owner", "somebody-else"])
        .args(["--database-file", db_arg, "topic", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics found."));
}

#[test]
fn test_cli_default_command_is_due() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    recall_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Due Today"));
}
