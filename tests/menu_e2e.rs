use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `roster` command isolated from the user's config directory and environment.
fn roster(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("ROSTER_SEED_SAMPLES")
        .env_remove("ROSTER_CONFIRM_DELETES")
        .env_remove("ROSTER_COLOR")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_statistics_for_sample_data() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .write_stdin("7\n\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Students: 5"))
        .stdout(predicate::str::contains("Average Marks: 73.50"))
        .stdout(predicate::str::contains(
            "  Alice Johnson (Computer Science) - 92.50",
        ))
        .stdout(predicate::str::contains("  F: 1 student(s) (20.0%)"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_add_then_view() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .write_stdin("1\nAda Lovelace\nMathematics\n97\n\n3\n1006\n\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student ID: 1006"))
        .stdout(predicate::str::contains("Name: Ada Lovelace"))
        .stdout(predicate::str::contains("Grade: A+"))
        .stdout(predicate::str::contains("Status: PASSING"));
}

#[test]
fn test_no_seed_starts_empty() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .arg("--no-seed")
        .write_stdin("2\n\n1\nLin\nMusic\n64\n\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found in the system."))
        .stdout(predicate::str::contains("Student ID: 1001"));
}

#[test]
fn test_delete_then_lookup() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .write_stdin("5\n1003\ny\n\n3\n1003\n\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Student deleted successfully!"))
        .stdout(predicate::str::contains("Student with ID 1003 not found!"));
}

#[test]
fn test_eof_exits_cleanly() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total students: 5"))
        .stdout(predicate::str::contains("Goodbye!").not());
}

#[test]
fn test_config_file_disables_seeding_and_confirmation() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "seed_samples = false\nconfirm_deletes = false\n").unwrap();

    roster(&home)
        .arg("--config")
        .arg(&config)
        .write_stdin("1\nLin\nMusic\n64\n\n5\n1001\n\n7\n\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Are you sure").not())
        .stdout(predicate::str::contains("No students in the system."));
}

#[test]
fn test_env_overrides_defaults() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .env("ROSTER_SEED_SAMPLES", "false")
        .write_stdin("2\n\n8\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No students found in the system."));
}

#[test]
fn test_missing_config_file_fails() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .arg("--config")
        .arg(home.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn test_print_config() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("seed_samples"))
        .stdout(predicate::str::contains("confirm_deletes"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let home = tempfile::tempdir().unwrap();
    roster(&home)
        .arg("-v")
        .write_stdin("1\nLin\nMusic\n64\n\n8\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("student added"))
        .stdout(predicate::str::contains("student added").not());
}
