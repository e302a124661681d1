use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "fintrack";

fn fintrack(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINTRACK_DATA_DIR", data_dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &TempDir, args: &[&str]) {
    fintrack(data_dir)
        .args(["transaction", "add"])
        .args(args)
        .assert()
        .success()
        .stdout(contains("Created transaction"));
}

#[test]
fn init_creates_sheet_and_settings() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete"));

    let sheet = std::fs::read_to_string(dir.path().join("data").join("transactions.csv")).unwrap();
    assert!(sheet
        .starts_with("id,description,amount,type,category,date,status,createdAt,updatedAt"));
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn added_transaction_shows_in_list() {
    let dir = TempDir::new().unwrap();
    add(
        &dir,
        &["Groceries", "150,00", "-c", "ALIMENTACAO", "-d", "2024-01-20"],
    );

    fintrack(&dir)
        .args(["txn", "list", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("150.00")));
}

#[test]
fn dashboard_reports_current_week() {
    let dir = TempDir::new().unwrap();
    add(
        &dir,
        &["Salary", "5000", "-c", "SALARIO", "-d", "2024-01-05"],
    );
    add(
        &dir,
        &["Rent", "1500", "-c", "MORADIA", "-d", "2024-01-16", "--pending"],
    );

    fintrack(&dir)
        .args(["report", "dashboard", "--date", "2024-01-16", "--no-history"])
        .assert()
        .success()
        .stdout(
            contains("Current week: 2024-01-15..2024-01-21")
                .and(contains("1 pending transaction")),
        );
}

#[test]
fn dashboard_json_output() {
    let dir = TempDir::new().unwrap();
    add(
        &dir,
        &["Salary", "5000", "-c", "SALARIO", "-d", "2024-01-05"],
    );

    let output = fintrack(&dir)
        .args(["report", "dashboard", "--month", "2024-01", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["current_week"]["range"]["start"], "2024-01-01");
}

#[test]
fn unknown_category_is_rejected() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["transaction", "add", "Lunch", "20", "-c", "RESTAURANTS"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn categories_lists_both_types() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["transaction", "categories"])
        .assert()
        .success()
        .stdout(contains("MORADIA").and(contains("SALARIO")));
}

#[test]
fn export_json_writes_file() {
    let dir = TempDir::new().unwrap();
    add(
        &dir,
        &["Freelance job", "800", "-c", "FREELANCE", "-d", "2024-02-10"],
    );
    let output = dir.path().join("export.json");

    fintrack(&dir)
        .args(["export", "json", "--pretty", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Exported 1 transactions"));

    let contents = std::fs::read_to_string(&output).unwrap();
    assert!(contents.contains("\"schema_version\""));
    assert!(contents.contains("Freelance job"));
}

#[test]
fn audit_shows_created_entries() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Pharmacy", "45.90", "-c", "SAUDE", "-d", "2024-03-02"]);

    fintrack(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("CREATE").and(contains("Pharmacy")));
}

#[test]
fn config_set_week_persists() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["config", "set-week", "monday"])
        .assert()
        .success();

    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Week mode:      monday"));
}

#[test]
fn list_with_huge_page_number_is_empty() {
    let dir = TempDir::new().unwrap();
    add(&dir, &["Bus", "4.50", "-c", "TRANSPORTE", "-d", "2024-01-03"]);

    fintrack(&dir)
        .args(["txn", "list", "--page", "18446744073709551615"])
        .assert()
        .success()
        .stdout(contains("No transactions found"));
}

#[test]
fn history_window_is_bounded() {
    let dir = TempDir::new().unwrap();

    fintrack(&dir)
        .args(["report", "history", "--month", "2024-01", "--months", "3200000"])
        .assert()
        .failure()
        .stderr(contains("History window must be between 1 and 1200 months"));

    fintrack(&dir)
        .args(["report", "history", "--month", "2024-01", "-n", "3"])
        .assert()
        .success()
        .stdout(contains("Jan/24"));
}
