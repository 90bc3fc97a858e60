//! Integration tests for the `cabinet` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HEADER: &str =
    "lastName,firstName,cabinet,totalRevenue,balance,dealsBeforeMidnight,dealsAfterMidnight";

fn cabinet(base: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cabinet").unwrap();
    cmd.env("CABINET_STATS_DIR", base);
    cmd
}

fn write_csv(dir: &Path, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.join("entries.csv");
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn batch_prints_table_and_summary() {
    let temp_dir = TempDir::new().unwrap();
    let csv = write_csv(
        temp_dir.path(),
        &[
            "Ivanov,Petr,A,100,10,1,2",
            "Ivanov,Petr,A,150,20,3,4",
        ],
    );

    cabinet(temp_dir.path())
        .args(["batch", csv.to_str().unwrap(), "--date", "2026-10-16"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ivanov Petr"))
        .stdout(predicate::str::contains("+50.00 ₽"))
        .stdout(predicate::str::contains("Total revenue"))
        .stdout(predicate::str::contains("250.00 ₽"));
}

#[test]
fn batch_strategy_changes_baseline() {
    let temp_dir = TempDir::new().unwrap();
    let csv = write_csv(
        temp_dir.path(),
        &[
            "Ivanov,Petr,A,100,0,0,0",
            "Ivanov,Petr,A,130,0,0,0",
            "Ivanov,Petr,A,150,0,0,0",
        ],
    );

    cabinet(temp_dir.path())
        .args(["batch", csv.to_str().unwrap(), "--strategy", "most-recent-by-date"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+20.00 ₽"));
}

#[test]
fn batch_exports_csv() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let csv = write_csv(temp_dir.path(), &["Smirnova,Anna,Cabinet B,220000,68000,18,5"]);

    cabinet(temp_dir.path())
        .args([
            "batch",
            csv.to_str().unwrap(),
            "--date",
            "2026-10-16",
            "--export",
            "csv",
            "--output",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 records"));

    let exported = fs::read_to_string(out_dir.join("statistics_2026-10-16.csv")).unwrap();
    assert!(exported.starts_with("id,lastName,firstName"));
    assert!(exported.contains("Smirnova"));

    cabinet(temp_dir.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE"))
        .stdout(predicate::str::contains("EXPORT"));
}

#[test]
fn batch_rejects_bad_row() {
    let temp_dir = TempDir::new().unwrap();
    let csv = write_csv(
        temp_dir.path(),
        &["Ivanov,Petr,A,100,10,1,2", "Ivanov,Petr,A,lots,10,1,2"],
    );

    cabinet(temp_dir.path())
        .args(["batch", csv.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2"))
        .stderr(predicate::str::contains("totalRevenue"));

    // Nothing was submitted, so nothing was audited
    cabinet(temp_dir.path())
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("Audit log is empty."));
}

#[test]
fn batch_missing_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    cabinet(temp_dir.path())
        .args(["batch", "does-not-exist.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open"));
}

#[test]
fn config_shows_paths_and_saves() {
    let temp_dir = TempDir::new().unwrap();

    cabinet(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("first-in-store-order"))
        .stdout(predicate::str::contains("cabinet config --save"));

    cabinet(temp_dir.path())
        .args(["config", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"));

    assert!(temp_dir.path().join("config.json").exists());
}
