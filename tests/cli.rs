use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

const BAKERY_CSV: &str = "\
TransactionNo,Items,DateTime,Daypart,DayType
1,Bread,2016-10-30 09:58:11,Morning,Weekend
2,Scandinavian,2016-10-30 10:05:34,Morning,Weekend
3,Hot chocolate,2016-10-30 10:07:57,Morning,Weekend
3,Jam,2016-10-30 10:07:57,Morning,Weekend
3,Cookies,2016-10-30 10:07:57,Morning,Weekend
4,Muffin,2016-10-30 10:08:41,Morning,Weekend
5,Coffee,2016-10-31 10:13:03,Morning,Weekday
5,Pastry,2016-10-31 10:13:03,Morning,Weekday
5,Bread,2016-10-31 10:13:03,Morning,Weekday
6,Medialuna,2016-10-31 10:16:55,Morning,Weekday
6,Pastry,2016-10-31 10:16:55,Morning,Weekday
6,Muffin,2016-10-31 10:16:55,Morning,Weekday
7,Coffee,2016-10-31 13:19:32,Afternoon,Weekday
8,Tea,2016-10-31 14:00:00,Afternoon,Weekday
9,Soup,2016-10-31 19:00:00,Evening,Weekday
10,,2016-10-31 19:05:00,Evening,Weekday
";

fn fixture() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Bakery.csv");
    std::fs::write(&path, BAKERY_CSV).unwrap();
    (dir, path)
}

fn bakery(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bakery").unwrap();
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("BAKERY_LOG")
        .current_dir(home);
    cmd
}

#[test]
fn top_daypart_ranks_morning_items() {
    let (dir, csv) = fixture();
    let output = bakery(dir.path())
        .args(["top", "daypart", "morning", "--limit", "3", "--file"])
        .arg(&csv)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Top 3 items: Morning"));
    // Bread, Muffin and Pastry each sold twice; ties keep first-seen order.
    let bread = stdout.find("Bread").unwrap();
    let pastry = stdout.find("Pastry").unwrap();
    let muffin = stdout.find("Muffin").unwrap();
    assert!(bread < muffin && muffin < pastry);
    assert!(!stdout.contains("Tea"));
    assert!(!stdout.contains("Soup"));
}

#[test]
fn top_daypart_empty_result() {
    let (dir, csv) = fixture();
    bakery(dir.path())
        .args(["top", "daypart", "Night", "--file"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("No sales recorded."));
}

#[test]
fn top_daypart_rejects_unknown() {
    let (dir, csv) = fixture();
    bakery(dir.path())
        .args(["top", "daypart", "Brunch", "--file"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown daypart: Brunch"));
}

#[test]
fn top_category_filters_by_subcategory() {
    let (dir, csv) = fixture();
    bakery(dir.path())
        .args(["top", "category", "Dessert", "soft", "--file"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dessert / soft"))
        .stdout(predicate::str::contains("Pastry"))
        .stdout(predicate::str::contains("Medialuna"))
        .stdout(predicate::str::contains("Coffee").not());
}

#[test]
fn top_category_rejects_mismatched_pair() {
    let (dir, csv) = fixture();
    bakery(dir.path())
        .args(["top", "category", "Meal", "coffee", "--file"])
        .arg(&csv)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn daytype_counts_distinct_transactions() {
    let (dir, csv) = fixture();
    // Weekend: 1,2,3,4. Weekday: 5,6,7,8,9 (10 has no item and is dropped).
    bakery(dir.path())
        .args(["daytype", "--file"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekdays out-trade the weekend."));
}

#[test]
fn missing_data_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    bakery(dir.path())
        .arg("daytype")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data file 'Bakery.csv' not found"));
}

#[test]
fn classify_reports_category() {
    let dir = tempfile::tempdir().unwrap();
    bakery(dir.path())
        .args(["classify", "bread", "BREAD CRUMBS", "sandwich coffee", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bread: Dessert / bread (matched \"bread\")"))
        .stdout(predicate::str::contains("BREAD CRUMBS: Other / other"))
        .stdout(predicate::str::contains("sandwich coffee: Meal / meal (matched \"sandwich\")"));
}

#[test]
fn categories_lists_taxonomy() {
    let dir = tempfile::tempdir().unwrap();
    bakery(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning, Afternoon, Evening, Night"))
        .stdout(predicate::str::contains("sweet, crunch, soft, bread"));
}

#[test]
fn dashboard_without_terminal_prints_text() {
    let (dir, csv) = fixture();
    bakery(dir.path())
        .arg("--file")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 5 items: Morning"))
        .stdout(predicate::str::contains("Top 10 items: Drink / coffee"))
        .stdout(predicate::str::contains("Weekday vs Weekend"));
}

#[test]
fn status_shows_load_summary() {
    let (dir, csv) = fixture();
    bakery(dir.path())
        .args(["status", "--file"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("Load Summary"))
        .stdout(predicate::str::contains("Missing item"))
        .stdout(predicate::str::contains("Category Mix"));
}

#[test]
fn config_persists_settings() {
    let (dir, _csv) = fixture();
    bakery(dir.path())
        .args(["config", "--daypart-limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));
    assert!(dir.path().join(".config/bakery/settings.json").exists());

    // Default data file (Bakery.csv in the working directory) and saved limit.
    let output = bakery(dir.path())
        .args(["top", "daypart", "Morning"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Top 2 items: Morning"));
    assert!(stdout.contains("Muffin"));
    assert!(!stdout.contains("Pastry"));
}

#[test]
fn config_rejects_zero_limit() {
    let dir = tempfile::tempdir().unwrap();
    bakery(dir.path())
        .args(["config", "--category-limit", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("limits must be at least 1"));
}

#[test]
fn export_writes_report_files() {
    let (dir, csv) = fixture();
    let out = dir.path().join("reports");
    bakery(dir.path())
        .args(["export", "--file"])
        .arg(&csv)
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    let names: Vec<String> = std::fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 3);
    for prefix in ["dayparts-", "categories-", "daytype-"] {
        assert!(names.iter().any(|n| n.starts_with(prefix) && n.ends_with(".txt")));
    }
}

#[test]
fn daytype_counts_rows_without_known_daypart() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("Bakery.csv");
    std::fs::write(
        &csv,
        "TransactionNo,Items,Daypart,DayType\n1,Coffee,Morning,Weekday\n2,Cake,,Weekend\n3,Tea,Brunch,Weekend\n",
    )
    .unwrap();
    bakery(dir.path())
        .arg("daytype")
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekend trade beats weekdays!"));
}
