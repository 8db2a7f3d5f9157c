use assert_cmd::Command;
use predicates::prelude::*;

fn shelf(config_dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env("SHELF_CONFIG_DIR", config_dir.path())
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_default_lists_everything() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 12 products"))
        .stdout(predicate::str::contains("Cosmic Headphones"))
        .stdout(predicate::str::contains("Vintage Watch"));
}

#[test]
fn test_list_search_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["list", "--search", "WATCH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 products"))
        .stdout(predicate::str::contains("Smart Watch Pro"))
        .stdout(predicate::str::contains("Vintage Watch"))
        .stdout(predicate::str::contains("Cosmic Headphones").not());
}

#[test]
fn test_list_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["ls", "--min", "900", "--max", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 0 products"))
        .stdout(predicate::str::contains("No products found"))
        .stdout(predicate::str::contains("Try changing the search parameters"))
        .stdout(predicate::str::contains("No products match the current filters."));
}

#[test]
fn test_off_step_price_bounds_fail() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["list", "--min", "85", "--max", "155"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid price bounds: 85 - 155"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_on_step_price_bounds_are_inclusive() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["list", "--min", "80", "--max", "160"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Neon Backpack"))
        .stdout(predicate::str::contains("Mechanical Keyboard"))
        .stdout(predicate::str::contains("Wireless Speaker").not());
}

#[test]
fn test_list_category_and_price() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["list", "-c", "fashion", "--max", "150", "--sort", "price-low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Fashion]"))
        .stdout(predicate::str::contains("[Electronics]").not())
        .stdout(predicate::str::contains("Vintage Watch").not());
}

#[test]
fn test_unknown_category_fails() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["list", "--category", "toys"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_crossed_price_bounds_fail() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["list", "--min", "500", "--max", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid price bounds: 500 - 100"));
}

#[test]
fn test_show_out_of_stock_product() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smart Watch Pro"))
        .stdout(predicate::str::contains("Out of stock"))
        .stdout(predicate::str::contains("[ Sold out ]"));
}

#[test]
fn test_show_unknown_product_fails() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product not found: 99"));
}

#[test]
fn test_categories_with_counts() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"● All\s+12").unwrap())
        .stdout(predicate::str::is_match(r"○ Electronics\s+6").unwrap())
        .stdout(predicate::str::is_match(r"○ Fashion\s+6").unwrap());
}

#[test]
fn test_browse_session() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .arg("browse")
        .write_stdin("search watch\nsort rating\nreset\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching for \"watch\""))
        .stdout(predicate::str::contains("Found 2 products"))
        .stdout(predicate::str::contains("Sorted by Top rated"))
        .stdout(predicate::str::contains("Filters reset"));
}

#[test]
fn test_browse_keeps_going_after_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    shelf(&dir)
        .arg("browse")
        .write_stdin("fly\nprice 900 1000\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: fly"))
        .stdout(predicate::str::contains("No products found"))
        .stdout(predicate::str::contains("No products match the current filters."));
}

#[test]
fn test_config_hides_purchase_action() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "show_purchase": false, "currency": "€" }"#,
    )
    .unwrap();

    shelf(&dir)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€89"))
        .stdout(predicate::str::contains("[ Buy ]").not());
}

#[test]
fn test_broken_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    shelf(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$299"))
        .stdout(predicate::str::contains("[ Buy ]"));
}
