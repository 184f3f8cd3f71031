use assert_cmd::Command;
use predicates::prelude::*;

fn oceanui(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("oceanui").unwrap();
    cmd.env("OCEANUI_CONFIG_DIR", config_dir)
        .env_remove("COLORFGBG");
    cmd
}

#[test]
fn list_shows_the_whole_catalog() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("button-primary"))
        .stdout(predicate::str::contains("card-stats"))
        .stdout(predicate::str::contains("components"));
}

#[test]
fn category_filter_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["list", "--category", "buttons"])
        .assert()
        .success()
        .stdout(predicate::str::contains("button-primary"))
        .stdout(predicate::str::contains("card-stats").not());
}

#[test]
fn unknown_category_yields_guidance_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["list", "--category", "Widgets"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components match"));
}

#[test]
fn tag_filters_are_anded() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["list", "--tag", "stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("card-stats"))
        .stdout(predicate::str::contains("button-primary").not());

    // No record carries both tags
    oceanui(dir.path())
        .args(["list", "--tag", "stats", "--tag", "cta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No components match"));
}

#[test]
fn text_query_ranks_matches() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["list", "--query", "card"])
        .assert()
        .success()
        .stdout(predicate::str::contains("card-stats"))
        .stdout(predicate::str::contains("nav-tabs").not());
}

#[test]
fn url_state_restores_filters() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["list", "--url", "category=Buttons&tags=cta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("button-primary"))
        .stdout(predicate::str::contains("card-stats").not());
}

#[test]
fn share_prints_the_encoded_query_string() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["list", "--share", "--category", "Buttons", "--tag", "cta"])
        .assert()
        .success()
        .stdout(predicate::str::diff("category=Buttons&tags=cta\n"));
}

#[test]
fn share_of_unfiltered_state_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["list", "--share"])
        .assert()
        .success()
        .stdout(predicate::str::diff("\n"));
}

#[test]
fn view_shows_the_full_record() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["view", "button-primary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Primary Button"))
        .stdout(predicate::str::contains("Props"))
        .stdout(predicate::str::contains("JSX"))
        .stdout(predicate::str::contains("Get Started"));
}

#[test]
fn view_of_unknown_id_is_a_defined_empty_state() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["view", "ui-missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No component with id \"ui-missing\""));
}

#[test]
fn demo_aliases_resolve_to_the_same_preview() {
    let dir = tempfile::tempdir().unwrap();
    for id in ["ui-toast", "int-toast"] {
        oceanui(dir.path())
            .args(["demo", id])
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved successfully"));
    }
}

#[test]
fn records_without_a_demo_get_the_fallback() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .args(["demo", "layout-hero"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No demo available"));
}

#[test]
fn categories_start_with_the_all_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("All\n"))
        .stdout(predicate::str::contains("Buttons"));
}

#[test]
fn tags_list_the_catalog_tags() {
    let dir = tempfile::tempdir().unwrap();
    oceanui(dir.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("#cta"))
        .stdout(predicate::str::contains("#stats"));
}

#[test]
fn theme_defaults_to_light_and_persists() {
    let dir = tempfile::tempdir().unwrap();

    oceanui(dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::diff("light\n"));

    oceanui(dir.path())
        .args(["theme", "dark"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    oceanui(dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::diff("dark\n"));
}

#[test]
fn malformed_catalog_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    oceanui(dir.path())
        .args(["--catalog", path.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn duplicate_ids_in_a_catalog_file_are_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.json");
    std::fs::write(
        &path,
        r#"{"components": [
            {"id": "a", "name": "A", "category": "X"},
            {"id": "a", "name": "B", "category": "X"}
        ], "meta": {}}"#,
    )
    .unwrap();

    oceanui(dir.path())
        .args(["--catalog", path.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate component id"));
}

#[test]
fn custom_catalog_file_replaces_the_bundled_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mini.json");
    std::fs::write(
        &path,
        r#"{"components": [
            {"id": "x-one", "name": "One", "category": "Misc", "tags": ["solo"]}
        ], "meta": {"categories": ["Misc"], "tags": ["solo"]}}"#,
    )
    .unwrap();

    oceanui(dir.path())
        .args(["--catalog", path.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x-one"))
        .stdout(predicate::str::contains("button-primary").not());
}
