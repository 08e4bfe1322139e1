use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const SERVICES: &str = "\
Ref,Country,Centre,Service
1,FR,Paris,Support
2,DE,Berlin,Sales
3,fr,Lyon,Billing
";

/// Workspace with an empty config dir so the user's real config is never read.
fn workspace(services: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    if let Some(content) = services {
        fs::write(dir.path().join("services.csv"), content).unwrap();
    }
    dir
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_svcbycountry"))
        .current_dir(dir)
        .arg("--config-dir")
        .arg(dir.join("config"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_query_country_lists_matching_rows() {
    let dir = workspace(Some(SERVICES));
    let output = run(dir.path(), &["query:country", "fr"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("| Ref | Country | Centre | Service |"));
    assert!(out.contains("| 1   | FR      | Paris  | Support |"));
    assert!(out.contains("| 3   | fr      | Lyon   | Billing |"));
    assert!(!out.contains("Berlin"));
    assert!(out.find("Paris").unwrap() < out.find("Lyon").unwrap());
}

#[test]
fn test_query_country_no_match_exits_zero() {
    let dir = workspace(Some(SERVICES));
    let output = run(dir.path(), &["query", "jp"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No services found for country code: JP\n");
}

#[test]
fn test_summary_services_counts_by_raw_country() {
    let dir = workspace(Some(SERVICES));
    let output = run(dir.path(), &["summary:services"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("| Country | Total Services |"));
    let fr = out.find("| FR ").unwrap();
    let de = out.find("| DE ").unwrap();
    let fr_lower = out.find("| fr ").unwrap();
    assert!(fr < de && de < fr_lower);
}

#[test]
fn test_latin1_cells_do_not_abort_commands() {
    let dir = workspace(None);
    fs::write(
        dir.path().join("services.csv"),
        b"Ref,Country,Centre,Service\n1,FR,Paris,Support\n2,CH,Z\xFCrich,Sales\n",
    )
    .unwrap();

    let query = run(dir.path(), &["query:country", "fr"]);
    assert_eq!(query.status.code(), Some(0));
    assert!(stdout(&query).contains("| 1   | FR      | Paris  | Support |"));

    let summary = run(dir.path(), &["summary:services"]);
    assert_eq!(summary.status.code(), Some(0));
    let out = stdout(&summary);
    assert!(out.contains("| FR      | 1              |"));
    assert!(out.contains("| CH      | 1              |"));
}

#[test]
fn test_missing_services_file_exits_one() {
    let dir = workspace(None);

    let query = run(dir.path(), &["query:country", "fr"]);
    assert_eq!(query.status.code(), Some(1));
    assert!(stdout(&query).starts_with("Error: Cannot read services file"));

    let summary = run(dir.path(), &["summary:services"]);
    assert_eq!(summary.status.code(), Some(1));
    assert!(stdout(&summary).starts_with("Error: "));
}

#[test]
fn test_data_flag_overrides_default_location() {
    let dir = workspace(None);
    let custom = dir.path().join("other.csv");
    fs::write(&custom, "Country,Service\nIT,Support\n").unwrap();

    let output = run(dir.path(), &["summary", "--data", custom.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("| IT      | 1              |"));
}

#[test]
fn test_config_file_sets_data_location() {
    let dir = workspace(None);
    fs::write(dir.path().join("config").join("nordic.csv"), "Country\nSE\nNO\nSE\n").unwrap();
    fs::write(
        dir.path().join("config").join("config.toml"),
        "data_file = \"nordic.csv\"\n",
    )
    .unwrap();

    let output = run(dir.path(), &["summary:services"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("| SE      | 2              |"));
    assert!(out.contains("| NO      | 1              |"));
}

#[test]
fn test_invalid_config_file_fails() {
    let dir = workspace(Some(SERVICES));
    fs::write(dir.path().join("config").join("config.toml"), "data_file = [").unwrap();

    let output = run(dir.path(), &["summary:services"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_query_without_argument_is_usage_error() {
    let dir = workspace(Some(SERVICES));
    let output = run(dir.path(), &["query:country"]);
    assert_eq!(output.status.code(), Some(2));
}
