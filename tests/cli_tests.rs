mod common;
use common::{SITES_NO_COORDS, SITES_WITH_COORDS, lqb, temp_dir, temp_out, write_csv};
use liqbook::core::intake::load_csv_path;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_sample_writes_reloadable_csv() {
    let out = temp_out("cli_sample", "csv");

    lqb()
        .args(["sample", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let table = load_csv_path(Path::new(&out)).expect("reload sample");
    let ids: Vec<&str> = table.records().iter().map(|r| r.id()).collect();
    assert_eq!(ids, ["A01", "A02", "A03"]);
    assert!(table.has_coordinates());
}

#[test]
fn test_show_uses_sample_without_input() {
    lqb()
        .arg("show")
        .assert()
        .success()
        .stdout(contains("Using sample data"))
        .stdout(contains("A02"))
        .stdout(contains("Spread/Strip foundation"));
}

#[test]
fn test_show_applies_edits() {
    let csv = write_csv("cli_show_edits", SITES_NO_COORDS);

    lqb()
        .args([
            "show",
            "--input",
            &csv,
            "--set-fl",
            "2=0.6",
            "--add",
            "C09,1.4,Soft silt",
        ])
        .assert()
        .success()
        .stdout(contains("C09"))
        .stdout(contains("Raft foundation + Monitoring"))
        .stdout(contains("Review required").not());
}

#[test]
fn test_invalid_row_edit_fails() {
    let csv = write_csv("cli_invalid_row", SITES_NO_COORDS);

    lqb()
        .args(["show", "--input", &csv, "--remove", "9"])
        .assert()
        .failure()
        .stderr(contains("Invalid row number: 9"));
}

#[test]
fn test_remove_rows_refer_to_original_numbering() {
    lqb()
        .args(["show", "--remove", "1", "--remove", "2"])
        .assert()
        .success()
        .stdout(contains("A03"))
        .stdout(contains("A01").not())
        .stdout(contains("A02").not());
}

#[test]
fn test_build_writes_pdf() {
    let csv = write_csv("cli_build", SITES_WITH_COORDS);
    let out = temp_out("cli_build", "pdf");

    lqb()
        .args([
            "build",
            "--input",
            &csv,
            "--project",
            "Bay Area",
            "--author",
            "QA",
            "--date",
            "someday",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read pdf");
    let text = String::from_utf8_lossy(&bytes);
    assert!(bytes.starts_with(b"%PDF-"));
    assert!(text.contains("Date: someday"));
    assert!(text.contains("/Count 7"));
}

#[test]
fn test_build_refuses_empty_table() {
    let csv = write_csv("cli_build_empty", "id,FL,groundType\n");
    let out = temp_out("cli_build_empty", "pdf");

    lqb()
        .args(["build", "--input", &csv, "--file", &out, "--force"])
        .assert()
        .failure()
        .stderr(contains("PDF generation failed").count(1))
        .stderr(contains("No site data provided").count(1));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_build_refuses_when_all_rows_removed() {
    let out = temp_out("cli_build_removed", "pdf");

    lqb()
        .args([
            "build", "--file", &out, "--remove", "3", "--remove", "2", "--remove", "1",
        ])
        .assert()
        .failure()
        .stderr(contains("No site data provided"));
}

#[test]
fn test_charts_writes_both_images() {
    let csv = write_csv("cli_charts", SITES_NO_COORDS);
    let dir = temp_dir("cli_charts");

    lqb()
        .args(["charts", "--input", &csv, "--out-dir"])
        .arg(&dir)
        .assert()
        .success();

    for name in ["fl_bar.png", "locations.png"] {
        let bytes = fs::read(dir.join(name)).expect("read chart");
        assert_eq!(&bytes[1..4], b"PNG");
    }
}

#[test]
fn test_table_json_contains_derived_columns() {
    let csv = write_csv("cli_table_json", SITES_WITH_COORDS);
    let out = temp_out("cli_table_json", "json");

    lqb()
        .args([
            "table", "--input", &csv, "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(4));
    assert_eq!(rows[0]["riskLevel"], "High");
    assert_eq!(rows[2]["suggestion"], "Raft foundation + Monitoring");
    assert_eq!(rows[1]["note"], serde_json::Value::Null);
}

#[test]
fn test_table_csv_round_trip() {
    let csv = write_csv("cli_table_csv", SITES_NO_COORDS);
    let out = temp_out("cli_table_csv_export", "csv");

    lqb()
        .args(["table", "--input", &csv, "--file", &out, "--set-fl", "1=1.3"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("id,FL,groundType,note,riskLevel,suggestion"));
    assert!(content.contains("C01,1.3,Soft ground,,Low,Raft foundation + Monitoring"));

    let table = load_csv_path(Path::new(&out)).expect("reload");
    assert_eq!(table.records()[1].fl(), None);
}

#[test]
fn test_config_print_with_custom_file() {
    let cfg = temp_out("cli_config", "conf");
    fs::write(&cfg, "author: Field Office\nchart_dpi: 96\n").expect("write config");

    lqb()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("author: Field Office"))
        .stdout(contains("chart_dpi: 96"))
        .stdout(contains("output_file: Liquefaction_Report_Booklet.pdf"));
}

#[test]
fn test_invalid_config_is_reported() {
    let cfg = temp_out("cli_config_bad", "conf");
    fs::write(&cfg, "chart_dpi: 5\n").expect("write config");

    lqb()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("chart_dpi must be between 50 and 600"));
}
