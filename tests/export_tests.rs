use predicates::str::contains;
use rattendview::export::{CellKind, excel_value};
use std::fs;

mod common;
use common::{no_config, rav, temp_path, write_sheet};

fn two_month_sheet(name: &str) -> String {
    write_sheet(
        name,
        &[
            "ユーザーID,日付,出勤時刻,退勤時刻,コメント",
            "U1,2024-01-10,09:00:00,18:00:00,",
            "U1,2024-01-11,22:00:00,06:00:00,night",
            "U1,2024-02-01,09:00:00,12:00:00,short day",
            "U2,2024-02-02,09:00:00,18:00:00,",
        ],
    )
}

#[test]
fn test_export_details_csv() {
    let sheet = two_month_sheet("export_details_csv");
    let cfg = no_config("export_details_csv");
    let out = temp_path("export_details_csv_out", "csv");

    rav()
        .args([
            "--config",
            &cfg,
            "--source-file",
            &sheet,
            "export",
            "--format",
            "csv",
            "--file",
            &out,
            "--month",
            "2024-01",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("date,clock_in,clock_out,duration,comment")
    );
    assert_eq!(lines.next(), Some("2024-01-10,09:00:00,18:00:00,09:00:00,"));
    assert_eq!(
        lines.next(),
        Some("2024-01-11,22:00:00,06:00:00,08:00:00,night")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_monthly_json() {
    let sheet = two_month_sheet("export_monthly_json");
    let cfg = no_config("export_monthly_json");
    let out = temp_path("export_monthly_json_out", "json");

    rav()
        .args([
            "--config",
            &cfg,
            "--source-file",
            &sheet,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--monthly",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("array");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["month"], "2024-01");
    assert_eq!(rows[0]["total"], "17:00:00");
    assert_eq!(rows[1]["month"], "2024-02");
    assert_eq!(rows[1]["total"], "12:00:00");
}

#[test]
fn test_export_monthly_json_with_user_filter() {
    let sheet = two_month_sheet("export_monthly_user");
    let cfg = no_config("export_monthly_user");
    let out = temp_path("export_monthly_user_out", "json");

    rav()
        .args([
            "--config",
            &cfg,
            "--source-file",
            &sheet,
            "export",
            "--format",
            "json",
            "--file",
            &out,
            "--monthly",
            "--user",
            "U2",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2024-02"));
    assert!(content.contains("09:00:00"));
    assert!(!content.contains("2024-01"));
}

#[test]
fn test_export_xlsx_creates_file() {
    let sheet = two_month_sheet("export_xlsx");
    let cfg = no_config("export_xlsx");
    let out = temp_path("export_xlsx_out", "xlsx");

    rav()
        .args([
            "--config",
            &cfg,
            "--source-file",
            &sheet,
            "export",
            "--format",
            "xlsx",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx written");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_requires_absolute_path() {
    let sheet = two_month_sheet("export_relative");
    let cfg = no_config("export_relative");

    rav()
        .args([
            "--config",
            &cfg,
            "--source-file",
            &sheet,
            "export",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_force_overwrites() {
    let sheet = two_month_sheet("export_force");
    let cfg = no_config("export_force");
    let out = temp_path("export_force_out", "csv");
    fs::write(&out, "old content").expect("seed output");

    rav()
        .args([
            "--config",
            &cfg,
            "--source-file",
            &sheet,
            "export",
            "--file",
            &out,
            "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("old content"));
    assert!(content.contains("short day"));
}

#[test]
fn test_export_nothing_to_export_warns() {
    let sheet = write_sheet("export_empty", &[]);
    let cfg = no_config("export_empty");
    let out = temp_path("export_empty_out", "csv");

    rav()
        .args([
            "--config",
            &cfg,
            "--source-file",
            &sheet,
            "export",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("No rows to export"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_xlsx_empty_report_warns_without_file() {
    let sheet = write_sheet("export_xlsx_empty", &[]);
    let cfg = no_config("export_xlsx_empty");
    let out = temp_path("export_xlsx_empty_out", "xlsx");

    rav()
        .args([
            "--config",
            &cfg,
            "--source-file",
            &sheet,
            "export",
            "--format",
            "xlsx",
            "--file",
            &out,
            "--monthly",
        ])
        .assert()
        .success()
        .stdout(contains("No rows to export"));

    assert!(fs::metadata(&out).is_err());
}

#[test]
fn test_export_xlsx_converts_only_date_and_clock_columns() {
    assert_eq!(
        excel_value(CellKind::Date, "2024-01-10"),
        Some(("yyyy-mm-dd", 45301.0))
    );
    assert_eq!(
        excel_value(CellKind::Date, "2024-01-10 12:00:00"),
        Some(("yyyy-mm-dd hh:mm:ss", 45301.5))
    );
    assert_eq!(excel_value(CellKind::Date, "2024-01-10 noon"), None);
    assert_eq!(
        excel_value(CellKind::Clock, "30:00:00"),
        Some(("[h]:mm:ss", 1.25))
    );
    assert_eq!(excel_value(CellKind::Clock, "night"), None);

    for comment in ["13:00", "2024-01-10", "早退"] {
        assert_eq!(excel_value(CellKind::Text, comment), None, "{comment}");
    }
}

#[test]
fn test_export_help_explains_header_names() {
    rav()
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(contains("XLSX uses the configured labels"));
}
