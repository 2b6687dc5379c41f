use chrono::{NaiveDate, TimeDelta};
use rattendview::config::{Config, LabelLang, SourceKind};
use rattendview::source::{CsvFileSource, RowSource, SourceError, gviz_csv_url, spreadsheet_id};
use rattendview::utils::date::parse_sheet_date;
use rattendview::utils::query::parse_first_query_value;
use rattendview::utils::time::parse_clock;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{temp_path, write_sheet};

#[test]
fn test_parse_clock_formats() {
    assert_eq!(parse_clock("09:00"), Some(TimeDelta::hours(9)));
    assert_eq!(parse_clock("9:05"), Some(TimeDelta::minutes(545)));
    assert_eq!(parse_clock("25:00:00"), Some(TimeDelta::hours(25)));
    assert_eq!(
        parse_clock("00:00:01.5"),
        Some(TimeDelta::milliseconds(1_500))
    );

    for bad in ["", "9", "9:5", "09:60", "09:00:60", "-1:00", "a:bc", "09:00:00:00", "09:00."] {
        assert_eq!(parse_clock(bad), None, "{bad}");
    }
}

#[test]
fn test_parse_sheet_date_formats() {
    let d = NaiveDate::from_ymd_opt(2024, 1, 5);
    for s in ["2024-01-05", "2024/1/5", "2024.01.05", "2024年1月5日", "2024-01-05T08:00:00"] {
        assert_eq!(parse_sheet_date(s), d, "{s}");
    }
    for bad in ["", "05/01/2024", "2024-02-30", "yesterday"] {
        assert_eq!(parse_sheet_date(bad), None, "{bad}");
    }
}

#[test]
fn test_query_user_id_wins_over_first_param() {
    assert_eq!(
        parse_first_query_value("tab=2&user_id=U9").as_deref(),
        Some("U9")
    );
    assert_eq!(parse_first_query_value("?uid=U3&x=1").as_deref(), Some("U3"));
    assert_eq!(
        parse_first_query_value("user_id=%E5%B1%B1%E7%94%B0+A").as_deref(),
        Some("山田 A")
    );
    assert_eq!(parse_first_query_value(""), None);
}

#[test]
fn test_spreadsheet_id_and_export_url() {
    let url = "https://docs.google.com/spreadsheets/d/1AbC_d-9/edit?hl=ja&gid=0#gid=0";
    assert_eq!(spreadsheet_id(url).as_deref(), Some("1AbC_d-9"));
    assert_eq!(spreadsheet_id("1AbC_d-9").as_deref(), Some("1AbC_d-9"));
    assert_eq!(spreadsheet_id("https://example.com/other"), None);
    assert_eq!(spreadsheet_id(""), None);

    assert_eq!(
        gviz_csv_url("1AbC", "勤務表"),
        "https://docs.google.com/spreadsheets/d/1AbC/gviz/tq?tqx=out:csv&headers=0&sheet=%E5%8B%A4%E5%8B%99%E8%A1%A8"
    );
}

#[test]
fn test_csv_source_reads_ragged_rows() {
    let path = write_sheet(
        "ragged_source",
        &["U1,2024-01-10,09:00,18:00,\"a, b\"", "U2,2024-01-11"],
    );
    let source = CsvFileSource::new(PathBuf::from(&path));

    let rows = source.fetch_all_rows().expect("rows");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][4], "a, b");
    assert_eq!(rows[1].len(), 2);
}

#[test]
fn test_csv_source_missing_file_is_not_found() {
    let source = CsvFileSource::new(PathBuf::from(temp_path("no_such_source", "csv")));
    assert!(matches!(
        source.fetch_all_rows(),
        Err(SourceError::NotFound(_))
    ));
}

#[test]
fn test_config_defaults_and_partial_file() {
    let missing = temp_path("cfg_missing", "conf");
    let cfg = Config::load_from(&PathBuf::from(&missing)).expect("defaults");
    assert_eq!(cfg.source, SourceKind::Sheet);
    assert_eq!(cfg.worksheet, "勤務表");
    assert_eq!(cfg.labels, LabelLang::Ja);

    let partial = temp_path("cfg_partial", "conf");
    fs::write(&partial, "source: csv\ncsv_path: /tmp/x.csv\ndefault_user: U4\n").expect("write");
    let cfg = Config::load_from(&PathBuf::from(&partial)).expect("partial config");
    assert_eq!(cfg.source, SourceKind::Csv);
    assert_eq!(cfg.csv_path, "/tmp/x.csv");
    assert_eq!(cfg.default_user.as_deref(), Some("U4"));
    assert_eq!(cfg.timeout_secs, 30);

    let broken = temp_path("cfg_broken", "conf");
    fs::write(&broken, "source: [nope").expect("write");
    assert!(Config::load_from(&PathBuf::from(&broken)).is_err());
}
