use city_mapper::{
    filter_rows_by_state, rank_states_by_total, read_case_rows_from_string, total_cases_by_state,
    write_case_rows_csv, write_state_totals_csv, Error,
};
use std::fs;

const CASES_CSV: &str = "\
date,county,state,fips,cases,deaths
2020-03-14,Westchester,New York,36119,10,0
2020-03-15,New York City,New York,,5,1
2020-03-15,Los Angeles,California,06037,7,0
";

#[test]
fn test_total_cases_by_state() {
    let rows = read_case_rows_from_string(CASES_CSV).expect("Failed to parse case CSV");

    let totals = total_cases_by_state(&rows);

    assert_eq!(totals.get("New York"), Some(&15));
    assert_eq!(totals.get("California"), Some(&7));
    assert_eq!(totals.len(), 2);
}

#[test]
fn test_rank_states_descending() {
    let rows = read_case_rows_from_string(CASES_CSV).expect("Failed to parse case CSV");

    let ranked = rank_states_by_total(total_cases_by_state(&rows));

    assert_eq!(
        ranked,
        vec![
            ("New York".to_string(), 15),
            ("California".to_string(), 7),
        ]
    );
}

#[test]
fn test_filter_exports_raw_rows_not_totals() {
    let rows = read_case_rows_from_string(CASES_CSV).expect("Failed to parse case CSV");

    let filtered = filter_rows_by_state(&rows, "New York");

    // Two source rows, not one aggregated total.
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered[0].cases, 10);
    assert_eq!(filtered[1].cases, 5);

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_path = dir.path().join("concat_state.csv");
    write_case_rows_csv(&filtered, &out_path).expect("Failed to write filtered rows");

    let written = fs::read_to_string(&out_path).expect("Failed to read export");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3); // header plus the two raw rows
    assert!(lines[1].contains("Westchester"));
    assert!(lines[2].contains("New York City"));
}

#[test]
fn test_filter_unknown_state_is_empty() {
    let rows = read_case_rows_from_string(CASES_CSV).expect("Failed to parse case CSV");

    let filtered = filter_rows_by_state(&rows, "Atlantis");

    assert!(filtered.is_empty());
}

#[test]
fn test_write_state_totals() {
    let rows = read_case_rows_from_string(CASES_CSV).expect("Failed to parse case CSV");
    let ranked = rank_states_by_total(total_cases_by_state(&rows));

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_path = dir.path().join("state_totals.csv");
    write_state_totals_csv(&ranked, &out_path).expect("Failed to write totals");

    let written = fs::read_to_string(&out_path).expect("Failed to read export");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "state,total_cases");
    assert_eq!(lines[1], "New York,15");
    assert_eq!(lines[2], "California,7");
}

#[test]
fn test_missing_state_column_is_parser_error() {
    let result = read_case_rows_from_string("cases\n5\n");

    assert!(matches!(result, Err(Error::ParserError(_))));
}

#[test]
fn test_unparseable_case_count_is_parser_error() {
    let result = read_case_rows_from_string("state,cases\nNew York,many\n");

    assert!(matches!(result, Err(Error::ParserError(_))));
}
