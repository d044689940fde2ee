use crate::models::Error;
use crate::types::{CaseCount, StateName};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// One row of the per-county daily case table.
///
/// `state` and `cases` are required; the remaining columns are carried through
/// untouched so the raw-row export reproduces the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRow {
    pub date: Option<String>,
    pub county: Option<String>,
    pub state: StateName,
    pub fips: Option<String>,
    pub cases: CaseCount,
    pub deaths: Option<CaseCount>,
}

pub fn read_case_rows_from_path(path: &Path) -> Result<Vec<CaseRow>, Error> {
    let file = File::open(path)
        .map_err(|e| Error::ParserError(format!("Failed to open {}: {}", path.display(), e)))?;
    read_case_rows(file)
}

pub fn read_case_rows_from_string(csv: &str) -> Result<Vec<CaseRow>, Error> {
    read_case_rows(Cursor::new(csv))
}

fn read_case_rows<R: Read>(input: R) -> Result<Vec<CaseRow>, Error> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let header_position = |name: &str| headers.iter().position(|h| h == name);

    let state_index = header_position("state")
        .ok_or_else(|| Error::ParserError("Missing 'state' column".to_string()))?;
    let cases_index = header_position("cases")
        .ok_or_else(|| Error::ParserError("Missing 'cases' column".to_string()))?;
    let date_index = header_position("date");
    let county_index = header_position("county");
    let fips_index = header_position("fips");
    let deaths_index = header_position("deaths");

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let state = record
            .get(state_index)
            .ok_or_else(|| Error::ParserError("Missing 'state' field".to_string()))?
            .to_string();

        let cases_field = record.get(cases_index).unwrap_or("").trim();
        let cases: CaseCount = cases_field.parse().map_err(|_| {
            Error::ParserError(format!("Unparseable case count: {:?}", cases_field))
        })?;

        let optional_field = |index: Option<usize>| {
            index
                .and_then(|i| record.get(i))
                .filter(|value| !value.is_empty())
                .map(|value| value.to_string())
        };

        let deaths = match optional_field(deaths_index) {
            Some(value) => Some(value.trim().parse::<CaseCount>().map_err(|_| {
                Error::ParserError(format!("Unparseable death count: {:?}", value))
            })?),
            None => None,
        };

        rows.push(CaseRow {
            date: optional_field(date_index),
            county: optional_field(county_index),
            state,
            fips: optional_field(fips_index),
            cases,
            deaths,
        });
    }

    Ok(rows)
}

/// Sums case counts per state across all rows.
pub fn total_cases_by_state(rows: &[CaseRow]) -> HashMap<StateName, CaseCount> {
    let mut totals: HashMap<StateName, CaseCount> = HashMap::new();

    for row in rows {
        *totals.entry(row.state.clone()).or_insert(0) += row.cases;
    }

    totals
}

/// Sorts state totals by case count (descending); ties fall back to state name
/// (ascending) for deterministic order.
pub fn rank_states_by_total(totals: HashMap<StateName, CaseCount>) -> Vec<(StateName, CaseCount)> {
    let mut ranked: Vec<(StateName, CaseCount)> = totals.into_iter().collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    ranked
}

/// Filters the raw (un-aggregated) rows to a single state, exactly as the
/// source-table filter does. The export intentionally contains per-row data,
/// not the aggregated totals.
pub fn filter_rows_by_state<'a>(rows: &'a [CaseRow], state: &str) -> Vec<&'a CaseRow> {
    rows.iter().filter(|row| row.state == state).collect()
}

/// Writes filtered raw rows back out with the source table's column layout.
pub fn write_case_rows_csv(rows: &[&CaseRow], path: &Path) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "county", "state", "fips", "cases", "deaths"])?;

    for row in rows {
        writer.write_record([
            row.date.as_deref().unwrap_or(""),
            row.county.as_deref().unwrap_or(""),
            row.state.as_str(),
            row.fips.as_deref().unwrap_or(""),
            &row.cases.to_string(),
            &row.deaths.map(|deaths| deaths.to_string()).unwrap_or_default(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes ranked aggregated totals as `state,total_cases` rows.
pub fn write_state_totals_csv(
    ranked: &[(StateName, CaseCount)],
    path: &Path,
) -> Result<(), Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["state", "total_cases"])?;

    for (state, total) in ranked {
        writer.write_record([state.as_str(), &total.to_string()])?;
    }

    writer.flush()?;
    Ok(())
}
