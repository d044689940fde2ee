use city_mapper::types::{Coordinate, GazetteerList};
use city_mapper::{GeocodeError, Geocoder};
use csv::Reader;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Utility to load a gazetteer from a CSV file for testing and benchmarking.
/// Columns are positional: city name, country code, comma-separated alternates.
pub fn load_gazetteer_from_file(file_path: &str) -> Result<GazetteerList, Box<dyn Error>> {
    let mut gazetteer = GazetteerList::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;

        let city_name = match record.get(0) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                eprintln!("Skipping invalid row: {:?}", record);
                continue;
            }
        };

        let country_code = record
            .get(1)
            .filter(|code| !code.is_empty())
            .map(|code| code.to_string());

        let alternate_names: Vec<String> = record
            .get(2)
            .map(|names| {
                names
                    .split(',')
                    .map(|name| name.trim().to_string())
                    .filter(|name| !name.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        gazetteer.push((city_name, country_code, alternate_names));
    }

    Ok(gazetteer)
}

/// Extracts the expected mentions from fixture lines starting with `EXPECTED:`,
/// in file order, so fixtures carry their own expectations.
pub fn get_expected_mentions(file_path: &Path) -> Vec<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.starts_with("EXPECTED:") {
                Some(line.replace("EXPECTED:", "").trim().to_string())
            } else {
                None
            }
        })
        .collect()
}

/// Strips `EXPECTED:` and `COMMENT:` annotation lines from fixture content
/// before it is handed to the extractor.
pub fn filter_annotation_lines(raw_text: &str) -> String {
    raw_text
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("EXPECTED:")
                && !line.trim_start().starts_with("COMMENT:")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Deterministic in-memory geocoder for tests.
///
/// Tracks how many lookups were made per place name so tests can assert that
/// duplicate mentions are resolved only once.
pub struct FakeGeocoder {
    places: HashMap<String, Option<Coordinate>>,
    timeouts: HashSet<String>,
    call_counts: RefCell<HashMap<String, usize>>,
}

impl FakeGeocoder {
    pub fn new() -> Self {
        FakeGeocoder {
            places: HashMap::new(),
            timeouts: HashSet::new(),
            call_counts: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_place(mut self, name: &str, coordinate: Coordinate) -> Self {
        self.places.insert(name.to_string(), Some(coordinate));
        self
    }

    pub fn with_no_match(mut self, name: &str) -> Self {
        self.places.insert(name.to_string(), None);
        self
    }

    pub fn with_timeout(mut self, name: &str) -> Self {
        self.timeouts.insert(name.to_string());
        self
    }

    pub fn call_count(&self, name: &str) -> usize {
        self.call_counts.borrow().get(name).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.call_counts.borrow().values().sum()
    }
}

impl Default for FakeGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Geocoder for FakeGeocoder {
    fn geocode(&self, place_name: &str) -> Result<Option<Coordinate>, GeocodeError> {
        *self
            .call_counts
            .borrow_mut()
            .entry(place_name.to_string())
            .or_insert(0) += 1;

        if self.timeouts.contains(place_name) {
            return Err(GeocodeError::Timeout(format!(
                "Simulated timeout for {}",
                place_name
            )));
        }

        // Unknown names behave like a "no match" response.
        Ok(self.places.get(place_name).copied().flatten())
    }
}
