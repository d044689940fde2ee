use crate::models::tokenizer::tokenize_place_name;
use crate::models::Error;
use crate::types::GazetteerList;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

/// Reads a gazetteer from a CSV file. Files ending in `.gz` are decompressed on
/// the fly; gazetteer dumps commonly ship gzip-compressed.
pub fn read_gazetteer_from_path(path: &Path) -> Result<GazetteerList, Error> {
    let mut file = File::open(path)
        .map_err(|e| Error::ParserError(format!("Failed to open gazetteer {}: {}", path.display(), e)))?;

    let mut contents = String::new();
    if path.extension().map_or(false, |ext| ext == "gz") {
        let mut decoder = GzDecoder::new(file);
        decoder
            .read_to_string(&mut contents)
            .map_err(|e| Error::ParserError(format!("Failed to decompress {}: {}", path.display(), e)))?;
    } else {
        file.read_to_string(&mut contents)?;
    }

    read_gazetteer_from_string(&contents)
}

/// Parses gazetteer CSV content with `City Name`, `Country Code` and
/// `Alternate Names` columns; alternates are comma-separated within the field.
pub fn read_gazetteer_from_string(csv: &str) -> Result<GazetteerList, Error> {
    let mut gazetteer = GazetteerList::new();

    // Use a cursor to simulate a file reader from the string
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(csv));

    // Extract column headers
    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let header_position = |name: &str| headers.iter().position(|h| h == name);

    let city_name_index = header_position("City Name")
        .ok_or_else(|| Error::ParserError("Missing 'City Name' column".to_string()))?;
    let country_code_index = header_position("Country Code");
    let alternate_names_index = header_position("Alternate Names");

    for record in reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let city_name = record
            .get(city_name_index)
            .ok_or_else(|| Error::ParserError("Missing 'City Name' field".to_string()))?;

        let country_code = country_code_index
            .and_then(|index| record.get(index))
            .filter(|code| !code.is_empty())
            .map(|code| code.to_string());

        let alternate_names: Vec<String> = match alternate_names_index.and_then(|index| record.get(index)) {
            Some(names) => names
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
            None => Vec::new(),
        };

        gazetteer.push((city_name.to_string(), country_code, alternate_names));
    }

    Ok(gazetteer)
}

/// Token-sequence index over a `GazetteerList`.
///
/// Every canonical name and alternate becomes one key sequence, grouped by first
/// key so the extractor only examines sequences that can start at a given token.
pub struct Gazetteer {
    first_key_index: HashMap<String, Vec<usize>>,
    sequences: Vec<Vec<String>>,
}

impl Gazetteer {
    pub fn from_list(list: &GazetteerList) -> Self {
        let mut first_key_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut sequences = Vec::new();

        for (city_name, _country_code, alternate_names) in list {
            for name in std::iter::once(city_name).chain(alternate_names.iter()) {
                let keys = tokenize_place_name(name);
                if keys.is_empty() {
                    continue;
                }

                let sequence_id = sequences.len();
                first_key_index
                    .entry(keys[0].clone())
                    .or_default()
                    .push(sequence_id);
                sequences.push(keys);
            }
        }

        Gazetteer {
            first_key_index,
            sequences,
        }
    }

    /// All indexed name sequences starting with `first_key`.
    pub fn candidate_sequences(&self, first_key: &str) -> Vec<&[String]> {
        self.first_key_index
            .get(first_key)
            .map(|sequence_ids| {
                sequence_ids
                    .iter()
                    .map(|&id| self.sequences[id].as_slice())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Total number of indexed name sequences (canonical names plus alternates).
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }
}
