use city_mapper::{count_city_frequencies, extract_city_mentions, read_gazetteer_from_path};
use std::fs;
use std::path::Path;
use test_utils::{filter_annotation_lines, get_expected_mentions, load_gazetteer_from_file};

#[test]
fn test_extract_mentions_in_order_with_duplicates() {
    let gazetteer = load_gazetteer_from_file("tests/test_gazetteer.csv")
        .expect("Failed to load gazetteer from CSV");

    let test_file_path = "tests/test_files/test_file_1.txt";
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");
    let text = filter_annotation_lines(&raw_text);

    let mentions = extract_city_mentions(&text, &gazetteer).expect("Extraction failed");
    let expected = get_expected_mentions(Path::new(test_file_path));

    // Order of appearance and duplicates must both be preserved.
    assert_eq!(mentions, expected, "Mismatch in extracted mention sequence");
}

#[test]
fn test_mention_count_matches_occurrences() {
    let gazetteer = load_gazetteer_from_file("tests/test_gazetteer.csv")
        .expect("Failed to load gazetteer from CSV");

    let raw_text = fs::read_to_string("tests/test_files/test_file_1.txt")
        .expect("Failed to read test file");
    let text = filter_annotation_lines(&raw_text);

    let mentions = extract_city_mentions(&text, &gazetteer).expect("Extraction failed");
    let frequencies = count_city_frequencies(&mentions);

    assert_eq!(frequencies.get("Paris"), Some(&2));
    assert_eq!(frequencies.get("New York"), Some(&2));
    assert_eq!(frequencies.get("London"), Some(&1));
    assert_eq!(frequencies.get("Rome"), Some(&1));
    assert_eq!(frequencies.len(), 4);
}

#[test]
fn test_extract_alternate_names_and_capitalization_rules() {
    let gazetteer = load_gazetteer_from_file("tests/test_gazetteer.csv")
        .expect("Failed to load gazetteer from CSV");

    let test_file_path = "tests/test_files/test_file_2.txt";
    let raw_text = fs::read_to_string(test_file_path).expect("Failed to read test file");
    let text = filter_annotation_lines(&raw_text);

    let mentions = extract_city_mentions(&text, &gazetteer).expect("Extraction failed");
    let expected = get_expected_mentions(Path::new(test_file_path));

    assert_eq!(mentions, expected, "Mismatch in extracted mention sequence");
}

#[test]
fn test_empty_text_produces_empty_mention_list() {
    let gazetteer = load_gazetteer_from_file("tests/test_gazetteer.csv")
        .expect("Failed to load gazetteer from CSV");

    let mentions = extract_city_mentions("", &gazetteer).expect("Extraction failed");

    assert!(mentions.is_empty());
}

#[test]
fn test_text_without_places_produces_empty_mention_list() {
    let gazetteer = load_gazetteer_from_file("tests/test_gazetteer.csv")
        .expect("Failed to load gazetteer from CSV");

    let mentions = extract_city_mentions("Nothing here resembles a place at all.", &gazetteer)
        .expect("Extraction failed");

    assert!(mentions.is_empty());
}

#[test]
fn test_gzip_gazetteer_loads_like_plain_csv() {
    let plain = read_gazetteer_from_path(Path::new("tests/test_gazetteer.csv"))
        .expect("Failed to load plain gazetteer");
    let gzipped = read_gazetteer_from_path(Path::new("tests/fixtures/test_gazetteer.csv.gz"))
        .expect("Failed to load gzipped gazetteer");

    assert_eq!(plain, gzipped);
}
