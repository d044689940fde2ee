use city_mapper::models::tokenizer::{tokenize, tokenize_place_name};

#[test]
fn test_tokenize_preserves_source_spelling() {
    let tokens = tokenize("The train reached Paris, then London.");

    let raw: Vec<&str> = tokens.iter().map(|token| token.raw.as_str()).collect();
    assert_eq!(raw, vec!["The", "train", "reached", "Paris", "then", "London"]);
}

#[test]
fn test_tokenize_match_keys_are_uppercase() {
    let tokens = tokenize("Paris london");

    let keys: Vec<&str> = tokens.iter().map(|token| token.key.as_str()).collect();
    assert_eq!(keys, vec!["PARIS", "LONDON"]);
}

#[test]
fn test_tokenize_strips_possessives() {
    let tokens = tokenize("London's fog and Paris\u{2019}s rain");

    assert_eq!(tokens[0].raw, "London");
    assert_eq!(tokens[3].raw, "Paris");
}

#[test]
fn test_tokenize_merges_hyphenated_words_across_lines() {
    let tokens = tokenize("Copen-\nhagen");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].raw, "Copenhagen");
}

#[test]
fn test_tokenize_drops_punctuation_only_words() {
    let tokens = tokenize("Paris -- London ... !");

    let raw: Vec<&str> = tokens.iter().map(|token| token.raw.as_str()).collect();
    assert_eq!(raw, vec!["Paris", "London"]);
}

#[test]
fn test_tokenize_place_name_key_sequences() {
    assert_eq!(tokenize_place_name("New York"), vec!["NEW", "YORK"]);
    assert_eq!(tokenize_place_name("Winston-Salem"), vec!["WINSTONSALEM"]);
    assert_eq!(tokenize_place_name("The Hague"), vec!["THE", "HAGUE"]);
}
