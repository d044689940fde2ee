/// A single source word after cleanup.
///
/// `raw` keeps the source spelling (case preserved, punctuation stripped) so that
/// extracted mentions read exactly as the document spells them. `key` is the
/// uppercase form used for gazetteer matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceToken {
    pub raw: String,
    pub key: String,
}

/// Tokenizer function to split the text into individual word tokens.
///
/// Note: This explicitly does not modify the case of the text; the match key is
/// derived separately. Every surviving source word yields exactly one token so that
/// token adjacency mirrors word adjacency for multi-word name matching.
pub fn tokenize(text: &str) -> Vec<SourceToken> {
    text.replace("-\n", "") // Merge hyphenated words across lines
        .replace('\n', " ") // Normalize line breaks to spaces
        .replace('\r', " ") // Handle potential carriage returns
        .replace("--", " ") // Replace standalone double hyphens
        .split_whitespace()
        .filter_map(clean_word)
        .collect()
}

/// Tokenizes a gazetteer place name into its sequence of match keys.
///
/// Uses the same cleanup as `tokenize` so a gazetteer name and its occurrence in
/// a document always reduce to identical key sequences.
pub fn tokenize_place_name(name: &str) -> Vec<String> {
    tokenize(name).into_iter().map(|token| token.key).collect()
}

fn clean_word(word: &str) -> Option<SourceToken> {
    let normalized = word.replace('\u{2019}', "'");

    // Keep apostrophes through the first pass so possessive endings are still visible.
    let kept: String = normalized
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'')
        .collect();

    // Remove possessive endings ('s or trailing ') and normalize
    let without_possessive = match kept.strip_suffix("'s") {
        Some(base) => base.to_string(),
        None => kept.trim_end_matches('\'').to_string(),
    };

    let raw: String = without_possessive
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    if raw.is_empty() {
        return None;
    }

    let key = raw.to_uppercase();
    Some(SourceToken { raw, key })
}
