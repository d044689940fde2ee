use crate::types::{CityName, Mention};
use std::collections::HashSet;

/// Deduplicates a mention list while maintaining first-seen order.
///
/// Spellings are distinct: "London" and "LONDON" are separate entries, matching
/// the extractor's promise to keep source-text spelling.
pub fn dedup_mentions(mentions: &[Mention]) -> Vec<CityName> {
    let mut seen = HashSet::new();
    mentions
        .iter()
        .filter(|mention| seen.insert(mention.as_str()))
        .cloned()
        .collect()
}
