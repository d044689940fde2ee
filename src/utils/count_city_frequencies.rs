use crate::types::{CityFrequencyMap, Mention};

/// Counts occurrences of each distinct mention spelling.
pub fn count_city_frequencies(mentions: &[Mention]) -> CityFrequencyMap {
    let mut frequencies = CityFrequencyMap::new();

    for mention in mentions {
        *frequencies.entry(mention.clone()).or_insert(0) += 1;
    }

    frequencies
}
