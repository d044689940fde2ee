use crate::types::{CityFrequency, CityName, Mention};
use crate::utils::{count_city_frequencies, dedup_mentions};

/// Ranks mentions by frequency, highest first.
///
/// Ties keep first-seen order, so the ranking is deterministic for a given
/// input order.
pub fn rank_city_frequencies(mentions: &[Mention]) -> Vec<(CityName, CityFrequency)> {
    let frequencies = count_city_frequencies(mentions);

    let mut ranked: Vec<(CityName, CityFrequency)> = dedup_mentions(mentions)
        .into_iter()
        .map(|city_name| {
            let frequency = frequencies.get(&city_name).copied().unwrap_or(0);
            (city_name, frequency)
        })
        .collect();

    // Stable sort keeps the first-seen order between equal counts.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
}
