use crate::models::CityExtractorConfig;
use std::time::Duration;

pub const DEFAULT_CITY_EXTRACTOR_CONFIG: &CityExtractorConfig = &CityExtractorConfig {
    require_first_letter_caps: true,
    filter_single_token_stop_words: true,
};

/// How many of the most frequent mentions the frequency plot shows by default.
pub const DEFAULT_TOP_N: usize = 20;

/// Timeout for the initial document fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-request geocode timeout. Matches the two-second bound the geocoding
/// service is queried with in the reference configuration.
pub const DEFAULT_GEOCODE_TIMEOUT: Duration = Duration::from_secs(2);
