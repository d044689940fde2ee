use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a city name as an owned `String`. The canonical spelling comes from the
/// gazetteer for lookup purposes, but extracted mentions keep the source-text spelling.
pub type CityName = String;

/// One occurrence of a recognized city name, spelled as it appears in the source text
/// (punctuation stripped, case preserved).
pub type Mention = String;

/// The ordered sequence of mentions produced by a single extraction pass. Non-unique;
/// duplicates and order of appearance are preserved for frequency counting.
pub type MentionList = Vec<Mention>;

/// Latitude in WGS84 decimal degrees.
pub type Latitude = f64;

/// Longitude in WGS84 decimal degrees.
pub type Longitude = f64;

/// A geographic coordinate as `(latitude, longitude)` in WGS84 (EPSG:4326) degrees.
pub type Coordinate = (Latitude, Longitude);

/// A successfully geocoded place name. Names the geocoder could not resolve have no
/// `GeoResult`; that is a valid terminal state, not an error.
pub type GeoResult = (CityName, Coordinate);

/// All `GeoResult` entries for one pipeline run. Always at most as large as the number
/// of distinct names in the `MentionList` it was derived from.
pub type ResultSet = Vec<GeoResult>;

/// Represents an alternate name for a city as an owned `String`. These are used to match
/// variations in naming conventions or aliases for cities (e.g. "NYC").
pub type AlternateCityName = String;

/// ISO-style country code attached to a gazetteer entry (optional, informational).
pub type CountryCode = String;

/// A list of gazetteer entries, where each entry includes:
/// - `CityName`: the canonical city name.
/// - `Option<CountryCode>`: the country the city belongs to (optional if not available).
/// - `Vec<AlternateCityName>`: alternate names or aliases for the city.
pub type GazetteerList = Vec<(CityName, Option<CountryCode>, Vec<AlternateCityName>)>;

/// Represents the total number of occurrences of a city name within a text document.
pub type CityFrequency = usize;

/// Represents a map of city names to their frequency counts within a text document.
/// The key is the `Mention` spelling, and the value is the `CityFrequency`.
pub type CityFrequencyMap = HashMap<CityName, CityFrequency>;

/// State identifier used by the case report (full state name in the source data).
pub type StateName = String;

/// A summed or per-row COVID-19 case count.
pub type CaseCount = u64;
