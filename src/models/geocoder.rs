use crate::constants::{HTTP_USER_AGENT, NOMINATIM_SEARCH_ENDPOINT};
use crate::models::Error;
use crate::types::{Coordinate, MentionList, ResultSet};
use crate::utils::dedup_mentions;
use log::{debug, warn};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Failure modes of a single geocode lookup.
///
/// "No match" is not a failure; a lookup returns `Ok(None)` for names the
/// service does not know. These variants cover the recoverable error class:
/// they are logged, the name is skipped, and the run continues.
#[derive(Debug)]
pub enum GeocodeError {
    Timeout(String),
    Transport(String),
    MalformedResponse(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Timeout(msg) => write!(f, "Geocode Timeout: {}", msg),
            GeocodeError::Transport(msg) => write!(f, "Geocode Transport Error: {}", msg),
            GeocodeError::MalformedResponse(msg) => {
                write!(f, "Geocode Malformed Response: {}", msg)
            }
        }
    }
}

impl std::error::Error for GeocodeError {}

/// External lookup capability resolving a place name to a WGS84 coordinate.
pub trait Geocoder {
    fn geocode(&self, place_name: &str) -> Result<Option<Coordinate>, GeocodeError>;
}

/// One result row of the Nominatim search API. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Blocking client for the Nominatim search API: one lookup per call, bounded
/// per-request timeout, single attempt, no rate limiting. Throttling to respect
/// the public instance's usage policy is a known limitation.
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        Self::with_endpoint(NOMINATIM_SEARCH_ENDPOINT, timeout)
    }

    /// Points the client at a different Nominatim-compatible endpoint, e.g. a
    /// self-hosted instance.
    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(HTTP_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(NominatimGeocoder {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, place_name: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", place_name), ("format", "json"), ("limit", "1")])
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodeError::Timeout(e.to_string())
                } else {
                    GeocodeError::Transport(e.to_string())
                }
            })?
            .error_for_status()
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;

        let places: Vec<NominatimPlace> = response
            .json()
            .map_err(|e| GeocodeError::MalformedResponse(e.to_string()))?;

        let place = match places.first() {
            Some(place) => place,
            None => return Ok(None),
        };

        let latitude: f64 = place.lat.parse().map_err(|_| {
            GeocodeError::MalformedResponse(format!("Unparseable latitude: {}", place.lat))
        })?;
        let longitude: f64 = place.lon.parse().map_err(|_| {
            GeocodeError::MalformedResponse(format!("Unparseable longitude: {}", place.lon))
        })?;

        Ok(Some((latitude, longitude)))
    }
}

/// Resolves each distinct name in `mentions` once, in first-seen order.
///
/// Lookup failures are logged and skipped; the run always continues with a
/// smaller result set. The returned set therefore never has more entries than
/// the mention list has distinct names.
pub fn geocode_mentions(geocoder: &dyn Geocoder, mentions: &MentionList) -> ResultSet {
    let mut result_set = ResultSet::new();

    for city_name in dedup_mentions(mentions) {
        match geocoder.geocode(&city_name) {
            Ok(Some(coordinate)) => result_set.push((city_name, coordinate)),
            Ok(None) => debug!("No geocode match for {}", city_name),
            Err(e) => warn!("Geocode failed on input {}: {}", city_name, e),
        }
    }

    result_set
}
