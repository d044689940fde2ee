use crate::constants::HTTP_USER_AGENT;
use crate::models::Error;
use log::info;
use std::time::Duration;

/// Retrieves and decodes the text document at `url`.
///
/// One outbound request, no retry, no caching. Timeouts, transport failures,
/// non-2xx statuses and body decode failures all surface as `Error::NetworkError`,
/// which is fatal for a pipeline run.
pub fn fetch_text_document(url: &str, timeout: Duration) -> Result<String, Error> {
    info!("Fetching {}", url);

    let client = reqwest::blocking::Client::builder()
        .user_agent(HTTP_USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| Error::NetworkError(format!("Failed to build HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| Error::NetworkError(format!("Request to {} failed: {}", url, e)))?
        .error_for_status()
        .map_err(|e| Error::NetworkError(format!("Request to {} failed: {}", url, e)))?;

    response
        .text()
        .map_err(|e| Error::NetworkError(format!("Failed to decode body of {}: {}", url, e)))
}
