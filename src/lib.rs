mod config;
mod constants;
pub mod models;
pub mod types;
mod utils;

pub use config::{
    DEFAULT_CITY_EXTRACTOR_CONFIG, DEFAULT_FETCH_TIMEOUT, DEFAULT_GEOCODE_TIMEOUT, DEFAULT_TOP_N,
};
pub use models::{
    fetch_text_document, filter_rows_by_state, geocode_mentions, load_country_boundaries,
    rank_states_by_total, read_case_rows_from_path, read_case_rows_from_string,
    read_gazetteer_from_path, read_gazetteer_from_string, render_frequency_plot,
    render_point_map, total_cases_by_state, write_case_rows_csv, write_state_totals_csv,
    BoundaryRing, CaseRow, CityExtractor, CityExtractorConfig, Error, Gazetteer, GeocodeError,
    Geocoder, NominatimGeocoder,
};
pub use types::{
    CityFrequency, CityFrequencyMap, CityName, Coordinate, GazetteerList, GeoResult, Mention,
    MentionList, ResultSet,
};
pub use utils::{count_city_frequencies, dedup_mentions, rank_city_frequencies};

use log::info;
use std::path::PathBuf;
use std::time::Duration;

pub fn extract_city_mentions(
    text: &str,
    gazetteer_list: &GazetteerList,
) -> Result<MentionList, Error> {
    extract_city_mentions_with_custom_config(DEFAULT_CITY_EXTRACTOR_CONFIG, text, gazetteer_list)
}

pub fn extract_city_mentions_with_custom_config(
    city_extractor_config: &CityExtractorConfig,
    text: &str,
    gazetteer_list: &GazetteerList,
) -> Result<MentionList, Error> {
    let city_extractor = CityExtractor::new(city_extractor_config, gazetteer_list);

    city_extractor.process_text_doc(text)
}

/// Inputs for one pipeline run.
///
/// Replaces the reference workflow's interactive upload step with explicit paths
/// supplied by the caller before invocation.
pub struct PipelineConfig {
    pub document_url: String,
    pub gazetteer_path: PathBuf,
    pub boundaries_path: PathBuf,
    pub frequency_plot_path: PathBuf,
    pub map_plot_path: PathBuf,
    pub top_n: usize,
    pub fetch_timeout: Duration,
}

/// Outcome of one pipeline run.
pub struct PipelineSummary {
    /// Every recognized mention, in order of appearance, duplicates included.
    pub mentions: MentionList,
    /// Mention frequencies in display order (count descending, first-seen ties).
    pub ranked_frequencies: Vec<(CityName, CityFrequency)>,
    /// Successfully geocoded distinct cities.
    pub result_set: ResultSet,
}

/// Runs the full pipeline: fetch, extract, geocode, render.
///
/// A fetch failure aborts before any geocoding or plotting occurs. Per-name
/// geocode failures shrink the result set but never abort. The frequency plot
/// is rendered before the boundary dataset is touched, so a missing dataset
/// still leaves the frequency artifact behind.
pub fn run_city_map_pipeline(
    config: &PipelineConfig,
    geocoder: &dyn Geocoder,
) -> Result<PipelineSummary, Error> {
    let raw_document = fetch_text_document(&config.document_url, config.fetch_timeout)?;

    let gazetteer_list = read_gazetteer_from_path(&config.gazetteer_path)?;
    let mentions = extract_city_mentions(&raw_document, &gazetteer_list)?;
    info!(
        "Extracted {} mentions from {}",
        mentions.len(),
        config.document_url
    );

    let result_set = geocode_mentions(geocoder, &mentions);
    info!("Geocoded {} distinct cities", result_set.len());

    let ranked_frequencies = rank_city_frequencies(&mentions);
    render_frequency_plot(&ranked_frequencies, config.top_n, &config.frequency_plot_path)?;

    let boundaries = load_country_boundaries(&config.boundaries_path)?;
    render_point_map(&result_set, &boundaries, &config.map_plot_path)?;

    Ok(PipelineSummary {
        mentions,
        ranked_frequencies,
        result_set,
    })
}
