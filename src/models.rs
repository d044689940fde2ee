pub mod case_report;
pub use case_report::{
    filter_rows_by_state, rank_states_by_total, read_case_rows_from_path,
    read_case_rows_from_string, total_cases_by_state, write_case_rows_csv,
    write_state_totals_csv, CaseRow,
};

pub mod city_extractor;
pub use city_extractor::{CityExtractor, CityExtractorConfig};

pub mod error;
pub use error::Error;

pub mod fetcher;
pub use fetcher::fetch_text_document;

pub mod gazetteer;
pub use gazetteer::{read_gazetteer_from_path, read_gazetteer_from_string, Gazetteer};

pub mod geocoder;
pub use geocoder::{geocode_mentions, GeocodeError, Geocoder, NominatimGeocoder};

pub mod renderer;
pub use renderer::{
    load_country_boundaries, render_frequency_plot, render_point_map, BoundaryRing,
};

pub mod tokenizer;
pub use tokenizer::{tokenize, tokenize_place_name, SourceToken};
