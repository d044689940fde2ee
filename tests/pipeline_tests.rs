use city_mapper::{run_city_map_pipeline, Error, PipelineConfig, DEFAULT_TOP_N};
use std::path::PathBuf;
use std::time::Duration;
use test_utils::FakeGeocoder;

#[test]
fn test_fetch_failure_aborts_without_side_effects() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let frequency_plot_path = dir.path().join("city_frequency.png");
    let map_plot_path = dir.path().join("city_map.png");

    let config = PipelineConfig {
        // Nothing listens on the discard port; the fetch fails immediately.
        document_url: "http://127.0.0.1:9/document.txt".to_string(),
        gazetteer_path: PathBuf::from("tests/test_gazetteer.csv"),
        boundaries_path: PathBuf::from("tests/fixtures/boundaries.geojson"),
        frequency_plot_path: frequency_plot_path.clone(),
        map_plot_path: map_plot_path.clone(),
        top_n: DEFAULT_TOP_N,
        fetch_timeout: Duration::from_millis(500),
    };

    let geocoder = FakeGeocoder::new().with_place("Paris", (48.8566, 2.3522));
    let result = run_city_map_pipeline(&config, &geocoder);

    assert!(matches!(result, Err(Error::NetworkError(_))));
    assert_eq!(
        geocoder.total_calls(),
        0,
        "No geocoding may happen after a failed fetch"
    );
    assert!(
        !frequency_plot_path.exists(),
        "No partial artifacts after a failed fetch"
    );
    assert!(
        !map_plot_path.exists(),
        "No partial artifacts after a failed fetch"
    );
}

#[test]
fn test_missing_boundary_dataset_still_leaves_frequency_plot() {
    // Exercised without the network: fetch is the only stage that needs it, so
    // this test drives the stages the pipeline runs after a successful fetch.
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let frequency_plot_path = dir.path().join("city_frequency.png");
    let map_plot_path = dir.path().join("city_map.png");

    let gazetteer = test_utils::load_gazetteer_from_file("tests/test_gazetteer.csv")
        .expect("Failed to load gazetteer");
    let mentions =
        city_mapper::extract_city_mentions("Paris and Rome. Paris again.", &gazetteer)
            .expect("Extraction failed");

    let ranked = city_mapper::rank_city_frequencies(&mentions);
    city_mapper::render_frequency_plot(&ranked, DEFAULT_TOP_N, &frequency_plot_path)
        .expect("Frequency plot failed");

    let missing = dir.path().join("no_boundaries.geojson");
    let boundaries = city_mapper::load_country_boundaries(&missing);

    assert!(matches!(boundaries, Err(Error::RenderError(_))));
    assert!(frequency_plot_path.exists());
    assert!(!map_plot_path.exists());
}
