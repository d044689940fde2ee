use city_mapper::{
    run_city_map_pipeline, NominatimGeocoder, PipelineConfig, DEFAULT_FETCH_TIMEOUT,
    DEFAULT_GEOCODE_TIMEOUT, DEFAULT_TOP_N,
};
use log::error;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} <document-url> <gazetteer-csv> <boundaries-geojson> [output-dir]",
            args[0]
        );
        process::exit(1);
    }

    let output_dir = PathBuf::from(args.get(4).map(String::as_str).unwrap_or("."));

    let config = PipelineConfig {
        document_url: args[1].clone(),
        gazetteer_path: PathBuf::from(&args[2]),
        boundaries_path: PathBuf::from(&args[3]),
        frequency_plot_path: output_dir.join("city_frequency.png"),
        map_plot_path: output_dir.join("city_map.png"),
        top_n: DEFAULT_TOP_N,
        fetch_timeout: DEFAULT_FETCH_TIMEOUT,
    };

    let geocoder = match NominatimGeocoder::new(DEFAULT_GEOCODE_TIMEOUT) {
        Ok(geocoder) => geocoder,
        Err(e) => {
            error!("Failed to build geocoder: {}", e);
            process::exit(1);
        }
    };

    match run_city_map_pipeline(&config, &geocoder) {
        Ok(summary) => {
            for (city_name, frequency) in summary.ranked_frequencies.iter().take(config.top_n) {
                println!("{}: {}", city_name, frequency);
            }
            println!(
                "Wrote {} and {}",
                config.frequency_plot_path.display(),
                config.map_plot_path.display()
            );
        }
        Err(e) => {
            error!("Pipeline failed: {}", e);
            process::exit(1);
        }
    }
}
