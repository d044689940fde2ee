use city_mapper::{extract_city_mentions, rank_city_frequencies, read_gazetteer_from_path};
use log::error;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

// Offline runner for poking at extraction output while tuning the gazetteer.
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <text-file> <gazetteer-csv>", args[0]);
        process::exit(1);
    }

    let text = match fs::read_to_string(&args[1]) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read {}: {}", args[1], e);
            process::exit(1);
        }
    };

    let gazetteer = match read_gazetteer_from_path(&PathBuf::from(&args[2])) {
        Ok(gazetteer) => gazetteer,
        Err(e) => {
            error!("Failed to load gazetteer {}: {}", args[2], e);
            process::exit(1);
        }
    };

    let mentions = match extract_city_mentions(&text, &gazetteer) {
        Ok(mentions) => mentions,
        Err(e) => {
            error!("Extraction failed: {}", e);
            process::exit(1);
        }
    };

    for (city_name, frequency) in rank_city_frequencies(&mentions) {
        println!("{}: {}", city_name, frequency);
    }
}
