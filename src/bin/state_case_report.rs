use city_mapper::{
    filter_rows_by_state, rank_states_by_total, read_case_rows_from_path, total_cases_by_state,
    write_case_rows_csv,
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
    if args.len() < 3 {
        eprintln!("Usage: {} <cases-csv> <state-name> [output-csv]", args[0]);
        process::exit(1);
    }

    let cases_path = PathBuf::from(&args[1]);
    let state_name = &args[2];
    let output_path = PathBuf::from(args.get(3).map(String::as_str).unwrap_or("concat_state.csv"));

    let rows = match read_case_rows_from_path(&cases_path) {
        Ok(rows) => rows,
        Err(e) => {
            error!("Failed to read {}: {}", cases_path.display(), e);
            process::exit(1);
        }
    };

    for (state, total) in rank_states_by_total(total_cases_by_state(&rows)) {
        println!("{}: {}", state, total);
    }

    // The export keeps the raw per-county rows, not the aggregated totals.
    let filtered = filter_rows_by_state(&rows, state_name);
    if let Err(e) = write_case_rows_csv(&filtered, &output_path) {
        error!("Failed to write {}: {}", output_path.display(), e);
        process::exit(1);
    }

    println!(
        "Wrote {} rows for {} to {}",
        filtered.len(),
        state_name,
        output_path.display()
    );
}
