use city_mapper::{extract_city_mentions, rank_city_frequencies};

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let gazetteer = vec![
        ("Paris".to_string(), Some("FR".to_string()), Vec::new()),
        (
            "London".to_string(),
            Some("GB".to_string()),
            vec!["Londinium".to_string()],
        ),
        (
            "New York".to_string(),
            Some("US".to_string()),
            vec!["NYC".to_string()],
        ),
    ];

    let text = "The train left Paris for London. New York was still asleep; Paris was not.";

    let mentions = extract_city_mentions(text, &gazetteer).unwrap();

    println!("Extracted city mentions for the given text \"{}\"", text);
    for (city_name, frequency) in rank_city_frequencies(&mentions) {
        println!("{}: {}", city_name, frequency);
    }
}
