/// Search endpoint of the public Nominatim instance.
pub const NOMINATIM_SEARCH_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// User agent sent with every outbound request. Nominatim rejects requests
/// without an identifying agent.
pub const HTTP_USER_AGENT: &str = concat!("city-mapper/", env!("CARGO_PKG_VERSION"));

/// Common English words that are rejected as single-token city matches. A gazetteer
/// row such as "Of" (Turkey) or "Along" (India) would otherwise match at nearly every
/// sentence start. Multi-word matches are exempt so names like "The Hague" still work.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "along", "also", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "between", "both", "but", "by",
    "came", "can", "come", "could", "did", "do", "down", "each", "for", "from", "had",
    "has", "have", "he", "her", "here", "him", "his", "how", "i", "if", "in", "into",
    "is", "it", "its", "just", "like", "make", "many", "me", "might", "more", "most",
    "much", "must", "my", "never", "no", "nor", "not", "now", "of", "off", "on",
    "once", "one", "only", "or", "other", "our", "out", "over", "said", "same", "see",
    "she", "should", "since", "so", "some", "still", "such", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through",
    "to", "too", "under", "up", "upon", "us", "very", "was", "way", "we", "well",
    "were", "what", "when", "where", "which", "while", "who", "why", "will", "with",
    "would", "you", "your",
];
