use crate::constants::STOP_WORDS;
use crate::models::gazetteer::Gazetteer;
use crate::models::tokenizer::{tokenize, SourceToken};
use crate::models::Error;
use crate::types::{GazetteerList, MentionList};
use log::info;

pub struct CityExtractorConfig {
    /// Require matched source words to be capitalized at the match boundaries.
    /// Interior particles ("Rio de Janeiro") stay lowercase in many names, so only
    /// the first and last word of a match are checked.
    pub require_first_letter_caps: bool,
    /// Reject single-word matches whose key is a common English word. Gazetteer
    /// rows such as "Of" (Turkey) would otherwise match at nearly every sentence
    /// start. Multi-word matches are exempt ("The Hague").
    pub filter_single_token_stop_words: bool,
}

pub struct CityExtractor<'a> {
    config: &'a CityExtractorConfig,
    gazetteer: Gazetteer,
}

impl<'a> CityExtractor<'a> {
    pub fn new(config: &'a CityExtractorConfig, gazetteer_list: &GazetteerList) -> Self {
        CityExtractor {
            config,
            gazetteer: Gazetteer::from_list(gazetteer_list),
        }
    }

    /// Scans a text document and returns the ordered sequence of recognized city
    /// mentions, duplicates included, each spelled as in the source text.
    ///
    /// An empty result is a valid outcome for text containing no recognizable
    /// place names.
    pub fn process_text_doc(&self, text: &str) -> Result<MentionList, Error> {
        info!("Tokenizing...");
        let tokens = tokenize(text);

        info!(
            "Scanning {} tokens against {} gazetteer sequences...",
            tokens.len(),
            self.gazetteer.sequence_count()
        );

        let mut mentions = MentionList::new();
        let mut cursor = 0;
        while cursor < tokens.len() {
            match self.longest_match_at(&tokens, cursor) {
                Some(match_len) => {
                    let mention = tokens[cursor..cursor + match_len]
                        .iter()
                        .map(|token| token.raw.as_str())
                        .collect::<Vec<_>>()
                        .join(" ");
                    mentions.push(mention);
                    // Matches do not overlap; resume after the matched words.
                    cursor += match_len;
                }
                None => cursor += 1,
            }
        }

        info!("Extracted {} city mentions", mentions.len());
        Ok(mentions)
    }

    /// Length of the longest gazetteer sequence matching at `start`, if any.
    fn longest_match_at(&self, tokens: &[SourceToken], start: usize) -> Option<usize> {
        let first = &tokens[start];
        let mut best_len: Option<usize> = None;

        for sequence in self.gazetteer.candidate_sequences(&first.key) {
            let len = sequence.len();
            if start + len > tokens.len() {
                continue;
            }

            let keys_match = sequence
                .iter()
                .zip(&tokens[start..start + len])
                .all(|(key, token)| key == &token.key);
            if !keys_match {
                continue;
            }

            if self.config.require_first_letter_caps {
                let boundary_caps = starts_uppercase(&tokens[start].raw)
                    && starts_uppercase(&tokens[start + len - 1].raw);
                if !boundary_caps {
                    continue;
                }
            }

            if len == 1
                && self.config.filter_single_token_stop_words
                && STOP_WORDS.contains(&first.key.to_lowercase().as_str())
            {
                continue;
            }

            if best_len.map_or(true, |best| len > best) {
                best_len = Some(len);
            }
        }

        best_len
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map_or(false, |c| c.is_uppercase())
}
