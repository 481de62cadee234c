// Text normalization — raw review in, clean content-word string out.
//
// The Normalizer owns every resource the stages need (word list, tagger,
// language identifier, stoplists). All of it is loaded once and only read
// afterwards, so one Normalizer can be shared across threads.

pub mod clean;
pub mod emoji;
pub mod grammar;
pub mod language;
pub mod lemma;
pub mod stopwords;

use std::sync::Arc;

use tracing::debug;

use crate::resources::wordlist::WordList;
use grammar::{remove_function_words, PosTagger, RuleTagger};
use language::{filter_english, LanguageIdentifier};
use lemma::Lemmatizer;
use stopwords::{NoiseTokenSet, StopwordSet};

/// Upper bound on token-stage passes. Real input settles in two or three.
const MAX_PASSES: usize = 8;

/// The full normalization pipeline.
pub struct Normalizer {
    lemmatizer: Lemmatizer,
    identifier: Box<dyn LanguageIdentifier>,
    tagger: Box<dyn PosTagger>,
    generic_stopwords: StopwordSet,
    domain_stopwords: StopwordSet,
    noise: NoiseTokenSet,
}

impl Normalizer {
    /// Build a normalizer with the rule-based tagger and the built-in domain
    /// stoplist.
    pub fn new(
        words: Arc<WordList>,
        identifier: Box<dyn LanguageIdentifier>,
        generic_stopwords: StopwordSet,
    ) -> Self {
        let lemmatizer = Lemmatizer::new(words);
        let tagger = Box::new(RuleTagger::new(lemmatizer.clone()));
        Self {
            lemmatizer,
            identifier,
            tagger,
            generic_stopwords,
            domain_stopwords: StopwordSet::domain(),
            noise: NoiseTokenSet::new(),
        }
    }

    /// Swap in a different part-of-speech tagger.
    pub fn with_tagger(mut self, tagger: Box<dyn PosTagger>) -> Self {
        self.tagger = tagger;
        self
    }

    /// Normalize one raw review. Never fails; an empty result is valid.
    ///
    /// The token stages repeat until the text stops changing, so feeding the
    /// output back in returns it unchanged.
    pub fn normalize(&self, raw: &str) -> String {
        let mut text = clean::clean(raw);
        let mut passes = 0;
        loop {
            let next = self.token_stages(&text);
            passes += 1;
            if next == text {
                break;
            }
            text = next;
            if passes == MAX_PASSES {
                debug!(passes, "Normalization did not settle");
                break;
            }
        }

        debug!(
            input_chars = raw.chars().count(),
            tokens = text.split_whitespace().count(),
            passes,
            "Normalized review"
        );
        text
    }

    fn token_stages(&self, text: &str) -> String {
        let text = filter_english(text, self.identifier.as_ref());
        let text = clean::strip_non_ascii(&text);
        let text = clean::strip_non_alpha(&text);
        let text = self.lemmatizer.lemmatize_nouns(&text);
        let text = self.lemmatizer.filter_dictionary(&text);
        let text = self.generic_stopwords.remove_from(&text);
        let text = remove_function_words(&text, self.tagger.as_ref());
        let text = self.noise.remove_from(&text);
        self.domain_stopwords.remove_from(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use language::LexiconIdentifier;

    fn normalizer(words: &[&str]) -> Normalizer {
        let list = Arc::new(WordList::from_words(words.iter().copied()));
        Normalizer::new(
            list.clone(),
            Box::new(LexiconIdentifier::new(list)),
            StopwordSet::from_words(["the", "was", "and", "a"]),
        )
    }

    #[test]
    fn test_normalize_drops_domain_and_stop_words() {
        let n = normalizer(&[
            "the", "food", "was", "so", "good", "and", "service", "excellent",
        ]);
        assert_eq!(
            n.normalize("The food was soooo good and the service was excellent!!"),
            "food service"
        );
    }

    #[test]
    fn test_normalize_settles_on_lemma_chains() {
        let n = normalizer(&["called", "call", "passed", "pass", "pas", "food"]);
        assert_eq!(n.normalize("called food"), "food");
        let once = n.normalize("passed food");
        assert_eq!(n.normalize(&once), once);
    }

    #[test]
    fn test_normalize_empty_and_noise() {
        let n = normalizer(&["food"]);
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("1234 !!! \u{1F600}\u{1F600}"), "");
    }
}
