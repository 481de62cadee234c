// English-token filter — trait-based so the language identifier is swappable.
//
// The pipeline only needs "token -> language code". The default backend is a
// trigram detector (whatlang); the lexicon backend treats any word in the
// reference word list as English. Both work one token at a time, so short or
// ambiguous tokens can be misclassified; that error rate is accepted.
//
// A single word rarely carries enough trigrams for whatlang to be confident,
// so its guesses only count when they are reliable. An unreliable guess keeps
// the token.

use std::sync::Arc;

use tracing::debug;
use whatlang::Lang;

use crate::resources::wordlist::WordList;

/// ISO 639-3 code the filter keeps.
pub const ENGLISH: &str = "eng";

/// Trait for identifying the language of a single token.
pub trait LanguageIdentifier: Send + Sync {
    /// Return the ISO 639-3 code of the token's most likely language, or
    /// `None` when no guess can be made.
    fn detect(&self, token: &str) -> Option<String>;

    fn is_english(&self, token: &str) -> bool {
        self.detect(token).as_deref() == Some(ENGLISH)
    }
}

/// Trigram-based language detection via `whatlang`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangIdentifier;

impl LanguageIdentifier for WhatlangIdentifier {
    /// Only reliable guesses are reported.
    fn detect(&self, token: &str) -> Option<String> {
        whatlang::detect(token)
            .filter(|info| info.is_reliable())
            .map(|info| info.lang().code().to_string())
    }

    /// Rejects a token only when whatlang is confident it is not English.
    fn is_english(&self, token: &str) -> bool {
        match whatlang::detect(token) {
            Some(info) if info.is_reliable() => info.lang() == Lang::Eng,
            _ => true,
        }
    }
}

/// Treats dictionary words as English and everything else as unknown.
#[derive(Debug, Clone)]
pub struct LexiconIdentifier {
    words: Arc<WordList>,
}

impl LexiconIdentifier {
    pub fn new(words: Arc<WordList>) -> Self {
        Self { words }
    }
}

impl LanguageIdentifier for LexiconIdentifier {
    fn detect(&self, token: &str) -> Option<String> {
        self.words.contains(token).then(|| ENGLISH.to_string())
    }
}

/// Keep only the whitespace-delimited tokens identified as English.
pub fn filter_english(text: &str, identifier: &dyn LanguageIdentifier) -> String {
    let mut dropped = 0usize;
    let kept: Vec<&str> = text
        .split_whitespace()
        .filter(|token| {
            let keep = identifier.is_english(token);
            if !keep {
                dropped += 1;
            }
            keep
        })
        .collect();
    debug!(kept = kept.len(), dropped, "Filtered non-English tokens");
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Flags a fixed set of tokens as French, everything else as English.
    struct FixedIdentifier(&'static [&'static str]);

    impl LanguageIdentifier for FixedIdentifier {
        fn detect(&self, token: &str) -> Option<String> {
            if self.0.contains(&token) {
                Some("fra".to_string())
            } else {
                Some(ENGLISH.to_string())
            }
        }
    }

    #[test]
    fn test_filter_english_drops_foreign_tokens() {
        let id = FixedIdentifier(&["boeuf", "merci"]);
        assert_eq!(
            filter_english("the boeuf was tender merci", &id),
            "the was tender"
        );
    }

    #[test]
    fn test_filter_english_empty() {
        let id = FixedIdentifier(&[]);
        assert_eq!(filter_english("", &id), "");
    }

    #[test]
    fn test_lexicon_identifier() {
        let words = Arc::new(WordList::from_words(["soup", "bread"]));
        let id = LexiconIdentifier::new(words);
        assert_eq!(id.detect("soup").as_deref(), Some(ENGLISH));
        assert_eq!(id.detect("zuppa"), None);
        assert_eq!(filter_english("soup zuppa bread", &id), "soup bread");
    }

    #[test]
    fn test_whatlang_keeps_single_english_words() {
        let id = WhatlangIdentifier;
        for word in ["food", "service", "wine", "steak", "waiter", "pasta", "dinner", "menu"] {
            assert!(id.is_english(word), "{word} should be kept");
        }
        assert_eq!(filter_english("food service wine", &id), "food service wine");
    }

    #[test]
    fn test_whatlang_keeps_english_sentence() {
        let id = WhatlangIdentifier;
        assert!(id.is_english("the waiter brought our food quickly and the staff were friendly"));
    }

    #[test]
    fn test_whatlang_rejects_reliable_foreign_text() {
        let id = WhatlangIdentifier;
        // Greek script alone makes the guess reliable
        let greek = "\u{3c6}\u{3b1}\u{3b3}\u{3b7}\u{3c4}\u{3cc}";
        assert_eq!(id.detect(greek).as_deref(), Some("ell"));
        assert!(!id.is_english(greek));
    }
}
