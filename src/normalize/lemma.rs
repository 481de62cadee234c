// Lemmatization and dictionary validation.
//
// A morphy-style lemmatizer: irregular forms come from small exception
// tables, everything else goes through suffix-detachment rules for the given
// part of speech. Each candidate base form (the word itself included) is
// checked against the reference word list and the shortest surviving one wins.
// A word with no surviving candidate is returned unchanged.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use tracing::debug;

use crate::resources::wordlist::WordList;

/// Coarse part-of-speech classes, as far as lemmatization and the adverb
/// filter care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

static NOUN_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("geese", "goose"),
        ("knives", "knife"),
        ("loaves", "loaf"),
        ("halves", "half"),
        ("leaves", "leaf"),
        ("wives", "wife"),
        ("lives", "life"),
        ("shelves", "shelf"),
        ("calves", "calf"),
        ("potatoes", "potato"),
        ("tomatoes", "tomato"),
        ("oxen", "ox"),
        ("criteria", "criterion"),
    ])
});

/// Irregular verb forms. Shared with the tagger, which uses membership here as
/// one of its verb signals.
pub(crate) static VERB_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("am", "be"),
            ("is", "be"),
            ("are", "be"),
            ("was", "be"),
            ("were", "be"),
            ("been", "be"),
            ("being", "be"),
            ("has", "have"),
            ("had", "have"),
            ("having", "have"),
            ("does", "do"),
            ("did", "do"),
            ("done", "do"),
            ("went", "go"),
            ("gone", "go"),
            ("ate", "eat"),
            ("eaten", "eat"),
            ("drank", "drink"),
            ("drunk", "drink"),
            ("made", "make"),
            ("took", "take"),
            ("taken", "take"),
            ("came", "come"),
            ("saw", "see"),
            ("seen", "see"),
            ("got", "get"),
            ("gotten", "get"),
            ("gave", "give"),
            ("given", "give"),
            ("found", "find"),
            ("told", "tell"),
            ("thought", "think"),
            ("brought", "bring"),
            ("bought", "buy"),
            ("left", "leave"),
            ("felt", "feel"),
            ("kept", "keep"),
            ("paid", "pay"),
            ("sat", "sit"),
            ("ran", "run"),
            ("running", "run"),
            ("sitting", "sit"),
            ("getting", "get"),
            ("stopped", "stop"),
            ("chose", "choose"),
            ("chosen", "choose"),
            ("knew", "know"),
            ("known", "know"),
            ("said", "say"),
            ("spent", "spend"),
            ("sent", "send"),
            ("met", "meet"),
            ("became", "become"),
            ("began", "begin"),
            ("begun", "begin"),
            ("forgot", "forget"),
            ("forgotten", "forget"),
            ("wrote", "write"),
            ("written", "write"),
        ])
    });

static ADJECTIVE_EXCEPTIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("better", "good"),
        ("best", "good"),
        ("worse", "bad"),
        ("worst", "bad"),
        ("more", "much"),
        ("most", "much"),
        ("less", "little"),
        ("least", "little"),
    ])
});

/// Dictionary-backed lemmatizer.
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    words: Arc<WordList>,
}

impl Lemmatizer {
    pub fn new(words: Arc<WordList>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Reduce `word` to its base form for the given part of speech.
    pub fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        let (exceptions, rules): (&HashMap<&str, &str>, &[(&str, &str)]) = match pos {
            PartOfSpeech::Noun => (&*NOUN_EXCEPTIONS, NOUN_RULES),
            PartOfSpeech::Verb => (&*VERB_EXCEPTIONS, VERB_RULES),
            PartOfSpeech::Adjective => (&*ADJECTIVE_EXCEPTIONS, ADJECTIVE_RULES),
            PartOfSpeech::Adverb | PartOfSpeech::Other => return word.to_string(),
        };

        if let Some(base) = exceptions.get(word) {
            return (*base).to_string();
        }

        let mut candidates = vec![word.to_string()];
        for &(suffix, ending) in rules {
            if let Some(stem) = word.strip_suffix(suffix) {
                if !stem.is_empty() {
                    candidates.push(format!("{stem}{ending}"));
                }
            }
        }

        candidates
            .into_iter()
            .filter(|c| self.words.contains(c))
            .min_by_key(|c| c.len())
            .unwrap_or_else(|| word.to_string())
    }

    /// Noun-lemmatize every token.
    pub fn lemmatize_nouns(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|w| self.lemmatize(w, PartOfSpeech::Noun))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Noun-lemmatize every token again and keep only lemmas that are real
    /// dictionary words.
    pub fn filter_dictionary(&self, text: &str) -> String {
        let total = text.split_whitespace().count();
        let kept: Vec<String> = text
            .split_whitespace()
            .map(|w| self.lemmatize(w, PartOfSpeech::Noun))
            .filter(|lemma| self.words.contains(lemma))
            .collect();
        debug!(
            total,
            kept = kept.len(),
            "Dictionary filter applied to lemmas"
        );
        kept.join(" ")
    }

    /// Both lemmatization passes: a plain noun pass, then a second noun pass
    /// that drops anything outside the word list.
    pub fn lemmatize_and_validate(&self, text: &str) -> String {
        self.filter_dictionary(&self.lemmatize_nouns(text))
    }
}
