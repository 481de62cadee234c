// Stopword and noise-token removal.
//
// Three independent set-membership filters: the generic English stoplist,
// the curated restaurant-domain stoplist, and two-letter noise fragments.
// All sets are built once at startup and never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};
use tracing::info;

/// Domain terms that carry no topical signal for restaurant reviews:
/// sentiment superlatives, venue synonyms, time units and a few corpus
/// artifacts.
pub const DOMAIN_STOPWORDS: &[&str] = &[
    "excellent", "outstanding", "superb", "fantastic", "terrific", "marvelous", "wonderful",
    "exceptional", "admirable", "splendid", "poor", "inferior", "subpar", "mediocre", "lousy",
    "terrible", "awful", "horrible", "abysmal", "dismal", "overwhelming", "exemplary",
    "extraordinary", "remarkable", "unparalleled", "unsurpassed", "superlative", "peerless",
    "incomparable", "atrocious", "dreadful", "deplorable", "appalling", "catastrophic",
    "abominable", "monstrous", "detestable", "reprehensible", "unbearable", "good", "bad",
    "great", "eatery", "diner", "bistro", "cafe", "brasserie", "tavern", "cafeteria", "grill",
    "pub", "trattoria", "location", "spot", "venue", "area", "site", "locale", "setting",
    "region", "space", "position", "restaurant", "place", "sommeli", "cha", "second", "minute",
    "hour", "day", "week", "fortnight", "month", "year", "decade", "century", "millennium",
    "moment", "quarter", "half", "nighttime", "midnight", "noon", "future", "era", "epoch",
    "age", "period", "interval", "schedule", "calendar", "clock", "watch", "stopwatch", "timer",
    "chronometer", "timepiece", "o'clock", "a.m.", "p.m.", "yesterday", "today", "tomorrow",
    "dawn", "dusk", "zone", "daylight", "lunar", "solar", "leap", "gregorian", "julian",
    "sidereal", "equinox", "solstice", "san",
];

/// An immutable set of excluded words. Lookups use the token's lowercase form.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Generic English stoplist from the `stop-words` crate.
    pub fn english() -> Self {
        let stop_words: Vec<String> = get(LANGUAGE::English);
        Self::from_words(stop_words)
    }

    /// The curated restaurant-domain stoplist.
    pub fn domain() -> Self {
        Self::from_words(DOMAIN_STOPWORDS.iter().copied())
    }

    /// Load a generic stoplist from a file with one word per line.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword list {}", path.display()))?;
        let set = Self::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        if set.is_empty() {
            anyhow::bail!("Stopword list {} is empty", path.display());
        }
        info!(words = set.len(), path = %path.display(), "Loaded stopword list");
        Ok(set)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every token that is in this set.
    pub fn remove_from(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|w| !self.contains(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// All 676 two-letter lowercase combinations ("aa" through "zz").
#[derive(Debug, Clone)]
pub struct NoiseTokenSet {
    pairs: HashSet<String>,
}

impl Default for NoiseTokenSet {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseTokenSet {
    pub fn new() -> Self {
        let pairs = ('a'..='z')
            .flat_map(|a| ('a'..='z').map(move |b| format!("{a}{b}")))
            .collect();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// A token is noise if it is a letter pair or a lone character.
    pub fn is_noise(&self, token: &str) -> bool {
        token.chars().count() < 2 || self.pairs.contains(&token.to_lowercase())
    }

    /// Drop every noise token.
    pub fn remove_from(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|w| !self.is_noise(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
