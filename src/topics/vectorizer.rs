// Bag-of-words vectorizer loaded from a JSON artifact.
//
// Mirrors the fitted count/TF-IDF vectorizer the topic model was trained
// with: `\b\w\w+\b` tokens, n-grams joined with a space, raw counts or binary
// presence, optional IDF weighting and optional row normalization.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex_lite::Regex;
use serde::Deserialize;
use tracing::info;

use super::traits::Vectorizer;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

fn default_lowercase() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountVectorizer {
    vocabulary: HashMap<String, usize>,
    #[serde(default = "default_lowercase")]
    lowercase: bool,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    binary: bool,
    #[serde(default)]
    idf: Option<Vec<f64>>,
    #[serde(default)]
    norm: Option<Norm>,
}

impl CountVectorizer {
    /// Load and validate a `vectorizer.json` artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vectorizer artifact {}", path.display()))?;
        let vectorizer = Self::from_json(&json)
            .with_context(|| format!("Invalid vectorizer artifact {}", path.display()))?;
        info!(
            features = vectorizer.n_features(),
            ngram_min = vectorizer.ngram_range.0,
            ngram_max = vectorizer.ngram_range.1,
            tfidf = vectorizer.idf.is_some(),
            "Loaded vectorizer"
        );
        Ok(vectorizer)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let vectorizer: Self =
            serde_json::from_str(json).context("Failed to parse vectorizer JSON")?;
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    fn validate(&self) -> Result<()> {
        let n = self.vocabulary.len();
        if n == 0 {
            anyhow::bail!("Vectorizer vocabulary is empty");
        }
        if let Some((term, &col)) = self.vocabulary.iter().find(|&(_, &col)| col >= n) {
            anyhow::bail!("Vocabulary column {col} for {term:?} is out of range (size {n})");
        }
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            anyhow::bail!("Invalid ngram_range ({min_n}, {max_n})");
        }
        if let Some(idf) = &self.idf {
            if idf.len() != n {
                anyhow::bail!(
                    "IDF vector has {} entries but vocabulary has {n}",
                    idf.len()
                );
            }
        }
        Ok(())
    }

    /// Tokens and n-grams of `text`, in the order the trained vectorizer
    /// would produce them.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let tokens: Vec<&str> = TOKEN_PATTERN.find_iter(&text).map(|m| m.as_str()).collect();

        let (min_n, max_n) = self.ngram_range;
        let mut grams = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                grams.push(window.join(" "));
            }
        }
        grams
    }
}

impl Vectorizer for CountVectorizer {
    fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    fn transform(&self, text: &str) -> Vec<f64> {
        let mut features = vec![0.0; self.n_features()];
        for gram in self.analyze(text) {
            if let Some(&col) = self.vocabulary.get(&gram) {
                features[col] += 1.0;
            }
        }

        if self.binary {
            for value in features.iter_mut().filter(|v| **v > 0.0) {
                *value = 1.0;
            }
        }
        if let Some(idf) = &self.idf {
            for (value, weight) in features.iter_mut().zip(idf) {
                *value *= weight;
            }
        }
        if let Some(norm) = self.norm {
            let total = match norm {
                Norm::L1 => features.iter().map(|v| v.abs()).sum::<f64>(),
                Norm::L2 => features.iter().map(|v| v * v).sum::<f64>().sqrt(),
            };
            if total > 0.0 {
                for value in features.iter_mut() {
                    *value /= total;
                }
            }
        }
        features
    }
}
