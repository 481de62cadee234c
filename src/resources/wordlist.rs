// English reference word list.
//
// Used twice by the pipeline: as the dictionary a lemma has to appear in to
// survive, and as the lexicon the lemmatizer checks candidate base forms
// against. Loaded once at startup and shared read-only behind an Arc.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::download::download_file;

/// Public plain-text English word list, one lowercase word per line.
pub const DEFAULT_WORDLIST_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

/// An immutable set of dictionary words. Membership is case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a word list file: one word per line, blank lines ignored.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?;
        let list = Self::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        info!(words = list.len(), path = %path.display(), "Loaded reference word list");
        Ok(list)
    }

    /// Load the word list, downloading it first if the file is missing.
    ///
    /// A missing word list is the one recoverable resource failure: it gets
    /// fetched on first use instead of aborting startup.
    pub async fn load_or_fetch(path: &Path, url: &str) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "Word list missing, fetching it");
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create word list directory: {}", parent.display())
                })?;
            }
            download_file(url, path, true).await?;
        }
        Self::from_file(path)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
