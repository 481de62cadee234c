use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::resources::download::{default_model_dir, model_files_present, WORDLIST_FILE};
use crate::resources::wordlist::DEFAULT_WORDLIST_URL;

/// Which language identifier the English-token filter uses.
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageBackend {
    /// Trigram detection via whatlang (default)
    Whatlang,
    /// English iff the token is in the reference word list
    Lexicon,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing vectorizer.json and nmf_model.json
    pub model_dir: PathBuf,
    /// Reference English word list (fetched on first use if missing)
    pub wordlist_path: PathBuf,
    pub wordlist_url: String,
    /// Optional generic stopword file; the stop-words crate list is used when unset
    pub stopwords_path: Option<PathBuf>,
    pub language_backend: LanguageBackend,
}

impl Config {
    /// Load configuration from environment variables. Everything has a default.
    pub fn load() -> Result<Self> {
        let language_backend = match env::var("REVIEW_TOPICS_LANGUAGE_ID").as_deref() {
            Ok("lexicon") => LanguageBackend::Lexicon,
            Ok("whatlang") | Err(_) => LanguageBackend::Whatlang,
            Ok(other) => anyhow::bail!(
                "Unknown REVIEW_TOPICS_LANGUAGE_ID '{other}' (expected 'whatlang' or 'lexicon')"
            ),
        };

        let model_dir = env::var("REVIEW_TOPICS_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_dir());

        let wordlist_path = env::var("REVIEW_TOPICS_WORDLIST")
            .map(PathBuf::from)
            .unwrap_or_else(|_| model_dir.join(WORDLIST_FILE));

        Ok(Self {
            wordlist_path,
            wordlist_url: env::var("REVIEW_TOPICS_WORDLIST_URL")
                .unwrap_or_else(|_| DEFAULT_WORDLIST_URL.to_string()),
            stopwords_path: env::var("REVIEW_TOPICS_STOPWORDS").ok().map(PathBuf::from),
            language_backend,
            model_dir,
        })
    }

    /// Check that both pretrained model artifacts are in place.
    /// Call this before anything that classifies.
    pub fn require_models(&self) -> Result<()> {
        if !model_files_present(&self.model_dir) {
            anyhow::bail!(
                "Model artifacts not found in {}\n\
                 Place vectorizer.json and nmf_model.json there,\n\
                 or set REVIEW_TOPICS_MODEL_DIR to the directory that holds them.",
                self.model_dir.display()
            );
        }
        Ok(())
    }
}
