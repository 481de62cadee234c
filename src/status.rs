// System status display — artifact presence, sizes and ages, active config.

use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Local};
use colored::Colorize;

use crate::config::{Config, LanguageBackend};
use crate::resources::download::{NMF_MODEL_FILE, VECTORIZER_FILE};

/// What we know about one artifact file on disk.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactStatus {
    Missing,
    Present {
        bytes: u64,
        modified: Option<DateTime<Local>>,
    },
}

impl ArtifactStatus {
    pub fn inspect(path: &Path) -> Self {
        match std::fs::metadata(path) {
            Ok(meta) => ArtifactStatus::Present {
                bytes: meta.len(),
                modified: meta.modified().ok().map(DateTime::<Local>::from),
            },
            Err(_) => ArtifactStatus::Missing,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ArtifactStatus::Present { .. })
    }

    fn describe(&self) -> String {
        match self {
            ArtifactStatus::Missing => "missing".red().to_string(),
            ArtifactStatus::Present { bytes, modified } => {
                let when = modified
                    .as_ref()
                    .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                format!("{} ({}, updated {})", "ok".green(), format_bytes(*bytes), when)
            }
        }
    }
}

/// Display system status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    println!("Model directory: {}", config.model_dir.display());

    let artifacts = [
        ("Vectorizer", config.model_dir.join(VECTORIZER_FILE)),
        ("NMF model", config.model_dir.join(NMF_MODEL_FILE)),
        ("Word list", config.wordlist_path.clone()),
    ];
    for (name, path) in &artifacts {
        let status = ArtifactStatus::inspect(path);
        println!("  {:<11} {}", format!("{name}:"), status.describe());
    }

    let backend = match config.language_backend {
        LanguageBackend::Whatlang => "whatlang",
        LanguageBackend::Lexicon => "lexicon",
    };
    println!("Language identifier: {backend}");

    match &config.stopwords_path {
        Some(path) => println!("Generic stopwords: {}", path.display()),
        None => println!("Generic stopwords: built-in English list"),
    }

    if !ArtifactStatus::inspect(&config.wordlist_path).is_present() {
        println!(
            "\n{}",
            "Run `review-topics download-wordlist` to fetch the word list.".dimmed()
        );
    }
    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_inspect_artifact() {
        let dir = std::env::temp_dir().join("review-topics-status-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("artifact.json");
        assert_eq!(ArtifactStatus::inspect(&path), ArtifactStatus::Missing);

        std::fs::write(&path, b"{}").unwrap();
        match ArtifactStatus::inspect(&path) {
            ArtifactStatus::Present { bytes, .. } => assert_eq!(bytes, 2),
            ArtifactStatus::Missing => panic!("expected artifact to be present"),
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
