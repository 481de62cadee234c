use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use review_topics::config::{Config, LanguageBackend};
use review_topics::normalize::language::{
    LanguageIdentifier, LexiconIdentifier, WhatlangIdentifier,
};
use review_topics::normalize::stopwords::StopwordSet;
use review_topics::normalize::Normalizer;
use review_topics::output::json::{batch_line_json, distribution_json};
use review_topics::output::terminal;
use review_topics::resources::download::download_file;
use review_topics::resources::wordlist::WordList;
use review_topics::topics::classifier::TopicClassifier;

/// review-topics: find out what a restaurant review is about.
///
/// Cleans the review down to its content words, then scores it against ten
/// pretrained NMF topics and reports the dominant one.
#[derive(Parser)]
#[command(name = "review-topics", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single review (reads stdin when TEXT is omitted)
    Classify {
        /// The review text
        text: Option<String>,

        /// Print the distribution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the normalized token string for a review
    Normalize {
        /// The review text (reads stdin when omitted)
        text: Option<String>,
    },

    /// Classify every non-empty line of a file as its own review
    Batch {
        /// File with one review per line
        file: PathBuf,

        /// Emit one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Download the reference English word list
    DownloadWordlist,

    /// Show model artifact and configuration status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("review_topics=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { text, json } => {
            let config = Config::load()?;
            config.require_models()?;
            let review = read_input(text)?;
            let classifier = load_classifier(&config).await?;

            let distribution = classifier.classify(&review)?;
            if json {
                println!("{}", distribution_json(&distribution)?);
            } else {
                terminal::display_distribution(&distribution);
            }
        }

        Commands::Normalize { text } => {
            let config = Config::load()?;
            let review = read_input(text)?;
            let normalizer = build_normalizer(&config).await?;
            println!("{}", normalizer.normalize(&review));
        }

        Commands::Batch { file, json } => {
            let config = Config::load()?;
            config.require_models()?;
            let contents = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let classifier = load_classifier(&config).await?;

            let reviews: Vec<&str> = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            info!(reviews = reviews.len(), file = %file.display(), "Classifying batch");

            if !json {
                println!(
                    "\n{}",
                    format!("=== Dominant topics ({} reviews) ===", reviews.len()).bold()
                );
                println!();
            }
            for (i, review) in reviews.iter().enumerate() {
                let distribution = classifier.classify(review)?;
                if json {
                    println!("{}", batch_line_json(review, &distribution)?);
                } else {
                    terminal::display_batch_line(i + 1, review, &distribution);
                }
            }
        }

        Commands::DownloadWordlist => {
            let config = Config::load()?;
            let dest = &config.wordlist_path;

            println!("Downloading reference word list...");
            println!("  Destination: {}", dest.display());

            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            download_file(&config.wordlist_url, dest, true).await?;
            let words = WordList::from_file(dest)?;

            println!(
                "\n{}",
                format!("Word list downloaded ({} words).", words.len()).bold()
            );
        }

        Commands::Status => {
            let config = Config::load()?;
            review_topics::status::show(&config)?;
        }
    }

    Ok(())
}

/// Use the argument if given, otherwise read all of stdin.
fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read review from stdin")?;
            Ok(buf)
        }
    }
}

/// Load the word list (fetching it if needed), stopwords and language
/// identifier, and assemble the normalization pipeline.
async fn build_normalizer(config: &Config) -> Result<Normalizer> {
    let words =
        Arc::new(WordList::load_or_fetch(&config.wordlist_path, &config.wordlist_url).await?);

    let generic = match &config.stopwords_path {
        Some(path) => StopwordSet::from_file(path)?,
        None => StopwordSet::english(),
    };

    let identifier: Box<dyn LanguageIdentifier> = match config.language_backend {
        LanguageBackend::Whatlang => Box::new(WhatlangIdentifier),
        LanguageBackend::Lexicon => Box::new(LexiconIdentifier::new(words.clone())),
    };

    info!(
        words = words.len(),
        stopwords = generic.len(),
        backend = ?config.language_backend,
        "Normalizer ready"
    );
    Ok(Normalizer::new(words, identifier, generic))
}

async fn load_classifier(config: &Config) -> Result<TopicClassifier> {
    let normalizer = build_normalizer(config).await?;
    TopicClassifier::load(normalizer, &config.model_dir)
}
