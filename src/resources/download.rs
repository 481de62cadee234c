// Resource locations and download helper.
//
// Model artifacts and the reference word list live in a platform-appropriate
// directory (~/.local/share/review-topics/models/ on Linux) so they persist
// across runs. Only the word list is ever downloaded; the vectorizer and NMF
// artifacts are trained elsewhere and dropped into the directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

pub const VECTORIZER_FILE: &str = "vectorizer.json";
pub const NMF_MODEL_FILE: &str = "nmf_model.json";
pub const WORDLIST_FILE: &str = "words.txt";

/// Returns the default directory for model artifacts.
/// Uses the platform data directory: ~/.local/share/review-topics/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("review-topics")
        .join("models")
}

/// Check whether both pretrained model artifacts exist.
pub fn model_files_present(dir: &Path) -> bool {
    dir.join(VECTORIZER_FILE).exists() && dir.join(NMF_MODEL_FILE).exists()
}

/// Fetch `url` into `dest`.
///
/// The body is streamed into `<dest>.part` and renamed into place once it is
/// complete. `dest` is never left half-written.
pub async fn download_file(url: &str, dest: &Path, show_progress: bool) -> Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("review-topics/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;
    let mut response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to request {url}"))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("{url} answered {status}");
    }

    let pb = show_progress.then(|| progress_bar(dest, response.content_length()));

    let part = partial_path(dest);
    let mut file = std::fs::File::create(&part)
        .with_context(|| format!("Failed to create {}", part.display()))?;
    let mut received: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .with_context(|| format!("Connection dropped while reading {url}"))?
    {
        file.write_all(&chunk)
            .with_context(|| format!("Failed to write {}", part.display()))?;
        received += chunk.len() as u64;
        if let Some(pb) = &pb {
            pb.set_position(received);
        }
    }
    file.flush()
        .with_context(|| format!("Failed to write {}", part.display()))?;
    drop(file);

    std::fs::rename(&part, dest)
        .with_context(|| format!("Failed to move {} into place", part.display()))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    info!(url, dest = %dest.display(), bytes = received, "Fetched resource");
    Ok(())
}

/// Sibling path the body is written to before it is complete.
fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    dest.with_file_name(name)
}

fn progress_bar(dest: &Path, total: Option<u64>) -> ProgressBar {
    let label = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let pb = match total {
        Some(size) => {
            let pb = ProgressBar::new(size);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  {msg:>12} {wide_bar:.green/white} {bytes}/{total_bytes}")
                    .expect("valid template")
                    .progress_chars("#- "),
            );
            pb
        }
        None => {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("  {msg:>12} {spinner:.green} {bytes} received")
                    .expect("valid template"),
            );
            pb
        }
    };
    pb.set_message(label);
    pb
}
