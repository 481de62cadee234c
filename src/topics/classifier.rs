// Topic classifier — normalize, vectorize, project onto the NMF topics.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use super::labels::{TopicLabel, TOPIC_COUNT};
use super::nmf::NmfModel;
use super::traits::{TopicModel, Vectorizer};
use super::vectorizer::CountVectorizer;
use crate::normalize::Normalizer;
use crate::resources::download::{NMF_MODEL_FILE, VECTORIZER_FILE};

/// Decimal places topic weights are rounded to.
const WEIGHT_DECIMALS: i32 = 10;

/// Per-topic weights for one review plus the dominant topic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicDistribution {
    /// Indexed by `TopicLabel::index()`.
    pub weights: [f64; TOPIC_COUNT],
    pub dominant: TopicLabel,
}

impl TopicDistribution {
    /// Round raw model output and pick the dominant topic. On ties the lowest
    /// index wins, so an all-zero vector maps to the first label.
    pub fn from_weights(raw: &[f64]) -> Result<Self> {
        if raw.len() != TOPIC_COUNT {
            anyhow::bail!(
                "Topic model returned {} weights, expected {TOPIC_COUNT}",
                raw.len()
            );
        }

        let mut weights = [0.0; TOPIC_COUNT];
        for (slot, value) in weights.iter_mut().zip(raw) {
            *slot = round_weight(*value);
        }

        let mut best = 0;
        for (i, value) in weights.iter().enumerate().skip(1) {
            if *value > weights[best] {
                best = i;
            }
        }

        Ok(Self {
            weights,
            dominant: TopicLabel::ALL[best],
        })
    }

    pub fn weight(&self, label: TopicLabel) -> f64 {
        self.weights[label.index()]
    }

    /// The dominant topic's weight scaled by 100.
    pub fn dominant_percentage(&self) -> f64 {
        self.weight(self.dominant) * 100.0
    }

    /// `(label, weight)` pairs in component order.
    pub fn iter(&self) -> impl Iterator<Item = (TopicLabel, f64)> + '_ {
        TopicLabel::ALL.iter().copied().zip(self.weights.iter().copied())
    }
}

fn round_weight(value: f64) -> f64 {
    let scale = 10f64.powi(WEIGHT_DECIMALS);
    (value * scale).round_ties_even() / scale
}

/// Full review-to-topics pipeline.
pub struct TopicClassifier {
    normalizer: Normalizer,
    vectorizer: Box<dyn Vectorizer>,
    model: Box<dyn TopicModel>,
}

impl TopicClassifier {
    /// Wire the pieces together, checking that the vectorizer and the model
    /// agree on the feature space.
    pub fn new(
        normalizer: Normalizer,
        vectorizer: Box<dyn Vectorizer>,
        model: Box<dyn TopicModel>,
    ) -> Result<Self> {
        if model.n_components() != TOPIC_COUNT {
            anyhow::bail!(
                "Topic model has {} components, expected {TOPIC_COUNT}",
                model.n_components()
            );
        }
        if vectorizer.n_features() != model.n_features() {
            anyhow::bail!(
                "Vectorizer produces {} features but the topic model expects {}",
                vectorizer.n_features(),
                model.n_features()
            );
        }
        Ok(Self {
            normalizer,
            vectorizer,
            model,
        })
    }

    /// Load `vectorizer.json` and `nmf_model.json` from `model_dir`.
    pub fn load(normalizer: Normalizer, model_dir: &Path) -> Result<Self> {
        let vectorizer = CountVectorizer::load(&model_dir.join(VECTORIZER_FILE))?;
        let model = NmfModel::load(&model_dir.join(NMF_MODEL_FILE))?;
        Self::new(normalizer, Box::new(vectorizer), Box::new(model))
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Classify one raw review. Text that normalizes to nothing still gets a
    /// (degenerate) distribution.
    pub fn classify(&self, raw: &str) -> Result<TopicDistribution> {
        let text = self.normalizer.normalize(raw);
        self.classify_normalized(&text)
    }

    /// Classify text that has already been through the normalizer.
    pub fn classify_normalized(&self, text: &str) -> Result<TopicDistribution> {
        let features = self.vectorizer.transform(text);
        let raw = self.model.transform(&features);
        let distribution = TopicDistribution::from_weights(&raw)?;
        debug!(
            tokens = text.split_whitespace().count(),
            dominant = %distribution.dominant,
            "Classified review"
        );
        Ok(distribution)
    }
}
