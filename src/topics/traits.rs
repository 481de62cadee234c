// Vectorizer and topic model traits — swap-ready abstractions.
//
// The classifier only needs "text -> feature vector" and "feature vector ->
// topic weights". The default implementations read JSON artifacts exported
// from the trained models, but anything honoring these contracts plugs in.

/// Turns a normalized token string into a dense feature vector.
pub trait Vectorizer: Send + Sync {
    /// Length of every vector `transform` returns.
    fn n_features(&self) -> usize;

    fn transform(&self, text: &str) -> Vec<f64>;
}

/// Maps a feature vector to non-negative per-topic weights.
pub trait TopicModel: Send + Sync {
    fn n_components(&self) -> usize;

    fn n_features(&self) -> usize;

    /// `features.len()` must equal `n_features()`.
    fn transform(&self, features: &[f64]) -> Vec<f64>;
}
