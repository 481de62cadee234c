// Topic classification — pretrained vectorizer + NMF model over normalized text.

pub mod classifier;
pub mod labels;
pub mod nmf;
pub mod traits;
pub mod vectorizer;
