// review-topics: topic classification for restaurant reviews
//
// This is the library root. Text goes through the normalization pipeline,
// then a pretrained vectorizer and NMF model assign it to one of ten topics.

pub mod config;
pub mod normalize;
pub mod output;
pub mod resources;
pub mod status;
pub mod topics;
