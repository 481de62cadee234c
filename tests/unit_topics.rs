// Unit tests for topic artifacts and the classifier.
//
// Artifacts are small hand-built JSON files written to a per-test directory
// under the system temp dir: a ten-word vocabulary and an identity-like NMF
// component matrix where topic i owns word i.

use std::path::PathBuf;
use std::sync::Arc;

use review_topics::normalize::language::LexiconIdentifier;
use review_topics::normalize::stopwords::StopwordSet;
use review_topics::normalize::Normalizer;
use review_topics::resources::download::{NMF_MODEL_FILE, VECTORIZER_FILE};
use review_topics::resources::wordlist::WordList;
use review_topics::topics::classifier::{TopicClassifier, TopicDistribution};
use review_topics::topics::labels::{TopicLabel, TOPIC_COUNT};
use review_topics::topics::nmf::NmfModel;
use review_topics::topics::traits::{TopicModel, Vectorizer};
use review_topics::topics::vectorizer::CountVectorizer;

const VOCABULARY: [&str; TOPIC_COUNT] = [
    "service", "atmosphere", "wine", "order", "attentive", "dinner", "timely", "menu",
    "experience", "breakfast",
];

fn vectorizer_json() -> String {
    let entries: Vec<String> = VOCABULARY
        .iter()
        .enumerate()
        .map(|(i, w)| format!("\"{w}\": {i}"))
        .collect();
    format!("{{\"vocabulary\": {{{}}}}}", entries.join(", "))
}

fn identity_components() -> Vec<Vec<f64>> {
    (0..TOPIC_COUNT)
        .map(|i| (0..TOPIC_COUNT).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

fn nmf_json(components: &[Vec<f64>]) -> String {
    serde_json::json!({ "components": components, "max_iter": 200, "tol": 1e-4 }).to_string()
}

fn artifact_dir(name: &str, vectorizer: &str, nmf: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("review-topics-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(VECTORIZER_FILE), vectorizer).unwrap();
    std::fs::write(dir.join(NMF_MODEL_FILE), nmf).unwrap();
    dir
}

fn normalizer() -> Normalizer {
    let mut lexicon: Vec<&str> = VOCABULARY.to_vec();
    lexicon.extend(["the", "was", "and", "a", "delicious", "lovely", "with", "view"]);
    let words = Arc::new(WordList::from_words(lexicon));
    Normalizer::new(
        words.clone(),
        Box::new(LexiconIdentifier::new(words)),
        StopwordSet::from_words(["the", "was", "and", "a", "with"]),
    )
}

// ============================================================
// Loading
// ============================================================

#[test]
fn loads_artifacts_from_model_dir() {
    let dir = artifact_dir("load", &vectorizer_json(), &nmf_json(&identity_components()));
    let classifier = TopicClassifier::load(normalizer(), &dir);
    std::fs::remove_dir_all(&dir).unwrap();
    assert!(classifier.is_ok());
}

#[test]
fn missing_artifacts_are_fatal() {
    let dir = std::env::temp_dir().join("review-topics-no-artifacts-here");
    assert!(TopicClassifier::load(normalizer(), &dir).is_err());
}

#[test]
fn wrong_component_count_is_fatal() {
    let components = identity_components()[..4].to_vec();
    let dir = artifact_dir("components", &vectorizer_json(), &nmf_json(&components));
    let result = TopicClassifier::load(normalizer(), &dir);
    std::fs::remove_dir_all(&dir).unwrap();
    assert!(result.is_err());
}

#[test]
fn feature_space_mismatch_is_fatal() {
    let vectorizer = CountVectorizer::from_json(r#"{"vocabulary": {"wine": 0, "menu": 1}}"#)
        .unwrap();
    let model = NmfModel::from_components(identity_components()).unwrap();
    assert_eq!(vectorizer.n_features(), 2);
    assert_eq!(model.n_features(), TOPIC_COUNT);
    assert!(TopicClassifier::new(normalizer(), Box::new(vectorizer), Box::new(model)).is_err());
}

// ============================================================
// Classification
// ============================================================

fn classifier() -> TopicClassifier {
    let vectorizer = CountVectorizer::from_json(&vectorizer_json()).unwrap();
    let model = NmfModel::from_components(identity_components()).unwrap();
    TopicClassifier::new(normalizer(), Box::new(vectorizer), Box::new(model)).unwrap()
}

#[test]
fn single_topic_word_dominates() {
    let d = classifier().classify("The wine was delicious").unwrap();
    assert_eq!(d.dominant, TopicLabel::WineAndCulinaryDelights);
    assert_eq!(d.weight(TopicLabel::WineAndCulinaryDelights), 1.0);
    assert_eq!(d.dominant_percentage(), 100.0);
    assert!(d
        .iter()
        .filter(|(label, _)| *label != d.dominant)
        .all(|(_, w)| w == 0.0));
}

#[test]
fn repeated_word_outweighs_single_word() {
    let d = classifier()
        .classify("Breakfast, breakfast and the breakfast menu with a view")
        .unwrap();
    assert_eq!(d.dominant, TopicLabel::HotelBreakfastDelights);
    assert!(d.weight(TopicLabel::HotelBreakfastDelights) > d.weight(TopicLabel::FlavorfulMenuOptions));
    assert!(d.weight(TopicLabel::FlavorfulMenuOptions) > 0.0);
}

#[test]
fn empty_review_gives_degenerate_distribution() {
    let d = classifier().classify("").unwrap();
    assert!(d.weights.iter().all(|w| *w == 0.0));
    assert_eq!(d.dominant, TopicLabel::EfficientDiningService);
}

#[test]
fn review_with_no_known_words_gives_degenerate_distribution() {
    let d = classifier().classify("lovely view").unwrap();
    assert!(d.weights.iter().all(|w| *w == 0.0));
    assert_eq!(d.dominant, TopicLabel::ALL[0]);
}

#[test]
fn every_distribution_has_ten_non_negative_weights() {
    let c = classifier();
    for review in ["dinner and wine", "timely service", "", "attentive experience!!"] {
        let d = c.classify(review).unwrap();
        assert_eq!(d.weights.len(), TOPIC_COUNT);
        assert!(d.weights.iter().all(|w| *w >= 0.0));
        let max = d.weights.iter().copied().fold(0.0_f64, f64::max);
        assert_eq!(d.weight(d.dominant), max);
    }
}

// ============================================================
// Argmax tie-breaking
// ============================================================

#[test]
fn ties_go_to_lowest_index() {
    let d = classifier().classify("dinner wine").unwrap();
    assert_eq!(
        d.weight(TopicLabel::WineAndCulinaryDelights),
        d.weight(TopicLabel::DeliciousDinnerAtmosphere)
    );
    assert_eq!(d.dominant, TopicLabel::WineAndCulinaryDelights);
}

#[test]
fn from_weights_matches_classifier_rounding() {
    let mut raw = [0.0; TOPIC_COUNT];
    raw[8] = 0.33333333333333;
    let d = TopicDistribution::from_weights(&raw).unwrap();
    assert_eq!(d.weights[8], 0.3333333333);
    assert_eq!(d.dominant, TopicLabel::OverallDiningExperience);
}
