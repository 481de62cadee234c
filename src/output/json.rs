// JSON rendering of topic distributions, keyed by human-readable label.

use anyhow::Result;
use serde::Serialize;

use crate::topics::classifier::TopicDistribution;

#[derive(Debug, Serialize)]
struct TopicWeight {
    topic: &'static str,
    weight: f64,
}

#[derive(Debug, Serialize)]
struct DistributionReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    review: Option<&'a str>,
    dominant_topic: &'static str,
    dominant_percentage: f64,
    topics: Vec<TopicWeight>,
}

fn report<'a>(distribution: &TopicDistribution, review: Option<&'a str>) -> DistributionReport<'a> {
    DistributionReport {
        review,
        dominant_topic: distribution.dominant.name(),
        dominant_percentage: distribution.dominant_percentage(),
        topics: distribution
            .iter()
            .map(|(label, weight)| TopicWeight {
                topic: label.name(),
                weight,
            })
            .collect(),
    }
}

/// Pretty-printed JSON for a single classification.
pub fn distribution_json(distribution: &TopicDistribution) -> Result<String> {
    Ok(serde_json::to_string_pretty(&report(distribution, None))?)
}

/// One compact JSON line for a batch entry, carrying the review text.
pub fn batch_line_json(review: &str, distribution: &TopicDistribution) -> Result<String> {
    Ok(serde_json::to_string(&report(distribution, Some(review)))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::labels::TOPIC_COUNT;

    #[test]
    fn test_distribution_json_shape() {
        let mut raw = [0.0; TOPIC_COUNT];
        raw[2] = 0.5;
        let d = TopicDistribution::from_weights(&raw).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&distribution_json(&d).unwrap()).unwrap();
        assert_eq!(value["dominant_topic"], "Wine and Culinary Delights");
        assert_eq!(value["dominant_percentage"], 50.0);
        assert_eq!(value["topics"].as_array().unwrap().len(), TOPIC_COUNT);
        assert_eq!(value["topics"][0]["topic"], "Efficient Dining Service");
        assert!(value.get("review").is_none());
    }

    #[test]
    fn test_batch_line_is_single_line() {
        let d = TopicDistribution::from_weights(&[0.0; TOPIC_COUNT]).unwrap();
        let line = batch_line_json("great wine", &d).unwrap();
        assert!(!line.contains('\n'));
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["review"], "great wine");
    }
}
