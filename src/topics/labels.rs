// Topic labels — the fixed index -> name table for the pretrained NMF model.
//
// The order here is an external contract: index i must be component i of the
// trained model. Retraining the model means revisiting this table.

use serde::Serialize;

/// Number of topics the model was trained with.
pub const TOPIC_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TopicLabel {
    EfficientDiningService,
    QualityFoodAndAtmosphere,
    WineAndCulinaryDelights,
    OrderingAndWaiting,
    AttentiveDiningExperience,
    DeliciousDinnerAtmosphere,
    TimelyDiningExperience,
    FlavorfulMenuOptions,
    OverallDiningExperience,
    HotelBreakfastDelights,
}

impl TopicLabel {
    /// All labels in component order.
    pub const ALL: [TopicLabel; TOPIC_COUNT] = [
        TopicLabel::EfficientDiningService,
        TopicLabel::QualityFoodAndAtmosphere,
        TopicLabel::WineAndCulinaryDelights,
        TopicLabel::OrderingAndWaiting,
        TopicLabel::AttentiveDiningExperience,
        TopicLabel::DeliciousDinnerAtmosphere,
        TopicLabel::TimelyDiningExperience,
        TopicLabel::FlavorfulMenuOptions,
        TopicLabel::OverallDiningExperience,
        TopicLabel::HotelBreakfastDelights,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name shown to users.
    pub fn name(self) -> &'static str {
        match self {
            TopicLabel::EfficientDiningService => "Efficient Dining Service",
            TopicLabel::QualityFoodAndAtmosphere => "Quality Food and Atmosphere",
            TopicLabel::WineAndCulinaryDelights => "Wine and Culinary Delights",
            TopicLabel::OrderingAndWaiting => "Ordering and Waiting",
            TopicLabel::AttentiveDiningExperience => "Attentive Dining Experience",
            TopicLabel::DeliciousDinnerAtmosphere => "Delicious Dinner Atmosphere",
            TopicLabel::TimelyDiningExperience => "Timely Dining Experience",
            TopicLabel::FlavorfulMenuOptions => "Flavorful Menu Options",
            TopicLabel::OverallDiningExperience => "Overall Dining Experience",
            TopicLabel::HotelBreakfastDelights => "Hotel Breakfast Delights",
        }
    }
}

impl std::fmt::Display for TopicLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order_matches_components() {
        for (i, label) in TopicLabel::ALL.iter().enumerate() {
            assert_eq!(label.index(), i);
            assert_eq!(TopicLabel::from_index(i), Some(*label));
        }
        assert_eq!(TopicLabel::from_index(TOPIC_COUNT), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(TopicLabel::ALL[0].name(), "Efficient Dining Service");
        assert_eq!(TopicLabel::ALL[3].to_string(), "Ordering and Waiting");
        assert_eq!(TopicLabel::ALL[9].name(), "Hotel Breakfast Delights");
    }
}
