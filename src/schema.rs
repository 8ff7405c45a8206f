// src/schema.rs
//
// The feature contract the trained model was fit on. Both the request path
// (form -> feature row) and the offline encoder fitter read from here so the
// two can't drift apart.

/// How a feature is represented in the row handed to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// One value out of a closed vocabulary.
    Categorical,
    Continuous,
    Discrete,
    /// Boolean carried as 0 / 1.
    Flag,
    /// Free text that must never be parsed as a number.
    Text,
    /// Whole days computed from the date inputs.
    Derived,
}

impl FeatureKind {
    /// True when the model receives this feature as a string.
    pub fn is_textual(self) -> bool {
        matches!(self, FeatureKind::Categorical | FeatureKind::Text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSpec {
    pub name: &'static str,
    pub kind: FeatureKind,
}

const fn feature(name: &'static str, kind: FeatureKind) -> FeatureSpec {
    FeatureSpec { name, kind }
}

pub const FEATURE_COUNT: usize = 22;

/// Ordered exactly as the model's training frame.
pub const FEATURES: [FeatureSpec; FEATURE_COUNT] = [
    feature("property_type", FeatureKind::Categorical),
    feature("room_type", FeatureKind::Categorical),
    feature("accommodates", FeatureKind::Discrete),
    feature("bathrooms", FeatureKind::Continuous),
    feature("bed_type", FeatureKind::Categorical),
    feature("cancellation_policy", FeatureKind::Categorical),
    feature("cleaning_fee", FeatureKind::Flag),
    feature("city", FeatureKind::Categorical),
    feature("host_has_profile_pic", FeatureKind::Flag),
    feature("host_identity_verified", FeatureKind::Flag),
    feature("host_response_rate", FeatureKind::Continuous),
    feature("instant_bookable", FeatureKind::Flag),
    feature("latitude", FeatureKind::Continuous),
    feature("longitude", FeatureKind::Continuous),
    feature("number_of_reviews", FeatureKind::Discrete),
    feature("review_scores_rating", FeatureKind::Continuous),
    feature("zipcode", FeatureKind::Text),
    feature("bedrooms", FeatureKind::Discrete),
    feature("beds", FeatureKind::Discrete),
    feature("amenities_count", FeatureKind::Discrete),
    feature("host_duration", FeatureKind::Derived),
    feature("review_period", FeatureKind::Derived),
];

/// Columns the one-hot encoder is fit over, in output order.
pub const NOMINAL_COLUMNS: [&str; 5] = [
    "property_type",
    "room_type",
    "bed_type",
    "cancellation_policy",
    "city",
];

pub fn feature_names() -> impl Iterator<Item = &'static str> {
    FEATURES.iter().map(|f| f.name)
}

pub fn kind_of(name: &str) -> Option<FeatureKind> {
    FEATURES.iter().find(|f| f.name == name).map(|f| f.kind)
}
