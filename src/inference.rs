// src/inference.rs
//
// Listing record -> feature row -> model -> nightly price.

use crate::domain::listing::{ListingRecord, Vocabulary};
use crate::model::{FeatureRow, FeatureValue, InferenceError, PriceModel};
use crate::schema::FEATURE_COUNT;

fn number(v: impl Into<f64>) -> FeatureValue {
    FeatureValue::Number(v.into())
}

fn flag(b: bool) -> FeatureValue {
    FeatureValue::Number(if b { 1.0 } else { 0.0 })
}

fn text(s: &str) -> FeatureValue {
    FeatureValue::Text(s.to_string())
}

/// Lays the record out in the column order and naming the model was trained on.
pub fn assemble_row(record: &ListingRecord) -> FeatureRow {
    let mut row = FeatureRow::with_capacity(FEATURE_COUNT);

    row.push("property_type", text(record.property_type.as_str()));
    row.push("room_type", text(record.room_type.as_str()));
    row.push("accommodates", number(record.accommodates));
    row.push("bathrooms", number(record.bathrooms));
    row.push("bed_type", text(record.bed_type.as_str()));
    row.push("cancellation_policy", text(record.cancellation_policy.as_str()));
    row.push("cleaning_fee", flag(record.cleaning_fee));
    row.push("city", text(record.city.as_str()));
    row.push("host_has_profile_pic", flag(record.host_has_profile_pic));
    row.push("host_identity_verified", flag(record.host_identity_verified));
    row.push("host_response_rate", number(record.host_response_rate));
    row.push("instant_bookable", flag(record.instant_bookable));
    row.push("latitude", number(record.latitude));
    row.push("longitude", number(record.longitude));
    row.push("number_of_reviews", number(record.number_of_reviews));
    row.push("review_scores_rating", number(record.review_scores_rating));
    row.push("zipcode", text(&record.zipcode));
    row.push("bedrooms", number(record.bedrooms));
    row.push("beds", number(record.beds));
    row.push("amenities_count", number(record.amenities_count));
    // i64 -> f64 is exact for any realistic day count
    row.push("host_duration", number(record.host_duration as f64));
    row.push("review_period", number(record.review_period as f64));

    row
}

/// Runs the model on a single-row batch and undoes the log transform of the
/// training target.
pub fn predict_price(model: &dyn PriceModel, record: &ListingRecord) -> Result<f64, InferenceError> {
    let batch = [assemble_row(record)];
    let out = model.predict(&batch)?;

    let [log_price] = out.as_slice() else {
        return Err(InferenceError::Shape {
            expected: batch.len(),
            actual: out.len(),
        });
    };
    if !log_price.is_finite() {
        return Err(InferenceError::NonFinite(*log_price));
    }

    let price = log_price.exp();
    if !price.is_finite() {
        return Err(InferenceError::NonFinite(price));
    }
    Ok(price)
}

/// `1234.5` -> `$1,234.50`
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

pub fn price_message(price: f64) -> String {
    format!("Predicted Price: {} per night", format_currency(price))
}

pub fn error_message(err: &dyn std::error::Error) -> String {
    format!("Error in prediction: {err}")
}
