// src/domain/form.rs
//
// Turns the urlencoded form body into a typed `ListingForm`. The slider
// declarations below are also what the form template renders, so the bounds
// the browser enforces and the bounds checked here are the same numbers.

use crate::domain::listing::{
    BedType, CancellationPolicy, City, ListingForm, PropertyType, RoomType, Vocabulary,
};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// A bounded numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    pub field: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    /// `None` accepts any value inside the bounds.
    pub step: Option<f64>,
    pub default: f64,
}

pub const ACCOMMODATES: Slider = Slider {
    field: "accommodates",
    label: "Guests Accommodated",
    min: 1.0,
    max: 16.0,
    step: Some(1.0),
    default: 2.0,
};

pub const BATHROOMS: Slider = Slider {
    field: "bathrooms",
    label: "Bathrooms",
    min: 0.5,
    max: 5.0,
    step: Some(0.5),
    default: 1.0,
};

pub const BEDROOMS: Slider = Slider {
    field: "bedrooms",
    label: "Bedrooms",
    min: 1.0,
    max: 10.0,
    step: Some(1.0),
    default: 1.0,
};

pub const BEDS: Slider = Slider {
    field: "beds",
    label: "Beds",
    min: 1.0,
    max: 10.0,
    step: Some(1.0),
    default: 1.0,
};

pub const AMENITIES_COUNT: Slider = Slider {
    field: "amenities_count",
    label: "Amenities Count",
    min: 0.0,
    max: 50.0,
    step: Some(1.0),
    default: 10.0,
};

pub const HOST_RESPONSE_RATE: Slider = Slider {
    field: "host_response_rate",
    label: "Host Response Rate (%)",
    min: 0.0,
    max: 100.0,
    step: None,
    default: 90.0,
};

pub const NUMBER_OF_REVIEWS: Slider = Slider {
    field: "number_of_reviews",
    label: "Total Reviews",
    min: 0.0,
    max: 500.0,
    step: Some(1.0),
    default: 25.0,
};

pub const REVIEW_SCORES_RATING: Slider = Slider {
    field: "review_scores_rating",
    label: "Review Score (0-100)",
    min: 0.0,
    max: 100.0,
    step: None,
    default: 95.0,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Missing(&'static str),
    NotANumber {
        field: &'static str,
        value: String,
    },
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    OffStep {
        field: &'static str,
        value: f64,
        step: f64,
    },
    NotAFlag {
        field: &'static str,
        value: String,
    },
    UnknownChoice {
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Missing(field) => write!(f, "missing required field '{field}'"),
            ValidationError::NotANumber { field, value } => {
                write!(f, "{field}: '{value}' is not a number")
            }
            ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{field}: {value} is outside {min}..={max}"),
            ValidationError::OffStep { field, value, step } => {
                write!(f, "{field}: {value} is not a multiple of {step}")
            }
            ValidationError::NotAFlag { field, value } => {
                write!(f, "{field}: expected 1 or 0, got '{value}'")
            }
            ValidationError::UnknownChoice { field, value } => {
                write!(f, "{field}: '{value}' is not one of the offered options")
            }
        }
    }
}

impl Error for ValidationError {}

/// Decoded `application/x-www-form-urlencoded` pairs. Later duplicates win.
#[derive(Debug, Default)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn parse(body: &[u8]) -> Self {
        let values = url::form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { values }
    }

    pub fn optional(&self, field: &str) -> Option<&str> {
        self.values
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn required(&self, field: &'static str) -> Result<&str, ValidationError> {
        self.optional(field).ok_or(ValidationError::Missing(field))
    }

    pub fn number(&self, field: &'static str) -> Result<f64, ValidationError> {
        let raw = self.required(field)?;
        raw.parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| ValidationError::NotANumber {
                field,
                value: raw.to_string(),
            })
    }

    pub fn slider(&self, slider: &Slider) -> Result<f64, ValidationError> {
        let value = self.number(slider.field)?;
        if value < slider.min || value > slider.max {
            return Err(ValidationError::OutOfRange {
                field: slider.field,
                value,
                min: slider.min,
                max: slider.max,
            });
        }
        if let Some(step) = slider.step {
            let steps = (value - slider.min) / step;
            if (steps - steps.round()).abs() > 1e-9 {
                return Err(ValidationError::OffStep {
                    field: slider.field,
                    value,
                    step,
                });
            }
        }
        Ok(value)
    }

    /// Slider whose step is whole numbers.
    pub fn count(&self, slider: &Slider) -> Result<u32, ValidationError> {
        self.slider(slider).map(|v| v.round() as u32)
    }

    pub fn flag(&self, field: &'static str) -> Result<bool, ValidationError> {
        match self.required(field)? {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(ValidationError::NotAFlag {
                field,
                value: other.to_string(),
            }),
        }
    }

    pub fn choice<V: Vocabulary>(&self) -> Result<V, ValidationError> {
        let raw = self.required(V::FIELD)?;
        V::parse(raw).ok_or_else(|| ValidationError::UnknownChoice {
            field: V::FIELD,
            value: raw.to_string(),
        })
    }
}

/// Validates every input on the form. The first problem found is returned.
pub fn parse_listing_form(body: &[u8]) -> Result<ListingForm, ValidationError> {
    let fields = FormFields::parse(body);

    Ok(ListingForm {
        property_type: fields.choice::<PropertyType>()?,
        room_type: fields.choice::<RoomType>()?,
        accommodates: fields.count(&ACCOMMODATES)?,
        bathrooms: fields.slider(&BATHROOMS)?,
        bedrooms: fields.count(&BEDROOMS)?,
        beds: fields.count(&BEDS)?,
        bed_type: fields.choice::<BedType>()?,
        amenities_count: fields.count(&AMENITIES_COUNT)?,
        cleaning_fee: fields.flag("cleaning_fee")?,

        city: fields.choice::<City>()?,
        latitude: fields.number("latitude")?,
        longitude: fields.number("longitude")?,
        zipcode: fields.required("zipcode")?.to_string(),

        host_since: fields.required("host_since")?.to_string(),
        host_has_profile_pic: fields.flag("host_has_profile_pic")?,
        host_identity_verified: fields.flag("host_identity_verified")?,
        host_response_rate: fields.slider(&HOST_RESPONSE_RATE)?,

        cancellation_policy: fields.choice::<CancellationPolicy>()?,
        instant_bookable: fields.flag("instant_bookable")?,
        number_of_reviews: fields.count(&NUMBER_OF_REVIEWS)?,
        review_scores_rating: fields.slider(&REVIEW_SCORES_RATING)?,
        first_review: fields.optional("first_review").map(str::to_string),
        last_review: fields.optional("last_review").map(str::to_string),
    })
}
