// src/domain/listing.rs

use crate::domain::dates::{derive_durations, DateError, Durations};
use chrono::NaiveDate;

/// A closed set of labels offered as a dropdown on the form.
pub trait Vocabulary: Copy + Sized + 'static {
    /// Form / feature name of the column.
    const FIELD: &'static str;

    fn all() -> &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all().iter().copied().find(|v| v.as_str() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    Apartment,
    House,
    Condominium,
    Townhouse,
    Loft,
    Villa,
    Other,
}

impl Vocabulary for PropertyType {
    const FIELD: &'static str = "property_type";

    fn all() -> &'static [Self] {
        &[
            PropertyType::Apartment,
            PropertyType::House,
            PropertyType::Condominium,
            PropertyType::Townhouse,
            PropertyType::Loft,
            PropertyType::Villa,
            PropertyType::Other,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Condominium => "Condominium",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Loft => "Loft",
            PropertyType::Villa => "Villa",
            PropertyType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomType {
    EntireHome,
    PrivateRoom,
    SharedRoom,
    HotelRoom,
}

impl Vocabulary for RoomType {
    const FIELD: &'static str = "room_type";

    fn all() -> &'static [Self] {
        &[
            RoomType::EntireHome,
            RoomType::PrivateRoom,
            RoomType::SharedRoom,
            RoomType::HotelRoom,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            RoomType::EntireHome => "Entire home/apt",
            RoomType::PrivateRoom => "Private room",
            RoomType::SharedRoom => "Shared room",
            RoomType::HotelRoom => "Hotel room",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedType {
    RealBed,
    PullOutSofa,
    Futon,
    Airbed,
    Couch,
}

impl Vocabulary for BedType {
    const FIELD: &'static str = "bed_type";

    fn all() -> &'static [Self] {
        &[
            BedType::RealBed,
            BedType::PullOutSofa,
            BedType::Futon,
            BedType::Airbed,
            BedType::Couch,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            BedType::RealBed => "Real Bed",
            BedType::PullOutSofa => "Pull-out Sofa",
            BedType::Futon => "Futon",
            BedType::Airbed => "Airbed",
            BedType::Couch => "Couch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationPolicy {
    Flexible,
    Moderate,
    Strict,
    SuperStrict30,
    SuperStrict60,
}

impl Vocabulary for CancellationPolicy {
    const FIELD: &'static str = "cancellation_policy";

    fn all() -> &'static [Self] {
        &[
            CancellationPolicy::Flexible,
            CancellationPolicy::Moderate,
            CancellationPolicy::Strict,
            CancellationPolicy::SuperStrict30,
            CancellationPolicy::SuperStrict60,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            CancellationPolicy::Flexible => "flexible",
            CancellationPolicy::Moderate => "moderate",
            CancellationPolicy::Strict => "strict",
            CancellationPolicy::SuperStrict30 => "super_strict_30",
            CancellationPolicy::SuperStrict60 => "super_strict_60",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    NewYork,
    LosAngeles,
    Chicago,
    SanFrancisco,
    Boston,
    Washington,
    Miami,
    Other,
}

impl Vocabulary for City {
    const FIELD: &'static str = "city";

    fn all() -> &'static [Self] {
        &[
            City::NewYork,
            City::LosAngeles,
            City::Chicago,
            City::SanFrancisco,
            City::Boston,
            City::Washington,
            City::Miami,
            City::Other,
        ]
    }

    fn as_str(self) -> &'static str {
        match self {
            City::NewYork => "New York",
            City::LosAngeles => "Los Angeles",
            City::Chicago => "Chicago",
            City::SanFrancisco => "San Francisco",
            City::Boston => "Boston",
            City::Washington => "Washington",
            City::Miami => "Miami",
            City::Other => "Other",
        }
    }
}

/// Everything the form submits, already typed and range-checked but with the
/// dates still as text.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    // Property
    pub property_type: PropertyType,
    pub room_type: RoomType,
    pub accommodates: u32,
    pub bathrooms: f64,
    pub bedrooms: u32,
    pub beds: u32,
    pub bed_type: BedType,
    pub amenities_count: u32,
    pub cleaning_fee: bool,

    // Location
    pub city: City,
    pub latitude: f64,
    pub longitude: f64,
    pub zipcode: String,

    // Host
    pub host_since: String,
    pub host_has_profile_pic: bool,
    pub host_identity_verified: bool,
    pub host_response_rate: f64,

    // Booking & reviews
    pub cancellation_policy: CancellationPolicy,
    pub instant_bookable: bool,
    pub number_of_reviews: u32,
    pub review_scores_rating: f64,
    pub first_review: Option<String>,
    pub last_review: Option<String>,
}

impl ListingForm {
    /// Derives the date features and produces the record handed to the model.
    pub fn into_record(self, today: NaiveDate) -> Result<ListingRecord, DateError> {
        let durations = derive_durations(
            &self.host_since,
            self.first_review.as_deref(),
            self.last_review.as_deref(),
            today,
        )?;
        Ok(ListingRecord::new(self, durations))
    }
}

/// One inference request: the 20 raw inputs plus the two derived durations.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub property_type: PropertyType,
    pub room_type: RoomType,
    pub accommodates: u32,
    pub bathrooms: f64,
    pub bed_type: BedType,
    pub cancellation_policy: CancellationPolicy,
    pub cleaning_fee: bool,
    pub city: City,
    pub host_has_profile_pic: bool,
    pub host_identity_verified: bool,
    pub host_response_rate: f64,
    pub instant_bookable: bool,
    pub latitude: f64,
    pub longitude: f64,
    pub number_of_reviews: u32,
    pub review_scores_rating: f64,
    pub zipcode: String,
    pub bedrooms: u32,
    pub beds: u32,
    pub amenities_count: u32,
    pub host_duration: i64,
    pub review_period: i64,
}

impl ListingRecord {
    pub fn new(form: ListingForm, durations: Durations) -> Self {
        Self {
            property_type: form.property_type,
            room_type: form.room_type,
            accommodates: form.accommodates,
            bathrooms: form.bathrooms,
            bed_type: form.bed_type,
            cancellation_policy: form.cancellation_policy,
            cleaning_fee: form.cleaning_fee,
            city: form.city,
            host_has_profile_pic: form.host_has_profile_pic,
            host_identity_verified: form.host_identity_verified,
            host_response_rate: form.host_response_rate,
            instant_bookable: form.instant_bookable,
            latitude: form.latitude,
            longitude: form.longitude,
            number_of_reviews: form.number_of_reviews,
            review_scores_rating: form.review_scores_rating,
            zipcode: form.zipcode,
            bedrooms: form.bedrooms,
            beds: form.beds,
            amenities_count: form.amenities_count,
            host_duration: durations.host_duration,
            review_period: durations.review_period,
        }
    }

    /// The nominal values in encoder column order.
    pub fn nominal_values(&self) -> [(&'static str, &'static str); 5] {
        [
            (PropertyType::FIELD, self.property_type.as_str()),
            (RoomType::FIELD, self.room_type.as_str()),
            (BedType::FIELD, self.bed_type.as_str()),
            (CancellationPolicy::FIELD, self.cancellation_policy.as_str()),
            (City::FIELD, self.city.as_str()),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::default_form;
    use super::*;
    use crate::schema::NOMINAL_COLUMNS;

    #[test]
    fn vocabulary_round_trips_labels() {
        assert_eq!(RoomType::parse("Entire home/apt"), Some(RoomType::EntireHome));
        assert_eq!(
            CancellationPolicy::parse(" super_strict_60 "),
            Some(CancellationPolicy::SuperStrict60)
        );
        assert_eq!(City::parse("Paris"), None);
        assert_eq!(BedType::all().len(), 5);
    }

    #[test]
    fn nominal_values_follow_encoder_column_order() {
        let record = default_form()
            .into_record(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap();
        let columns: Vec<_> = record.nominal_values().iter().map(|(c, _)| *c).collect();
        assert_eq!(columns, NOMINAL_COLUMNS);
        assert_eq!(record.nominal_values()[4].1, "New York");
    }

    #[test]
    fn into_record_carries_durations() {
        let record = default_form()
            .into_record(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .unwrap();
        assert_eq!(record.host_duration, 3287);
        assert_eq!(record.review_period, 2557);
        assert_eq!(record.zipcode, "10001");
    }
}
