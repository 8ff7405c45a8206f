pub mod dates;
pub mod form;
pub mod listing;

pub use dates::{derive_durations, Clock, DateError, Durations, FixedClock, SystemClock};
pub use form::{parse_listing_form, ValidationError};
pub use listing::{ListingForm, ListingRecord, Vocabulary};
