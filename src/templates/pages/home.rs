// templates/pages/home.rs

use crate::app::PredictionView;
use crate::domain::form::{
    FormFields, ACCOMMODATES, AMENITIES_COUNT, BATHROOMS, BEDROOMS, BEDS, HOST_RESPONSE_RATE,
    NUMBER_OF_REVIEWS, REVIEW_SCORES_RATING,
};
use crate::domain::listing::{BedType, CancellationPolicy, City, PropertyType, RoomType};
use crate::templates::{
    card,
    components::{
        button,
        fields::{flag_field, number_field, select_field, slider_field, text_field},
    },
    desktop_layout,
    pages::result_panel,
};
use maud::{html, Markup};

/// The predictor form. `current` holds the last submission so the inputs
/// keep their values after a full-page post.
pub fn predictor_page(current: &FormFields, result: Option<&PredictionView>) -> Markup {
    let v = |field: &str| current.optional(field);

    desktop_layout(
        "Airbnb Price Predictor",
        html! {
            main class="container" {
                h1 { "🏡 Airbnb Price Predictor" }
                p class="lead" { "Predict the nightly price of an Airbnb listing based on its features." }

                form
                    method="post"
                    action="/predict"
                    hx-post="/predict"
                    hx-target="#result"
                    hx-swap="innerHTML"
                    hx-disabled-elt="button"
                {
                    div class="columns" {
                        (card("Property Details", html! {
                            (select_field("Property Type", v("property_type"), PropertyType::Apartment))
                            (select_field("Room Type", v("room_type"), RoomType::EntireHome))
                            (slider_field(&ACCOMMODATES, v("accommodates")))
                            (slider_field(&BATHROOMS, v("bathrooms")))
                            (slider_field(&BEDROOMS, v("bedrooms")))
                            (slider_field(&BEDS, v("beds")))
                            (select_field("Bed Type", v("bed_type"), BedType::RealBed))
                            (slider_field(&AMENITIES_COUNT, v("amenities_count")))
                            (flag_field("cleaning_fee", "Cleaning Fee", v("cleaning_fee"), true, Some("1 = Yes, 0 = No")))
                        }))

                        (card("Location Details", html! {
                            (select_field("City", v("city"), City::NewYork))
                            (number_field("latitude", "Latitude", v("latitude"), 40.7128))
                            (number_field("longitude", "Longitude", v("longitude"), -74.0060))
                            (text_field("zipcode", "Zipcode", v("zipcode"), "10001", true))

                            h3 { "Host Details" }
                            (text_field("host_since", "Host Since (YYYY-MM-DD)", v("host_since"), "2015-01-01", true))
                            (flag_field("host_has_profile_pic", "Host Has Profile Pic", v("host_has_profile_pic"), true, None))
                            (flag_field("host_identity_verified", "Host Identity Verified", v("host_identity_verified"), true, None))
                            (slider_field(&HOST_RESPONSE_RATE, v("host_response_rate")))
                        }))

                        (card("Booking & Reviews", html! {
                            (select_field("Cancellation Policy", v("cancellation_policy"), CancellationPolicy::Moderate))
                            (flag_field("instant_bookable", "Instant Bookable", v("instant_bookable"), false, None))

                            h3 { "Review Information" }
                            (slider_field(&NUMBER_OF_REVIEWS, v("number_of_reviews")))
                            (slider_field(&REVIEW_SCORES_RATING, v("review_scores_rating")))
                            (text_field("first_review", "First Review Date (YYYY-MM-DD)", v("first_review"), "2016-01-01", false))
                            (text_field("last_review", "Last Review Date (YYYY-MM-DD)", v("last_review"), "2023-01-01", false))
                        }))
                    }

                    (button("Predict Price"))
                }

                div id="result" {
                    @if let Some(view) = result {
                        (result_panel(view))
                    }
                }
            }
        },
    )
}
