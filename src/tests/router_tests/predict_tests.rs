use crate::domain::form::fixtures::{default_body, default_body_with};
use crate::errors::ServerError;
use crate::inference::price_message;
use crate::router::{handle, MAX_FORM_BYTES};
use crate::tests::utils::{body_string, init_test_app, post_form};

#[test]
fn full_post_renders_price_and_keeps_inputs() {
    let app = init_test_app();
    let form = default_body_with(&[("city", "Chicago"), ("accommodates", "6")]);

    let resp = handle(post_form("/predict", &form, false), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    // base 4.0, Chicago -0.25, accommodates >= 4 +0.3
    assert!(body.contains(&price_message((4.0f64 - 0.25 + 0.3).exp())));
    assert!(body.contains(r#"<option value="Chicago" selected>"#));
    assert!(body.contains(r#"value="6""#));
    assert!(body.contains("<!DOCTYPE html>"));
}

#[test]
fn htmx_post_returns_only_result_panel() {
    let app = init_test_app();
    let resp =
        handle(post_form("/predict", &default_body(), true), &app).expect("Handler failed");

    let body = body_string(resp);
    assert!(body.starts_with("<section"));
    assert!(body.contains("Predicted Price: $"));
    assert!(body.contains("per night"));
    assert!(!body.contains("<form"));
}

#[test]
fn malformed_date_is_shown_not_raised() {
    let app = init_test_app();
    let form = default_body_with(&[("host_since", "not-a-date")]);

    let resp = handle(post_form("/predict", &form, true), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Error in prediction: host_since"));
    assert!(body.contains("card result error"));
}

#[test]
fn empty_submission_is_shown_not_raised() {
    let app = init_test_app();
    let resp = handle(post_form("/predict", "", false), &app).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Error in prediction: missing required field"));
}

#[test]
fn oversized_body_is_bad_request() {
    let app = init_test_app();
    let huge = "a".repeat(MAX_FORM_BYTES as usize + 1);

    let err = handle(post_form("/predict", &huge, false), &app).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
