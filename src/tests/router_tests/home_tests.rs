use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app};

#[test]
fn home_serves_form_with_defaults() {
    let app = init_test_app();
    let resp = handle(get("/"), &app).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(resp);
    assert!(body.contains("Airbnb Price Predictor"));
    assert!(body.contains(r#"action="/predict""#));
    assert!(body.contains(r#"<option value="Apartment" selected>"#));
    assert!(body.contains(r#"<option value="moderate" selected>"#));
    assert!(body.contains(r#"value="2015-01-01""#));
    assert!(body.contains(r#"value="40.7128""#));
    // no result until something is submitted
    assert!(!body.contains("Prediction Result"));
}

#[test]
fn unknown_route_is_not_found() {
    let app = init_test_app();
    let err = handle(get("/admin"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn get_on_predict_is_method_not_allowed() {
    let app = init_test_app();
    let err = handle(get("/predict"), &app).unwrap_err();
    assert!(matches!(err, ServerError::MethodNotAllowed));

    let resp = crate::responses::error_to_response(err);
    assert_eq!(resp.status(), 405);
}
