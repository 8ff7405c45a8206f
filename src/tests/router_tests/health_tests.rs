use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app};

#[test]
fn health_reports_artifact_fingerprints() {
    let mut app = init_test_app();
    app.model_sha256 = Some("abc123".into());

    let resp = handle(get("/health"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let json: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["model_sha256"], "abc123");
    assert!(json["encoder_sha256"].is_null());
}
