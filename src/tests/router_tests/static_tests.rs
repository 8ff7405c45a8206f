use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_app};

#[test]
fn layout_points_at_local_assets() {
    let app = init_test_app();
    let body = body_string(handle(get("/"), &app).expect("Handler failed"));

    assert!(body.contains(r#"href="/static/main.css""#));
    assert!(body.contains(r#"src="/static/htmx.js""#));
    assert!(!body.contains("unpkg.com"));
}

#[test]
fn bundled_stylesheet_is_served() {
    let app = init_test_app();
    let resp = handle(get("/static/main.css"), &app).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(resp).contains(".result.ok"));
}

#[test]
fn htmx_is_read_from_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("htmx.js"), "var htmx = {};").unwrap();
    let app = init_test_app().with_static_dir(dir.path());

    let resp = handle(get("/static/htmx.js"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/javascript; charset=utf-8"
    );
    assert_eq!(body_string(resp), "var htmx = {};");
}

#[test]
fn missing_or_unlisted_assets_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = init_test_app().with_static_dir(dir.path());

    for uri in ["/static/htmx.js", "/static/../Cargo.toml", "/static/secret.txt"] {
        let err = handle(get(uri), &app).unwrap_err();
        assert!(matches!(err, ServerError::NotFound), "{uri}");
    }
}
