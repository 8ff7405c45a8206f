use crate::app::App;
use crate::domain::form::FormFields;
use crate::errors::ServerError;
use crate::responses::{asset_response, html_response, json_response, ResultResp};
use crate::templates::pages::{predictor_page, result_panel};
use astra::Request;
use serde::Serialize;
use mime::Mime;
use std::io::{ErrorKind, Read};
use tracing::{debug, warn};

/// Largest form body accepted on POST /predict.
pub const MAX_FORM_BYTES: u64 = 16 * 1024;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(predictor_page(&FormFields::default(), None)),

        ("POST", "/predict") => {
            let body = read_body(&mut req)?;
            let view = app.predict_form(&body);

            if is_htmx(&req) {
                html_response(result_panel(&view))
            } else {
                let submitted = FormFields::parse(&body);
                html_response(predictor_page(&submitted, Some(&view)))
            }
        }

        ("GET", "/health") => json_response(&Health {
            status: "ok",
            model_sha256: app.model_sha256.as_deref(),
            encoder_sha256: app.encoder_sha256.as_deref(),
        }),

        ("GET", p) if p.starts_with("/static/") => static_asset(app, &p["/static/".len()..]),

        (_, "/" | "/predict" | "/health") => Err(ServerError::MethodNotAllowed),

        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
struct Health<'a> {
    status: &'static str,
    model_sha256: Option<&'a str>,
    encoder_sha256: Option<&'a str>,
}

/// Only these names are served from the static directory.
fn asset_type(name: &str) -> Option<Mime> {
    match name {
        "main.css" => Some(mime::TEXT_CSS_UTF_8),
        "htmx.js" => Some(mime::APPLICATION_JAVASCRIPT_UTF_8),
        _ => None,
    }
}

fn static_asset(app: &App, name: &str) -> ResultResp {
    let content_type = asset_type(name).ok_or(ServerError::NotFound)?;
    let path = app.static_dir().join(name);

    match std::fs::read(&path) {
        Ok(bytes) => asset_response(bytes, &content_type),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ServerError::NotFound),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read static asset");
            Err(ServerError::InternalError)
        }
    }
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "true")
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read form: {e}")))?;

    if buf.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form body too large".into()));
    }
    Ok(buf)
}
