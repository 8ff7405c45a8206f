use astra::Response;
// errors.rs
use std::fmt;

/// Errors raised by routing and request handling. Prediction failures never
/// show up here; they are rendered as the result text instead.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    MethodNotAllowed,
    BadRequest(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
