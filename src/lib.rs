pub mod app;
pub mod config;
pub mod domain;
pub mod encoder;
pub mod errors;
pub mod inference;
pub mod logging;
pub mod model;
pub mod responses;
pub mod router;
pub mod schema;
pub mod templates;

pub use app::{App, PredictionView};
pub use router::handle;

#[cfg(test)]
mod tests;
