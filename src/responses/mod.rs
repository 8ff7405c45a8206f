pub mod asset;
pub mod errors;
pub mod html;
pub mod json;

pub use errors::{error_to_response, ResultResp};

// Normal HTML response
pub use html::html_response;
pub use json::json_response;

// Files under /static
pub use asset::asset_response;
