pub mod home;
pub mod result;

pub use home::predictor_page;
pub use result::result_panel;
