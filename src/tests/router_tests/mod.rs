mod health_tests;
mod home_tests;
mod predict_tests;
mod static_tests;
