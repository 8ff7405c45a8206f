use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Basic error page body shared by every non-200 response.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            main class="container narrow" {
                h1 { "Error " (status) }
                p class="lead" { (message) }
                p { a href="/" { "← Back to the predictor" } }
            }
        },
    )
}
