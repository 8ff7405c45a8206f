use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod fields;

pub use card::card;
pub use error::error_page;

pub fn button(label: &str) -> Markup {
    html! {
        button type="submit" class="btn primary" { (label) }
    }
}
