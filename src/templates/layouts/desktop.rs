use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {}
            }
            body {
                header {
                    span aria-hidden="true" { "🏡" }
                    h3 { "Airbnb Price Predictor" }
                    nav {
                        a href="/" { "Home" }
                    }
                }
                (content)
            }
        }
    }
}
