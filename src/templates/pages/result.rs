use crate::app::PredictionView;
use maud::{html, Markup};

/// "Prediction Result" box. Also returned on its own for htmx swaps.
pub fn result_panel(view: &PredictionView) -> Markup {
    let class = if view.succeeded {
        "card result ok"
    } else {
        "card result error"
    };

    html! {
        section class=(class) {
            h3 { "Prediction Result" }
            output name="result" { (view.message) }
            @if !view.notes.is_empty() {
                ul class="notes" {
                    @for note in &view.notes {
                        li { (note) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_message_and_notes() {
        let view = PredictionView {
            message: "Predicted Price: $130.00 per night".into(),
            succeeded: true,
            notes: vec!["city 'Other' was not in the training data".into()],
        };
        let html = result_panel(&view).into_string();
        assert!(html.contains("Predicted Price: $130.00 per night"));
        assert!(html.contains("card result ok"));
        assert!(html.contains("&#39;Other&#39;") || html.contains("'Other'"));
    }

    #[test]
    fn errors_are_escaped_and_styled() {
        let view = PredictionView {
            message: "Error in prediction: <script>".into(),
            succeeded: false,
            notes: Vec::new(),
        };
        let html = result_panel(&view).into_string();
        assert!(html.contains("card result error"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<ul"));
    }
}
