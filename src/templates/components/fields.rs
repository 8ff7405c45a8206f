// templates/components/fields.rs
//
// Labeled inputs for the predictor form. Each one takes the value submitted
// last time (if any) so a re-rendered form keeps what the user typed.

use crate::domain::form::Slider;
use crate::domain::Vocabulary;
use maud::{html, Markup};

pub fn select_field<V: Vocabulary>(label: &str, current: Option<&str>, default: V) -> Markup {
    let selected = current.and_then(V::parse).unwrap_or(default);

    html! {
        div class="field" {
            label for=(V::FIELD) { (label) }
            select name=(V::FIELD) id=(V::FIELD) required {
                @for option in V::all() {
                    option value=(option.as_str()) selected[option.as_str() == selected.as_str()] {
                        (option.as_str())
                    }
                }
            }
        }
    }
}

pub fn slider_field(slider: &Slider, current: Option<&str>) -> Markup {
    let value = current
        .map(str::to_string)
        .unwrap_or_else(|| slider.default.to_string());
    let (min, max) = (slider.min.to_string(), slider.max.to_string());
    let step = slider
        .step
        .map(|s| s.to_string())
        .unwrap_or_else(|| "any".to_string());

    html! {
        div class="field" {
            label for=(slider.field) {
                (slider.label)
                small { " (" (min) "–" (max) ")" }
            }
            input
                type="number"
                name=(slider.field)
                id=(slider.field)
                min=(min)
                max=(max)
                step=(step)
                value=(value)
                required;
        }
    }
}

/// 1 / 0 radio pair.
pub fn flag_field(
    field: &str,
    label: &str,
    current: Option<&str>,
    default: bool,
    info: Option<&str>,
) -> Markup {
    let on = match current {
        Some("1") => true,
        Some("0") => false,
        _ => default,
    };

    html! {
        fieldset class="field radio" {
            legend { (label) }
            label { input type="radio" name=(field) value="1" checked[on]; " 1" }
            label { input type="radio" name=(field) value="0" checked[!on]; " 0" }
            @if let Some(info) = info {
                small class="info" { (info) }
            }
        }
    }
}

pub fn number_field(field: &str, label: &str, current: Option<&str>, default: f64) -> Markup {
    let value = current
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string());

    html! {
        div class="field" {
            label for=(field) { (label) }
            input type="number" name=(field) id=(field) step="any" value=(value) required;
        }
    }
}

pub fn text_field(
    field: &str,
    label: &str,
    current: Option<&str>,
    default: &str,
    required: bool,
) -> Markup {
    html! {
        div class="field" {
            label for=(field) { (label) }
            input type="text" name=(field) id=(field) value=(current.unwrap_or(default)) required[required];
        }
    }
}
