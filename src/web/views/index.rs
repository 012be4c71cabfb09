use maud::{html, Markup};
use poem::web::Html;
use poem::{handler, IntoResponse};

use crate::model::{FEATURE_NAMES, N_FEATURES};
use crate::prelude::*;
use crate::web::partials::{document, number_field};
use crate::web::views::predict::models::Outcome;

/// Labels and placeholders of the form fields, in the order of [`FEATURE_NAMES`].
const FIELD_LABELS: [(&str, &str); N_FEATURES] = [
    ("Median income", "e.g. 5.0"),
    ("House age", "e.g. 30"),
    ("Average rooms", "e.g. 6"),
    ("Average bedrooms", "e.g. 3"),
    ("Population", "e.g. 1000"),
];

#[handler]
#[instrument(skip_all, level = "info")]
pub async fn get() -> Result<impl IntoResponse> {
    Ok(Html(render_page(None).into_string()))
}

/// Form page, optionally with the outcome of the previous submission.
pub fn render_page(outcome: Option<&Outcome>) -> Markup {
    let body = html! {
        section.section {
            div.container {
                div.columns {
                    div.column."is-6"."is-offset-3" {
                        h1.title { "🏠 House Price Estimator" }
                        form action="/predict" method="POST" {
                            @for (name, (label, placeholder)) in FEATURE_NAMES.iter().zip(FIELD_LABELS) {
                                (number_field(name, label, placeholder))
                            }
                            div.field {
                                div.control {
                                    button.button.is-link type="submit" { "Estimate" }
                                }
                            }
                        }
                        @if let Some(outcome) = outcome {
                            (render_outcome(outcome))
                        }
                    }
                }
            }
        }
    };
    document("House Price Estimator", body)
}

fn render_outcome(outcome: &Outcome) -> Markup {
    html! {
        @match outcome {
            Outcome::Estimate(texts) => {
                div.notification.is-success."mt-5" {
                    p."is-size-4" id="prediction-text" { (texts.prediction_text) }
                    p id="mse-text" { (texts.mse_text) }
                    p id="rmse-text" { (texts.rmse_text) }
                    p id="r2-text" { (texts.r2_text) }
                }
            }
            Outcome::Error(text) => {
                div.notification.is-danger."mt-5" {
                    p id="prediction-text" { (text) }
                }
            }
        }
    }
}
