use std::str::FromStr;

use serde::Deserialize;

use crate::evaluation::Evaluation;
use crate::format::format_grouped;
use crate::model::{Features, FEATURE_NAMES, N_FEATURES};
use crate::prelude::*;

/// Raw form submission.
///
/// Every field is optional and textual, so that a malformed submission still reaches the
/// handler and gets reported on the page.
#[derive(Deserialize)]
pub struct PredictForm {
    pub income: Option<String>,
    pub age: Option<String>,
    pub rooms: Option<String>,
    pub bedrooms: Option<String>,
    pub population: Option<String>,
}

impl TryFrom<PredictForm> for Features {
    type Error = Error;

    fn try_from(form: PredictForm) -> Result<Self> {
        let values = [form.income, form.age, form.rooms, form.bedrooms, form.population];
        let mut features = [0.0; N_FEATURES];
        for ((feature, name), value) in features.iter_mut().zip(FEATURE_NAMES).zip(values) {
            *feature = parse_field(name, value)?;
        }
        Ok(Self::from(features))
    }
}

fn parse_field(name: &str, value: Option<String>) -> Result<f64> {
    let value = value.ok_or_else(|| anyhow!("missing field `{}`", name))?;
    f64::from_str(value.trim()).with_context(|| format!("`{}` is not a number: `{}`", name, value))
}

/// Display strings for a successful estimate.
#[derive(Debug)]
pub struct EstimateTexts {
    pub prediction_text: String,
    pub mse_text: String,
    pub rmse_text: String,
    pub r2_text: String,
}

impl EstimateTexts {
    pub fn new(prediction: f64, evaluation: &Evaluation) -> Self {
        Self {
            prediction_text: format!("💰 Estimated House Price: ${}", format_grouped(prediction, 2)),
            mse_text: format!("MSE: {:.2}", evaluation.mse),
            rmse_text: format!("RMSE: {:.2}", evaluation.rmse),
            r2_text: format!("R² Score: {:.2}", evaluation.r2),
        }
    }
}

/// What the page shows below the form.
pub enum Outcome {
    Estimate(EstimateTexts),
    Error(String),
}

impl From<Error> for Outcome {
    fn from(error: Error) -> Self {
        Self::Error(format!("Error: {:#}", error))
    }
}
