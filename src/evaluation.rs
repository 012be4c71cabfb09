//! Demo-only «evaluation» of a single prediction.
//!
//! There is no ground truth for a submitted house, so the actual price is fabricated by
//! perturbing the prediction. The resulting numbers are meaningless and only fill the page.

use std::ops::Range;

use rand::Rng;

use crate::math::{mean_squared_error, r2_score};

/// Range of the uniform offset added to the prediction.
pub const PERTURBATION: Range<f64> = -5000.0..5000.0;

#[derive(Debug, Copy, Clone)]
pub struct Evaluation {
    pub actual: f64,
    pub mse: f64,
    pub rmse: f64,
    pub r2: f64,
}

impl Evaluation {
    pub fn fabricate(prediction: f64, rng: &mut impl Rng) -> Self {
        let actual = prediction + rng.gen_range(PERTURBATION);
        Self::new(actual, prediction)
    }

    #[must_use]
    pub fn new(actual: f64, prediction: f64) -> Self {
        let mse = mean_squared_error(&[actual], &[prediction]);
        Self {
            actual,
            mse,
            rmse: mse.sqrt(),
            r2: r2_score(&[actual], &[prediction]),
        }
    }
}
