//! Pre-trained regression model.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::features::{Features, FEATURE_NAMES, N_FEATURES};
use crate::math::dot;
use crate::prelude::*;

mod features;

/// Linear regression exported from scikit-learn as a plain dictionary:
///
/// ```python
/// pickle.dump({"coef_": [float(c) for c in model.coef_], "intercept_": float(model.intercept_)}, file)
/// ```
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Regressor {
    #[serde(rename = "coef_")]
    pub coefficients: Vec<f64>,

    #[serde(rename = "intercept_")]
    pub intercept: f64,
}

impl Regressor {
    /// Reads the model artifact, pickled unless the file has the `.json` extension.
    #[instrument(level = "info", skip_all, fields(path = ?path.as_ref()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let start_instant = Instant::now();
        let path = path.as_ref();
        let buffer = fs::read(path).context("failed to read the model file")?;
        let model = if path.extension().map_or(false, |extension| extension == "json") {
            Self::from_json(&buffer)?
        } else {
            Self::from_pickle(&buffer)?
        };
        info!(
            n_coefficients = model.coefficients.len(),
            intercept = model.intercept,
            elapsed = ?start_instant.elapsed(),
            "loaded",
        );
        Ok(model)
    }

    pub fn from_pickle(buffer: &[u8]) -> Result<Self> {
        let model: Self = serde_pickle::from_slice(buffer, Default::default())
            .context("failed to unpickle the model")?;
        model.validate()
    }

    pub fn from_json(buffer: &[u8]) -> Result<Self> {
        let model: Self = serde_json::from_slice(buffer).context("failed to parse the model")?;
        model.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.coefficients.len() != N_FEATURES {
            bail!(
                "expected {} coefficients, found {}",
                N_FEATURES,
                self.coefficients.len(),
            );
        }
        if !self.intercept.is_finite() || !self.coefficients.iter().all(|c| c.is_finite()) {
            bail!("the model contains non-finite parameters");
        }
        Ok(self)
    }

    #[must_use]
    pub fn predict(&self, features: &Features) -> f64 {
        self.intercept + dot(&self.coefficients, &features.to_array())
    }
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use super::*;

    fn model() -> Regressor {
        Regressor {
            coefficients: vec![40000.0, 1000.0, 5000.0, -2000.0, 10.0],
            intercept: 10000.0,
        }
    }

    fn features() -> Features {
        Features {
            income: 5.0,
            age: 30.0,
            rooms: 6.0,
            bedrooms: 3.0,
            population: 1000.0,
        }
    }

    #[test]
    fn predict_ok() {
        assert!((model().predict(&features()) - 274000.0).abs() < 1e-9);
    }

    #[test]
    fn from_pickle_ok() -> Result {
        let buffer = serde_pickle::to_vec(&model(), Default::default())?;
        assert_eq!(Regressor::from_pickle(&buffer)?, model());
        Ok(())
    }

    #[test]
    fn from_json_ok() -> Result {
        let buffer = br#"{"coef_": [1.0, 2.0, 3.0, 4.0, 5.0], "intercept_": -1.5}"#;
        let model = Regressor::from_json(buffer)?;
        assert_eq!(model.coefficients, [1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(model.intercept, -1.5);
        Ok(())
    }

    #[test]
    fn wrong_feature_count_rejected() {
        let buffer = br#"{"coef_": [1.0, 2.0], "intercept_": 0.0}"#;
        assert!(Regressor::from_json(buffer).is_err());
    }

    #[test]
    fn garbage_rejected() {
        assert!(Regressor::from_pickle(b"definitely not a pickle").is_err());
    }

    #[test]
    fn missing_file_rejected() {
        assert!(Regressor::load(temp_dir().join("house-price-estimator-missing.pkl")).is_err());
    }

    #[test]
    fn load_twice_same_predictions() -> Result {
        let path = temp_dir().join(format!("house-price-estimator-{}.pkl", std::process::id()));
        fs::write(&path, serde_pickle::to_vec(&model(), Default::default())?)?;

        let first = Regressor::load(&path)?;
        let second = Regressor::load(&path)?;
        fs::remove_file(&path)?;

        assert_eq!(first.predict(&features()), second.predict(&features()));
        Ok(())
    }
}
