use log::warn;
use serde_derive::{Deserialize, Serialize};

use crate::{
    errors::FireModelError,
    models::{input::WeatherConditions, vocabulary::VegetationType},
};

use super::functions::spread_rate;

pub const DEFAULT_MODEL_VERSION: &str = "v2025";
pub const CALIBRATED_MODEL_VERSION: &str = "calibrated";

/// Serializable definition of the model configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireBehaviorConfigDef {
    #[serde(default = "default_model_version")]
    pub model_version: String,
    /// multiplicative correction applied to the spread rate before rounding
    #[serde(default = "default_spread_calibration")]
    pub spread_calibration: f64,
}

fn default_model_version() -> String {
    DEFAULT_MODEL_VERSION.to_owned()
}

fn default_spread_calibration() -> f64 {
    1.0
}

impl Default for FireBehaviorConfigDef {
    fn default() -> Self {
        Self {
            model_version: default_model_version(),
            spread_calibration: default_spread_calibration(),
        }
    }
}

// calibration factors are finite and strictly positive
fn check_calibration(spread_calibration: f64) -> Result<f64, FireModelError> {
    if spread_calibration.is_finite() && spread_calibration > 0.0 {
        Ok(spread_calibration)
    } else {
        Err(FireModelError::InvalidConfig {
            field: "spread_calibration",
            reason: format!("must be a positive finite number, got {}", spread_calibration),
        })
    }
}

/// configuration structure for model config
/// can be used to store functions and constants
#[derive(Debug, Clone)]
pub struct FireBehaviorConfig {
    pub model_version: String,
    pub spread_calibration: f64,
    spread_fn: fn(&WeatherConditions, &[VegetationType], f64) -> f64,
}

impl FireBehaviorConfig {
    pub fn new(model_version_str: &str) -> Self {
        // every known version shares the same spread function for now
        let spread_fn: fn(&WeatherConditions, &[VegetationType], f64) -> f64 =
            match model_version_str {
                DEFAULT_MODEL_VERSION | CALIBRATED_MODEL_VERSION => spread_rate,
                _ => {
                    warn!(
                        "unknown model version '{}', using the {} functions",
                        model_version_str, DEFAULT_MODEL_VERSION
                    );
                    spread_rate
                }
            };

        FireBehaviorConfig {
            model_version: model_version_str.to_owned(),
            spread_calibration: 1.0,
            spread_fn,
        }
    }

    /// Configuration applying a spread-rate correction, e.g. the factor
    /// suggested by the historical validator.
    pub fn calibrated(spread_calibration: f64) -> Result<Self, FireModelError> {
        Ok(Self {
            spread_calibration: check_calibration(spread_calibration)?,
            ..Self::new(CALIBRATED_MODEL_VERSION)
        })
    }

    pub fn from_def(def: &FireBehaviorConfigDef) -> Result<Self, FireModelError> {
        Ok(Self {
            spread_calibration: check_calibration(def.spread_calibration)?,
            ..Self::new(&def.model_version)
        })
    }

    pub fn spread_rate(&self, weather: &WeatherConditions, fuels: &[VegetationType]) -> f64 {
        (self.spread_fn)(weather, fuels, self.spread_calibration)
    }
}

impl Default for FireBehaviorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::input::{tests::observation, WeatherObservation};
    use crate::modules::behavior::functions::predict_fire_behavior;

    #[test]
    fn calibration_must_be_positive_and_finite() {
        for factor in [-1.0, 0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(
                    FireBehaviorConfig::calibrated(factor),
                    Err(FireModelError::InvalidConfig {
                        field: "spread_calibration",
                        ..
                    })
                ),
                "{}",
                factor
            );
        }

        let def = FireBehaviorConfigDef {
            spread_calibration: -1.0,
            ..FireBehaviorConfigDef::default()
        };
        assert!(FireBehaviorConfig::from_def(&def).is_err());
    }

    #[test]
    fn calibrated_predictions_stay_in_range() {
        let config = FireBehaviorConfig::calibrated(0.5).expect("valid factor");
        assert_eq!(config.model_version, CALIBRATED_MODEL_VERSION);

        let weather = WeatherConditions::new(WeatherObservation {
            wind_speed: 10.0,
            ..observation()
        })
        .expect("valid observation");
        let prediction = predict_fire_behavior(
            &weather,
            &[VegetationType::PitchPine],
            None,
            &config,
        );
        assert!(prediction.spread_rate > 0.0);
        assert!(prediction.flame_length.is_finite());
        assert!(prediction.intensity.is_finite());
        assert!((0.0..=3.0).contains(&prediction.spotting_distance));
    }

    #[test]
    fn definition_keeps_version_and_factor() {
        let def = FireBehaviorConfigDef {
            model_version: "experimental".to_string(),
            spread_calibration: 1.2,
        };
        let config = FireBehaviorConfig::from_def(&def).expect("valid definition");
        assert_eq!(config.model_version, "experimental");
        assert_eq!(config.spread_calibration, 1.2);

        let default = FireBehaviorConfig::from_def(&FireBehaviorConfigDef::default())
            .expect("valid definition");
        assert_eq!(default.model_version, DEFAULT_MODEL_VERSION);
        assert_eq!(default.spread_calibration, 1.0);
    }
}
