use ndarray::{Array1, Zip};
use serde_derive::{Deserialize, Serialize};

use crate::models::{
    input::WeatherConditions,
    output::FireBehaviorPrediction,
    vocabulary::{FuelModelType, VegetationType},
};

use super::{config::FireBehaviorConfig, functions::predict_fire_behavior};

/// Anything able to turn weather and fuels into a behavior prediction.
/// The historical validator is generic over it.
pub trait BehaviorModel: Sync {
    fn predict(
        &self,
        weather: &WeatherConditions,
        fuels: &[VegetationType],
        fuel_model: Option<FuelModelType>,
    ) -> FireBehaviorPrediction;
}

/// One independent prediction input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorScenario {
    pub weather: WeatherConditions,
    pub fuels: Vec<VegetationType>,
    #[serde(default)]
    pub fuel_model: Option<FuelModelType>,
}

/// Stateless Pine Barrens fire behavior calculator
#[derive(Debug, Clone, Default)]
pub struct FireBehaviorCalculator {
    config: FireBehaviorConfig,
}

impl FireBehaviorCalculator {
    pub fn new(config: FireBehaviorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FireBehaviorConfig {
        &self.config
    }

    pub fn predict_scenario(&self, scenario: &BehaviorScenario) -> FireBehaviorPrediction {
        self.predict(&scenario.weather, &scenario.fuels, scenario.fuel_model)
    }

    /// Evaluate independent scenarios in parallel, results keep the input order
    pub fn predict_batch(&self, scenarios: &[BehaviorScenario]) -> Vec<FireBehaviorPrediction> {
        let scenarios = Array1::from_iter(scenarios.iter());
        let predictions: Array1<FireBehaviorPrediction> =
            Zip::from(&scenarios).par_map_collect(|scenario| self.predict_scenario(scenario));
        predictions.to_vec()
    }
}

impl BehaviorModel for FireBehaviorCalculator {
    fn predict(
        &self,
        weather: &WeatherConditions,
        fuels: &[VegetationType],
        fuel_model: Option<FuelModelType>,
    ) -> FireBehaviorPrediction {
        predict_fire_behavior(weather, fuels, fuel_model, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::input::{tests::observation, WeatherObservation};
    use crate::models::vocabulary::{FireRiskLevel, VegetationType::*};

    fn scenario(wind_speed: f64, fuels: Vec<VegetationType>) -> BehaviorScenario {
        BehaviorScenario {
            weather: WeatherConditions::new(WeatherObservation {
                wind_speed,
                ..observation()
            })
            .expect("valid observation"),
            fuels,
            fuel_model: Some(FuelModelType::PB_PineScrub),
        }
    }

    #[test]
    fn batch_matches_sequential_predictions() {
        let calculator = FireBehaviorCalculator::default();
        let scenarios: Vec<BehaviorScenario> = (0..32)
            .map(|i| scenario(i as f64, vec![PitchPine, ScrubOak]))
            .collect();

        let batch = calculator.predict_batch(&scenarios);
        assert_eq!(batch.len(), scenarios.len());
        for (scenario, prediction) in scenarios.iter().zip(batch.iter()) {
            assert_eq!(&calculator.predict_scenario(scenario), prediction);
        }
        assert!(calculator.predict_batch(&[]).is_empty());
    }

    #[test]
    fn calm_air_gives_no_fire_spread() {
        let calculator = FireBehaviorCalculator::default();
        let prediction = calculator.predict_scenario(&scenario(0.0, vec![PitchPine]));
        assert_eq!(prediction.spread_rate, 0.0);
        assert_eq!(prediction.flame_length, 0.0);
        assert_eq!(prediction.spotting_distance, 0.0);
        assert_eq!(prediction.risk_level, FireRiskLevel::Moderate);
    }

    #[test]
    fn scenario_from_json() {
        let payload = serde_json::json!({
            "weather": serde_json::to_value(observation()).expect("serializable"),
            "fuels": ["PitchPine", "ScrubOak"],
        });
        let scenario: BehaviorScenario = serde_json::from_value(payload).expect("valid scenario");
        assert_eq!(scenario.fuels, vec![PitchPine, ScrubOak]);
        assert_eq!(scenario.fuel_model, None);
    }
}
