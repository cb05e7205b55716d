use std::{fs::File, io::Read};

use log::info;
use pinebarrens::{
    models::{
        input::WeatherConditions,
        vocabulary::{FuelModelType, VegetationType},
    },
    modules::behavior::{
        config::{FireBehaviorConfig, FireBehaviorConfigDef},
        models::{BehaviorScenario, FireBehaviorCalculator},
    },
};
use serde_derive::{Deserialize, Serialize};

use crate::common::helpers::CliError;

/// A scenario entry of the scenario file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub weather: WeatherConditions,
    pub fuels: Vec<VegetationType>,
    #[serde(default)]
    pub fuel_model: Option<FuelModelType>,
}

impl NamedScenario {
    pub fn scenario(&self) -> BehaviorScenario {
        BehaviorScenario {
            weather: self.weather.clone(),
            fuels: self.fuels.clone(),
            fuel_model: self.fuel_model,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub model: FireBehaviorConfigDef,
    pub scenarios: Vec<NamedScenario>,
}

impl ScenarioFile {
    pub fn from_file(config_file: &str) -> Result<ScenarioFile, CliError> {
        if config_file.ends_with(".yaml") || config_file.ends_with(".yml") {
            Self::from_yaml(config_file)
        } else {
            Err(CliError::from(format!(
                "Unsupported scenario file format: {}",
                config_file
            )))
        }
    }

    pub fn from_yaml(config_file: &str) -> Result<Self, CliError> {
        let mut file = File::open(config_file)
            .map_err(|err| format!("Cannot open scenario file {}: {}", config_file, err))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|err| format!("Cannot read scenario file {}: {}", config_file, err))?;

        let conf = Self::parse(&contents)
            .map_err(|err| format!("Cannot parse scenario file {}: {}", config_file, err))?;
        info!(
            "Loaded {} scenario(s) from {}",
            conf.scenarios.len(),
            config_file
        );
        Ok(conf)
    }

    pub fn parse(contents: &str) -> Result<Self, CliError> {
        let conf: Self =
            serde_yaml::from_str(contents).map_err(|err| CliError::from(err.to_string()))?;
        FireBehaviorConfig::from_def(&conf.model)?;
        Ok(conf)
    }

    pub fn calculator(&self) -> Result<FireBehaviorCalculator, CliError> {
        let config = FireBehaviorConfig::from_def(&self.model)?;
        Ok(FireBehaviorCalculator::new(config))
    }

    pub fn scenarios(&self) -> Vec<BehaviorScenario> {
        self.scenarios.iter().map(NamedScenario::scenario).collect()
    }
}
