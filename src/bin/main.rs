mod common;
use std::env::{set_var, var};
use std::error::Error;
use std::path::Path;
use std::str::FromStr;

use chrono::Utc;
use clap::{command, Parser, Subcommand};
use log::{info, trace, warn};
use serde_json::json;

use common::config::builder::ScenarioFile;
use common::helpers::{print_json, CliError};
use pinebarrens::errors::FireModelError;
use pinebarrens::models::vocabulary::{VegetationType, WildlifeType};
use pinebarrens::modules::{
    behavior::{config::FireBehaviorConfig, models::FireBehaviorCalculator},
    ecology::functions::{vegetation_profile, wildlife_profile},
    history::models::HistoricalValidator,
    tactics::functions::{firefighting_tactics, species_protection_guidelines},
};
use pinebarrens::version::LONG_VERSION;

#[derive(Parser, Debug)]
#[command(
    version,
    long_version=LONG_VERSION,
    about="Pine Barrens fire behavior prediction and historical validation",
    long_about="Predicts rate of spread, flame length, fireline intensity and spotting distance \
for the New Jersey Pine Barrens, and backtests the model against documented fires."
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Predict fire behavior and tactics for every scenario of a YAML file
    Predict {
        #[arg(required = true, help = "Path to the scenario file", index = 1)]
        scenario_path: String,
    },
    /// Replay the historical fires through the model
    Validate {
        #[arg(long, help = "Validate only the record at this index")]
        index: Option<usize>,

        #[arg(long, help = "Spread rate correction factor", default_value_t = 1.0)]
        spread_calibration: f64,
    },
    /// Ecological profile of a documented plant or animal species
    Profile {
        #[arg(
            required = true,
            help = "Species name, e.g. PitchPine or \"Pine Barrens Treefrog\"",
            index = 1
        )]
        species: String,
    },
    /// Species protection guidelines for an operation
    Guidelines {
        #[arg(required = true, index = 1)]
        location: String,
        #[arg(required = true, index = 2)]
        season: String,
    },
}

fn run_predict(scenario_path: &str) -> Result<(), CliError> {
    if !Path::new(scenario_path).is_file() {
        return Err(format!("Scenario file {} is not a file", scenario_path).into());
    }
    let file = ScenarioFile::from_file(scenario_path)?;
    let calculator = file.calculator()?;
    info!(
        "Running model {} (spread calibration {})",
        calculator.config().model_version,
        calculator.config().spread_calibration
    );

    let start_time = Utc::now();
    let predictions = calculator.predict_batch(&file.scenarios());
    trace!("Predictions took {} seconds", Utc::now() - start_time);

    let output: Vec<_> = file
        .scenarios
        .iter()
        .zip(predictions.iter())
        .map(|(scenario, prediction)| {
            json!({
                "name": scenario.name,
                "red_flag_conditions": scenario.weather.red_flag_conditions(),
                "stability_class": scenario.weather.stability_class(),
                "prediction": prediction,
                "tactics": firefighting_tactics(prediction),
            })
        })
        .collect();
    print_json(&output)
}

fn run_validate(index: Option<usize>, spread_calibration: f64) -> Result<(), CliError> {
    let config = if spread_calibration == 1.0 {
        FireBehaviorConfig::default()
    } else {
        FireBehaviorConfig::calibrated(spread_calibration)?
    };
    let validator = HistoricalValidator::new(FireBehaviorCalculator::new(config));

    match index {
        Some(index) => {
            let report = validator.validate_against_historical(index)?;
            print_json(&report)
        }
        None => {
            let summary = validator.validate_all()?;
            info!(
                "Validated {} fires, mean confidence {:.1}",
                summary.reports.len(),
                summary.mean_confidence
            );
            for recommendation in summary.recommendations() {
                warn!("{}", recommendation);
            }
            print_json(&summary)
        }
    }
}

fn run_profile(species: &str) -> Result<(), CliError> {
    if let Ok(vegetation) = VegetationType::from_str(species) {
        return match vegetation_profile(vegetation) {
            Some(profile) => print_json(profile),
            None => Err(format!("No profile documented for {}", vegetation).into()),
        };
    }
    if let Ok(wildlife) = WildlifeType::from_str(species) {
        return match wildlife_profile(wildlife) {
            Some(profile) => print_json(profile),
            None => Err(format!("No profile documented for {}", wildlife).into()),
        };
    }
    Err(FireModelError::UnknownKey {
        kind: "species",
        key: species.to_string(),
    }
    .into())
}

/// main function
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if var("RUST_LOG").is_err() {
        set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    match args.command {
        Command::Predict { scenario_path } => run_predict(&scenario_path)?,
        Command::Validate {
            index,
            spread_calibration,
        } => run_validate(index, spread_calibration)?,
        Command::Profile { species } => run_profile(&species)?,
        Command::Guidelines { location, season } => {
            print_json(&species_protection_guidelines(&location, &season))?
        }
    }
    Ok(())
}
