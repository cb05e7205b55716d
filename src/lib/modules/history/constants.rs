use std::collections::HashMap;

use chrono::NaiveDate;
use lazy_static::lazy_static;

use crate::models::vocabulary::{FuelModelType, VegetationType};

use super::models::{HistoricalFireRecord, RecordedWeather};

// DEFAULTS FOR WEATHER FIELDS NOT KEPT IN THE RECORDS
pub const DEFAULT_PRECIPITATION: f64 = 0.0; // fire days are dry [in]
pub const GUST_FACTOR: f64 = 1.5; // gusts = 1.5 * wind speed
pub const STANDARD_PRESSURE: f64 = 1013.25; // [mb]
pub const DEFAULT_CLOUD_COVER: f64 = 10.0; // [%]
pub const DEFAULT_CLOUD_HEIGHT: f64 = 10000.0; // [ft]
pub const DEFAULT_VISIBILITY: f64 = 10.0; // [mi]
pub const DEFAULT_FUEL_MOISTURE_1H: f64 = 6.0; // [%]
pub const DEFAULT_FUEL_MOISTURE_10H: f64 = 8.0; // [%]
pub const DEFAULT_FUEL_MOISTURE_100H: f64 = 10.0; // [%]
pub const DEFAULT_FUEL_MOISTURE_1000H: f64 = 12.0; // [%]
pub const DEFAULT_MIXING_HEIGHT: f64 = 5000.0; // [ft]
pub const SUNRISE_HOUR: u32 = 6;
pub const SUNSET_HOUR: u32 = 20;

// CALIBRATION CONSTANTS
pub const SPREAD_WEIGHT: f64 = 0.3;
pub const FLAME_WEIGHT: f64 = 0.3;
pub const SPOTTING_WEIGHT: f64 = 0.4;
pub const SPREAD_TOLERANCE: f64 = 20.0; // [%]
pub const FLAME_TOLERANCE: f64 = 20.0; // [%]
pub const SPOTTING_TOLERANCE: f64 = 30.0; // [%]
pub const SPOTTING_RECOMMENDATION: &str = "Enhance spotting model for high-wind conditions";

pub const FALLBACK_FUELS: [VegetationType; 2] =
    [VegetationType::PitchPine, VegetationType::ScrubOak];
pub const FALLBACK_FUEL_MODEL: FuelModelType = FuelModelType::PB_PineScrub;

fn fire(
    (year, month, day): (i32, u32, u32),
    acres: u32,
    cause: &str,
    location: &str,
    notes: &str,
    weather: RecordedWeather,
    (spread_rate, flame_length, spotting): (f64, f64, f64),
) -> HistoricalFireRecord {
    HistoricalFireRecord {
        year,
        // literal dates below are valid calendar days
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        acres,
        cause: cause.to_string(),
        location: location.to_string(),
        notes: notes.to_string(),
        weather,
        spread_rate,
        flame_length,
        spotting,
    }
}

fn recorded(
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    wind_direction: &str,
    drought_index: f64,
) -> RecordedWeather {
    RecordedWeather {
        temperature,
        humidity,
        wind_speed,
        wind_direction: wind_direction.to_string(),
        drought_index,
    }
}

lazy_static! {
    /// Documented Pine Barrens fires with the behavior observed on the day
    pub static ref HISTORICAL_FIRES: Vec<HistoricalFireRecord> = vec![
        fire(
            (1963, 4, 20),
            37000,
            "Human-caused",
            "Bass River State Forest",
            "Black Saturday Fire",
            recorded(85.0, 15.0, 25.0, "NW", 450.0),
            (220.0, 40.0, 1.2),
        ),
        fire(
            (2007, 5, 15),
            17000,
            "Military training",
            "Warren Grove Range",
            "Warren Grove Fire",
            recorded(82.0, 22.0, 20.0, "W", 380.0),
            (180.0, 35.0, 0.8),
        ),
        fire(
            (2002, 6, 2),
            1300,
            "Lightning",
            "Wharton State Forest",
            "Jake Branch Fire",
            recorded(88.0, 35.0, 12.0, "SW", 320.0),
            (120.0, 25.0, 0.4),
        ),
        fire(
            (1995, 8, 20),
            800,
            "Human-caused",
            "Penn State Forest",
            "Late summer drought conditions",
            recorded(92.0, 28.0, 15.0, "W", 520.0),
            (150.0, 30.0, 0.6),
        ),
    ];

    /// Dominant fuels around each documented fire location
    pub static ref LOCATION_FUELS: HashMap<&'static str, Vec<VegetationType>> = {
        use VegetationType::*;
        HashMap::from([
            ("Bass River State Forest", vec![PitchPine, ScrubOak, ShortleafPine]),
            ("Warren Grove Range", vec![PitchPine, ScrubOak, BlueberryLowbush]),
            ("Wharton State Forest", vec![PitchPine, BlackjackOak, MountainLaurel]),
            ("Penn State Forest", vec![PitchPine, VirginiaPine, ScrubOak]),
        ])
    };

    pub static ref LOCATION_FUEL_MODEL: HashMap<&'static str, FuelModelType> = HashMap::from([
        ("Bass River State Forest", FuelModelType::PB_PineScrub),
        ("Warren Grove Range", FuelModelType::PB_SparsePine),
        ("Wharton State Forest", FuelModelType::PB_DensePine),
        ("Penn State Forest", FuelModelType::PB_PineScrub),
    ]);
}
