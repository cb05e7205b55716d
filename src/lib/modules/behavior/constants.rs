use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::vocabulary::VegetationType;

// RISK SCORE THRESHOLDS (value, points), checked from the top
pub const RISK_TEMPERATURE: [(f64, u32); 3] = [(90.0, 3), (80.0, 2), (70.0, 1)]; // >= [°F]
pub const RISK_HUMIDITY: [(f64, u32); 3] = [(30.0, 3), (45.0, 2), (60.0, 1)]; // < [%]
pub const RISK_WIND_SPEED: [(f64, u32); 3] = [(20.0, 3), (12.0, 2), (7.0, 1)]; // >= [mph]
pub const RISK_DROUGHT: [(f64, u32); 3] = [(500.0, 3), (300.0, 2), (200.0, 1)]; // >= [KBDI]

pub const SCORE_EXTREME: u32 = 10;
pub const SCORE_VERY_HIGH: u32 = 8;
pub const SCORE_HIGH: u32 = 6;
pub const SCORE_MODERATE: u32 = 4;

// SPREAD RATE CONSTANTS
pub const WIND_SPREAD_COEFF: f64 = 0.87;
pub const DROUGHT_SPREAD_DIVISOR: f64 = 1000.0;
pub const MIN_PRECIPITATION_EFFECT: f64 = 0.2;
pub const PRECIPITATION_DAMPING: f64 = 2.0; // per inch
pub const REFERENCE_TEMPERATURE: f64 = 85.0; // [°F]
pub const MIN_TEMP_FACTOR: f64 = 0.5;
pub const MAX_TEMP_FACTOR: f64 = 1.5;
pub const HIGH_WIND_THRESHOLD: f64 = 15.0; // [mph]
pub const HIGH_WIND_OFFSET: f64 = 10.0; // [mph]

// BYRAM FLAME LENGTH: L = 0.45 * (I / 100)^0.46
pub const BYRAM_COEFF: f64 = 0.45;
pub const BYRAM_EXPONENT: f64 = 0.46;
pub const BYRAM_INTENSITY_SCALE: f64 = 100.0;

// SPOTTING CONSTANTS
pub const CONVECTION_EXPONENT: f64 = 1.5;
pub const SPOTTING_WIND_EXPONENT: f64 = 1.7;
pub const SPOTTING_WIND_DIVISOR: f64 = 25.0;
pub const SPOTTING_DIVISOR: f64 = 50.0;
pub const SPOTTING_DROUGHT_DIVISOR: f64 = 800.0;
pub const UNSTABLE_FACTOR: f64 = 1.3; // hot and dry
pub const STABLE_FACTOR: f64 = 0.8; // cool or humid
pub const MAX_SPOTTING_DISTANCE: f64 = 3.0; // [mi]

// CONTAINMENT CHALLENGES
pub const CHALLENGE_WIND_SPEED: f64 = 15.0; // > [mph]
pub const CHALLENGE_HUMIDITY: f64 = 30.0; // < [%]
pub const CHALLENGE_DROUGHT: f64 = 400.0; // > [KBDI]
pub const HIGH_WINDS_CHALLENGE: &str = "High winds limiting aerial operations";
pub const LOW_HUMIDITY_CHALLENGE: &str = "Low humidity increasing fire intensity";
pub const PINE_FUELS_CHALLENGE: &str = "Dense pine fuels with high spotting potential";
pub const DROUGHT_CHALLENGE: &str = "Severe drought conditions";

lazy_static! {
    /// multiplicative spread adjustment per species, absent species count 1.0
    pub static ref SPREAD_MULTIPLIER: HashMap<VegetationType, f64> = HashMap::from([
        (VegetationType::PitchPine, 1.8),  // resin content, dense crown
        (VegetationType::ScrubOak, 1.3),
        (VegetationType::ShortleafPine, 1.5),
    ]);

    /// terrain channeling by wind direction, unknown directions count 1.0
    pub static ref TERRAIN_FACTOR: HashMap<&'static str, f64> = HashMap::from([
        ("N", 1.1),  // channeled by valleys
        ("NE", 1.2),
        ("E", 1.0),  // coastal moderation
        ("SE", 0.9),
        ("S", 0.8),
        ("SW", 1.1),
        ("W", 1.2),  // dry continental flow
        ("NW", 1.3),
    ]);
}
