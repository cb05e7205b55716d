// RED FLAG WARNING THRESHOLDS
pub const RED_FLAG_WIND_SPEED: f64 = 15.0; // [mph]
pub const RED_FLAG_HUMIDITY: f64 = 25.0; // [%]
pub const RED_FLAG_FUEL_MOISTURE_10H: f64 = 8.0; // [%]

// ATMOSPHERIC STABILITY BUCKETS
pub const STABILITY_CALM_WIND: f64 = 5.0; // [mph]
pub const STABILITY_LIGHT_WIND: f64 = 10.0; // [mph]
pub const STABILITY_MODERATE_WIND: f64 = 15.0; // [mph]
pub const STABILITY_CLEAR_SKY: f64 = 40.0; // cloud cover [%]

// VALID INPUT RANGES
pub const MAX_PERCENT: f64 = 100.0;
pub const MAX_DROUGHT_INDEX: f64 = 800.0; // Keetch-Byram scale
