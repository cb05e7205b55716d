use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};

use crate::{
    errors::FireModelError,
    models::{
        input::{WeatherConditions, WeatherObservation},
        output::{BehaviorMetrics, MetricDifferences, ValidationReport},
        vocabulary::{FuelModelType, VegetationType},
    },
    modules::{behavior::models::BehaviorModel, functions::percent_difference},
};

use super::{constants::*, models::HistoricalFireRecord};

fn at_hour(date: NaiveDate, hour: u32) -> Result<NaiveDateTime, FireModelError> {
    date.and_hms_opt(hour, 0, 0).ok_or_else(|| {
        FireModelError::invalid_weather("timestamp", format!("invalid hour {} on {}", hour, date))
    })
}

/// Rebuild a full weather snapshot from a fire record,
/// filling the fields the records do not keep with typical fire-day values
pub fn reconstruct_weather(
    record: &HistoricalFireRecord,
) -> Result<WeatherConditions, FireModelError> {
    let recorded = &record.weather;
    WeatherConditions::new(WeatherObservation {
        temperature: recorded.temperature,
        humidity: recorded.humidity,
        wind_speed: recorded.wind_speed,
        wind_direction: recorded.wind_direction.clone(),
        wind_gusts: recorded.wind_speed * GUST_FACTOR,
        precipitation: DEFAULT_PRECIPITATION,
        pressure: STANDARD_PRESSURE,
        cloud_cover: DEFAULT_CLOUD_COVER,
        cloud_height: DEFAULT_CLOUD_HEIGHT,
        visibility: DEFAULT_VISIBILITY,
        drought_index: recorded.drought_index,
        fuel_moisture_1h: DEFAULT_FUEL_MOISTURE_1H,
        fuel_moisture_10h: DEFAULT_FUEL_MOISTURE_10H,
        fuel_moisture_100h: DEFAULT_FUEL_MOISTURE_100H,
        fuel_moisture_1000h: DEFAULT_FUEL_MOISTURE_1000H,
        mixing_height: DEFAULT_MIXING_HEIGHT,
        transport_wind: recorded.wind_speed,
        ventilation_rate: DEFAULT_MIXING_HEIGHT * recorded.wind_speed,
        timestamp: at_hour(record.date, 0)?,
        sunrise: at_hour(record.date, SUNRISE_HOUR)?,
        sunset: at_hour(record.date, SUNSET_HOUR)?,
    })
}

pub fn infer_fuel_types(location: &str) -> Vec<VegetationType> {
    match LOCATION_FUELS.get(location) {
        Some(fuels) => fuels.clone(),
        None => {
            debug!("no fuel mapping for '{}', using pine-scrub oak fallback", location);
            FALLBACK_FUELS.to_vec()
        }
    }
}

pub fn infer_fuel_model(location: &str) -> FuelModelType {
    LOCATION_FUEL_MODEL
        .get(location)
        .copied()
        .unwrap_or(FALLBACK_FUEL_MODEL)
}

pub fn metric_differences(
    predicted: &BehaviorMetrics,
    actual: &BehaviorMetrics,
) -> MetricDifferences {
    MetricDifferences {
        spread_rate: percent_difference(predicted.spread_rate, actual.spread_rate),
        flame_length: percent_difference(predicted.flame_length, actual.flame_length),
        spotting_distance: percent_difference(
            predicted.spotting_distance,
            actual.spotting_distance,
        ),
    }
}

/// Confidence in [0, 100], undefined differences carry no penalty
pub fn confidence_score(differences: &MetricDifferences) -> f64 {
    let penalty =
        |difference: Option<f64>, weight: f64| difference.map_or(0.0, |d| d.abs() * weight);
    let confidence = 100.0
        - (penalty(differences.spread_rate, SPREAD_WEIGHT)
            + penalty(differences.flame_length, FLAME_WEIGHT)
            + penalty(differences.spotting_distance, SPOTTING_WEIGHT));
    f64::clamp(confidence, 0.0, 100.0)
}

pub fn recommendations(location: &str, differences: &MetricDifferences) -> Vec<String> {
    let mut recommendations = Vec::new();
    if let Some(spread) = differences.spread_rate.filter(|d| d.abs() > SPREAD_TOLERANCE) {
        recommendations.push(format!(
            "Adjust spread rate calculations for {} conditions by factor of {:.2}",
            location,
            1.0 + spread / 100.0
        ));
    }
    if differences
        .flame_length
        .is_some_and(|d| d.abs() > FLAME_TOLERANCE)
    {
        recommendations.push(format!("Review fuel load estimates for {}", location));
    }
    if differences
        .spotting_distance
        .is_some_and(|d| d.abs() > SPOTTING_TOLERANCE)
    {
        recommendations.push(SPOTTING_RECOMMENDATION.to_string());
    }
    recommendations
}

/// Replay one fire through the model and compare with what was observed
pub fn validate_record<M: BehaviorModel + ?Sized>(
    model: &M,
    record: &HistoricalFireRecord,
) -> Result<ValidationReport, FireModelError> {
    let weather = reconstruct_weather(record)?;
    let fuels = infer_fuel_types(&record.location);
    let fuel_model = infer_fuel_model(&record.location);

    let prediction = model.predict(&weather, &fuels, Some(fuel_model));

    let predicted = BehaviorMetrics::from(&prediction);
    let actual = record.observed();
    let differences = metric_differences(&predicted, &actual);
    if differences.spread_rate.is_none()
        || differences.flame_length.is_none()
        || differences.spotting_distance.is_none()
    {
        warn!(
            "{} has zero observed values, their differences are undefined",
            record.fire_name()
        );
    }

    Ok(ValidationReport {
        fire_name: record.fire_name(),
        predicted,
        actual,
        confidence_score: confidence_score(&differences),
        recommendations: recommendations(&record.location, &differences),
        differences,
    })
}
