use log::trace;

use crate::{
    models::{
        input::WeatherConditions,
        output::FireBehaviorPrediction,
        vocabulary::{FireRiskLevel, FuelModelType, VegetationType},
    },
    modules::{
        functions::round_to,
        fuel::functions::{fuel_load, heat_content},
    },
};

use super::{config::FireBehaviorConfig, constants::*};

fn points_at_least(value: f64, table: &[(f64, u32)]) -> u32 {
    table
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map_or(0, |(_, points)| *points)
}

fn points_below(value: f64, table: &[(f64, u32)]) -> u32 {
    table
        .iter()
        .find(|(threshold, _)| value < *threshold)
        .map_or(0, |(_, points)| *points)
}

/// Additive weather risk score in [0, 12]
pub fn risk_score(weather: &WeatherConditions) -> u32 {
    points_at_least(weather.temperature, &RISK_TEMPERATURE)
        + points_below(weather.humidity, &RISK_HUMIDITY)
        + points_at_least(weather.wind_speed, &RISK_WIND_SPEED)
        + points_at_least(weather.drought_index, &RISK_DROUGHT)
}

pub fn risk_level_from_score(score: u32) -> FireRiskLevel {
    match score {
        s if s >= SCORE_EXTREME => FireRiskLevel::Extreme,
        s if s >= SCORE_VERY_HIGH => FireRiskLevel::VeryHigh,
        s if s >= SCORE_HIGH => FireRiskLevel::High,
        s if s >= SCORE_MODERATE => FireRiskLevel::Moderate,
        _ => FireRiskLevel::Low,
    }
}

pub fn risk_level(weather: &WeatherConditions) -> FireRiskLevel {
    risk_level_from_score(risk_score(weather))
}

/// Severity rank of a risk level, Low = 0 .. Extreme = 4
pub fn risk_severity(level: FireRiskLevel) -> u8 {
    match level {
        FireRiskLevel::Low => 0,
        FireRiskLevel::Moderate => 1,
        FireRiskLevel::High => 2,
        FireRiskLevel::VeryHigh => 3,
        FireRiskLevel::Extreme => 4,
    }
}

// Rate of spread [ft/min], wind driven adaptation of Rothermel
// species multipliers compound: a species listed twice counts twice
pub fn spread_rate(
    weather: &WeatherConditions,
    fuels: &[VegetationType],
    calibration: f64,
) -> f64 {
    let base_rate = (weather.wind_speed * WIND_SPREAD_COEFF)
        * (1.0 + (weather.drought_index / DROUGHT_SPREAD_DIVISOR));

    let fuel_adjustment: f64 = fuels
        .iter()
        .filter_map(|fuel| SPREAD_MULTIPLIER.get(fuel))
        .product();

    let mut moisture_effect = 1.0 - (weather.humidity / 100.0);
    if weather.precipitation > 0.0 {
        moisture_effect *= f64::max(
            MIN_PRECIPITATION_EFFECT,
            1.0 - (weather.precipitation * PRECIPITATION_DAMPING),
        );
    }

    let temp_factor = f64::clamp(
        weather.temperature / REFERENCE_TEMPERATURE,
        MIN_TEMP_FACTOR,
        MAX_TEMP_FACTOR,
    );

    let mut ros = base_rate * fuel_adjustment * moisture_effect * temp_factor;

    if weather.wind_speed > HIGH_WIND_THRESHOLD {
        ros *= 1.0 + (f64::ln(weather.wind_speed - HIGH_WIND_OFFSET) / 2.0);
    }
    trace!(
        "spread: base {} fuel {} moisture {} temp {} -> {}",
        base_rate,
        fuel_adjustment,
        moisture_effect,
        temp_factor,
        ros
    );

    round_to(ros * calibration, 1)
}

/// Byram fireline intensity I = h * w * r [BTU/ft/s]
pub fn byram_intensity(heat_content: f64, fuel_load: f64, spread_rate: f64) -> f64 {
    heat_content * fuel_load * (spread_rate / 60.0) // ft/min -> ft/s
}

// Flame length [ft] from Byram's equation L = 0.45 * (I/100)^0.46
pub fn flame_length(
    spread_rate: f64,
    fuels: &[VegetationType],
    fuel_model: Option<FuelModelType>,
) -> f64 {
    let intensity = byram_intensity(heat_content(fuels), fuel_load(fuels, fuel_model), spread_rate);
    let flame_length = BYRAM_COEFF * (intensity / BYRAM_INTENSITY_SCALE).powf(BYRAM_EXPONENT);
    round_to(flame_length, 1)
}

// Fireline intensity [BTU/ft/s], inverse of the flame length equation
pub fn fire_intensity(flame_length: f64) -> f64 {
    let intensity = BYRAM_INTENSITY_SCALE * (flame_length / BYRAM_COEFF).powf(1.0 / BYRAM_EXPONENT);
    round_to(intensity, 1)
}

/// Terrain influence of the Pine Barrens valleys and ridges on wind driven fire
pub fn terrain_factor(wind_direction: &str) -> f64 {
    TERRAIN_FACTOR
        .get(wind_direction.to_uppercase().as_str())
        .copied()
        .unwrap_or(1.0)
}

fn spotting_stability_factor(weather: &WeatherConditions) -> f64 {
    if weather.temperature > 85.0 && weather.humidity < 40.0 {
        UNSTABLE_FACTOR
    } else if weather.temperature < 60.0 || weather.humidity > 70.0 {
        STABLE_FACTOR
    } else {
        1.0
    }
}

// Maximum spotting distance [mi], capped at 3 miles
pub fn spotting_distance(weather: &WeatherConditions, flame_length: f64) -> f64 {
    let convection_power = flame_length.powf(CONVECTION_EXPONENT);
    let wind_factor = weather.wind_speed.powf(SPOTTING_WIND_EXPONENT) / SPOTTING_WIND_DIVISOR;
    let stability_factor = spotting_stability_factor(weather);
    let drought_factor = 1.0 + (weather.drought_index / SPOTTING_DROUGHT_DIVISOR);

    let max_distance = (convection_power * wind_factor * stability_factor * drought_factor)
        / SPOTTING_DIVISOR
        * terrain_factor(&weather.wind_direction);

    round_to(f64::clamp(max_distance, 0.0, MAX_SPOTTING_DISTANCE), 2)
}

pub fn containment_challenges(
    weather: &WeatherConditions,
    fuels: &[VegetationType],
) -> Vec<String> {
    let mut challenges = Vec::new();
    if weather.wind_speed > CHALLENGE_WIND_SPEED {
        challenges.push(HIGH_WINDS_CHALLENGE.to_string());
    }
    if weather.humidity < CHALLENGE_HUMIDITY {
        challenges.push(LOW_HUMIDITY_CHALLENGE.to_string());
    }
    if fuels.contains(&VegetationType::PitchPine) {
        challenges.push(PINE_FUELS_CHALLENGE.to_string());
    }
    if weather.drought_index > CHALLENGE_DROUGHT {
        challenges.push(DROUGHT_CHALLENGE.to_string());
    }
    challenges
}

/// Full prediction pipeline: spread -> flame length -> intensity -> spotting
pub fn predict_fire_behavior(
    weather: &WeatherConditions,
    fuels: &[VegetationType],
    fuel_model: Option<FuelModelType>,
    config: &FireBehaviorConfig,
) -> FireBehaviorPrediction {
    let spread_rate = config.spread_rate(weather, fuels);
    let flame_length = flame_length(spread_rate, fuels, fuel_model);

    FireBehaviorPrediction {
        risk_level: risk_level(weather),
        spread_rate,
        flame_length,
        intensity: fire_intensity(flame_length),
        spotting_distance: spotting_distance(weather, flame_length),
        containment_challenges: containment_challenges(weather, fuels),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::models::input::{tests::observation, WeatherObservation};
    use crate::models::vocabulary::VegetationType::*;

    fn weather(obs: WeatherObservation) -> WeatherConditions {
        WeatherConditions::new(obs).expect("valid observation")
    }

    fn reference_weather() -> WeatherConditions {
        weather(WeatherObservation {
            temperature: 85.0,
            humidity: 50.0,
            wind_speed: 10.0,
            drought_index: 0.0,
            precipitation: 0.0,
            ..observation()
        })
    }

    #[test]
    fn risk_levels() {
        let extreme = weather(WeatherObservation {
            temperature: 95.0,
            humidity: 20.0,
            wind_speed: 25.0,
            drought_index: 600.0,
            ..observation()
        });
        assert_eq!(risk_score(&extreme), 12);
        assert_eq!(risk_level(&extreme), FireRiskLevel::Extreme);

        let very_high = weather(WeatherObservation {
            temperature: 85.0,
            humidity: 40.0,
            wind_speed: 15.0,
            drought_index: 300.0,
            ..observation()
        });
        assert_eq!(risk_score(&very_high), 8);
        assert_eq!(risk_level(&very_high), FireRiskLevel::VeryHigh);

        let low = weather(WeatherObservation {
            temperature: 65.0,
            humidity: 60.0,
            wind_speed: 5.0,
            drought_index: 100.0,
            ..observation()
        });
        assert_eq!(risk_score(&low), 0);
        assert_eq!(risk_level(&low), FireRiskLevel::Low);
    }

    #[test]
    fn risk_score_maps_to_ordered_levels() {
        let levels: Vec<u8> = (0..=12)
            .map(|score| risk_severity(risk_level_from_score(score)))
            .collect();
        assert!(levels.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(risk_level_from_score(3), FireRiskLevel::Low);
        assert_eq!(risk_level_from_score(4), FireRiskLevel::Moderate);
        assert_eq!(risk_level_from_score(6), FireRiskLevel::High);
        assert_eq!(risk_level_from_score(9), FireRiskLevel::VeryHigh);
        assert_eq!(risk_level_from_score(10), FireRiskLevel::Extreme);
    }

    #[test]
    fn reference_spread_rate() {
        // 10 * 0.87 * 1.0 * 0.5 * 1.0 = 4.35 -> 4.3
        assert_eq!(spread_rate(&reference_weather(), &[], 1.0), 4.3);
    }

    #[test]
    fn repeated_species_compound() {
        let once = spread_rate(&reference_weather(), &[ScrubOak], 1.0);
        let twice = spread_rate(&reference_weather(), &[ScrubOak, ScrubOak], 1.0);
        // 4.35 * 1.3 and 4.35 * 1.69
        assert_relative_eq!(once, 5.7);
        assert_relative_eq!(twice, 7.4);
        // unlisted species leave the rate untouched
        assert_eq!(spread_rate(&reference_weather(), &[Teaberry], 1.0), 4.3);
    }

    #[test]
    fn precipitation_and_temperature_damp_spread() {
        let rainy = weather(WeatherObservation {
            precipitation: 0.25,
            ..reference_weather().observation().clone()
        });
        // moisture 0.5 * 0.5
        assert_relative_eq!(spread_rate(&rainy, &[], 1.0), 2.2);

        let soaked = weather(WeatherObservation {
            precipitation: 2.0,
            ..reference_weather().observation().clone()
        });
        // precipitation effect floors at 0.2: 8.7 * 0.1 = 0.87
        assert_relative_eq!(spread_rate(&soaked, &[], 1.0), 0.9);

        let cold = weather(WeatherObservation {
            temperature: 20.0,
            ..reference_weather().observation().clone()
        });
        // temperature factor floors at 0.5
        assert_relative_eq!(spread_rate(&cold, &[], 1.0), 2.2);
    }

    #[test]
    fn high_wind_boost() {
        let windy = weather(WeatherObservation {
            temperature: 85.0,
            humidity: 15.0,
            wind_speed: 25.0,
            drought_index: 450.0,
            ..observation()
        });
        assert_eq!(
            spread_rate(&windy, &[PitchPine, ScrubOak, ShortleafPine], 1.0),
            221.5
        );
    }

    #[test]
    fn calibration_scales_before_rounding() {
        assert_eq!(spread_rate(&reference_weather(), &[], 2.0), 8.7);
    }

    #[test]
    fn zero_spread_means_no_flame_and_no_spotting() {
        assert_eq!(flame_length(0.0, &[PitchPine], None), 0.0);
        assert_eq!(fire_intensity(0.0), 0.0);
        assert_eq!(spotting_distance(&reference_weather(), 0.0), 0.0);
    }

    #[test]
    fn intensity_inverts_flame_length() {
        assert_eq!(fire_intensity(0.45), 100.0);
        assert_eq!(fire_intensity(11.4), 112591.4);
    }

    #[test]
    fn flame_length_follows_byram() {
        let fuels = [PitchPine, ScrubOak, ShortleafPine];
        assert_eq!(flame_length(221.5, &fuels, Some(FuelModelType::PB_PineScrub)), 11.4);
        assert_eq!(flame_length(221.5, &fuels, None), 7.9);
    }

    #[test]
    fn spotting_is_capped() {
        let extreme = weather(WeatherObservation {
            temperature: 100.0,
            humidity: 10.0,
            wind_speed: 30.0,
            drought_index: 800.0,
            ..observation()
        });
        assert_eq!(spotting_distance(&extreme, 50.0), 3.0);
    }

    #[test]
    fn spotting_terrain_and_stability() {
        let base = WeatherObservation {
            temperature: 88.0,
            humidity: 35.0,
            wind_speed: 12.0,
            drought_index: 320.0,
            wind_direction: "SW".to_string(),
            ..observation()
        };
        assert_eq!(spotting_distance(&weather(base.clone()), 3.8), 0.81);

        let lowercase = WeatherObservation {
            wind_direction: "sw".to_string(),
            ..base.clone()
        };
        assert_eq!(spotting_distance(&weather(lowercase), 3.8), 0.81);

        assert_relative_eq!(terrain_factor("nw"), 1.3);
        assert_relative_eq!(terrain_factor("NNE"), 1.0);
        assert_relative_eq!(terrain_factor(""), 1.0);
    }

    #[test]
    fn spotting_stability_branches() {
        let calm = WeatherObservation {
            temperature: 70.0,
            humidity: 50.0,
            wind_speed: 10.0,
            drought_index: 0.0,
            wind_direction: "E".to_string(),
            ..observation()
        };
        // 4^1.5 * 10^1.7 / 25 / 50 = 0.3208
        assert_eq!(spotting_distance(&weather(calm.clone()), 4.0), 0.32);

        // cool air damps lofting by 0.8
        let cool = WeatherObservation {
            temperature: 50.0,
            ..calm.clone()
        };
        assert_eq!(spotting_distance(&weather(cool), 4.0), 0.26);
        let humid = WeatherObservation {
            humidity: 75.0,
            ..calm.clone()
        };
        assert_eq!(spotting_distance(&weather(humid), 4.0), 0.26);

        // every threshold is strict: the limits stay neutral
        let hot_limit = WeatherObservation {
            temperature: 85.0,
            humidity: 30.0,
            ..calm.clone()
        };
        assert_eq!(spotting_distance(&weather(hot_limit), 4.0), 0.32);
        let cool_limit = WeatherObservation {
            temperature: 60.0,
            humidity: 70.0,
            ..calm
        };
        assert_eq!(spotting_distance(&weather(cool_limit), 4.0), 0.32);
    }

    #[test]
    fn no_wind_boost_at_fifteen_mph() {
        let at_limit = weather(WeatherObservation {
            humidity: 40.0,
            wind_speed: 15.0,
            ..reference_weather().observation().clone()
        });
        // 15 * 0.87 * 0.6, no logarithmic boost
        assert_relative_eq!(spread_rate(&at_limit, &[], 1.0), 7.8);
    }

    #[test]
    fn challenge_thresholds_are_exclusive() {
        let at_limits = weather(WeatherObservation {
            wind_speed: 15.0,
            humidity: 30.0,
            drought_index: 400.0,
            ..observation()
        });
        assert!(containment_challenges(&at_limits, &[ScrubOak]).is_empty());

        let past_limits = weather(WeatherObservation {
            wind_speed: 15.1,
            humidity: 29.9,
            drought_index: 400.1,
            ..observation()
        });
        assert_eq!(
            containment_challenges(&past_limits, &[ScrubOak]),
            vec![HIGH_WINDS_CHALLENGE, LOW_HUMIDITY_CHALLENGE, DROUGHT_CHALLENGE]
        );
    }

    #[test]
    fn challenges_keep_their_order() {
        let harsh = weather(WeatherObservation {
            wind_speed: 20.0,
            humidity: 20.0,
            drought_index: 500.0,
            ..observation()
        });
        assert_eq!(
            containment_challenges(&harsh, &[ScrubOak, PitchPine]),
            vec![
                HIGH_WINDS_CHALLENGE,
                LOW_HUMIDITY_CHALLENGE,
                PINE_FUELS_CHALLENGE,
                DROUGHT_CHALLENGE
            ]
        );
        assert!(containment_challenges(&reference_weather(), &[ScrubOak]).is_empty());
    }

    #[test]
    fn prediction_is_deterministic() {
        let config = FireBehaviorConfig::default();
        let fuels = [PitchPine, ScrubOak];
        let first = predict_fire_behavior(&reference_weather(), &fuels, None, &config);
        let second = predict_fire_behavior(&reference_weather(), &fuels, None, &config);
        assert_eq!(first, second);
        assert_eq!(first.spread_rate.to_bits(), second.spread_rate.to_bits());
        assert_eq!(first.intensity, fire_intensity(first.flame_length));
    }
}
