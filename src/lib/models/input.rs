use std::ops::Deref;

use chrono::NaiveDateTime;
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{constants::*, errors::FireModelError};

/// Raw point-in-time weather observation, as supplied by the weather source.
/// It becomes a [`WeatherConditions`] once its ranges are validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// air temperature [°F]
    pub temperature: f64,
    /// relative humidity [%]
    pub humidity: f64,
    /// wind speed [mph]
    pub wind_speed: f64,
    /// wind direction, 8-point compass (N, NE, E, SE, S, SW, W, NW)
    pub wind_direction: String,
    /// wind gusts [mph]
    pub wind_gusts: f64,
    /// precipitation in the last 24h [in]
    pub precipitation: f64,

    /// barometric pressure [mb]
    pub pressure: f64,
    /// cloud cover [%]
    pub cloud_cover: f64,
    /// cloud base height [ft]
    pub cloud_height: f64,
    /// visibility [mi]
    pub visibility: f64,

    /// Keetch-Byram Drought Index [0-800]
    pub drought_index: f64,
    /// dead fuel moisture by timelag class [%]
    pub fuel_moisture_1h: f64,
    pub fuel_moisture_10h: f64,
    pub fuel_moisture_100h: f64,
    pub fuel_moisture_1000h: f64,

    /// mixing height [ft]
    pub mixing_height: f64,
    /// transport wind [mph]
    pub transport_wind: f64,
    /// mixing height * transport wind
    pub ventilation_rate: f64,

    pub timestamp: NaiveDateTime,
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
}

fn check_finite(field: &'static str, value: f64) -> Result<(), FireModelError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FireModelError::invalid_weather(
            field,
            format!("must be a finite number, got {}", value),
        ))
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), FireModelError> {
    check_finite(field, value)?;
    if value < min || value > max {
        return Err(FireModelError::invalid_weather(
            field,
            format!("must be in [{}, {}], got {}", min, max, value),
        ));
    }
    Ok(())
}

impl WeatherObservation {
    /// Check every range constraint; inputs are rejected, never clamped.
    pub fn validate(&self) -> Result<(), FireModelError> {
        check_finite("temperature", self.temperature)?;
        check_range("humidity", self.humidity, 0.0, MAX_PERCENT)?;
        check_range("cloud_cover", self.cloud_cover, 0.0, MAX_PERCENT)?;
        check_range("drought_index", self.drought_index, 0.0, MAX_DROUGHT_INDEX)?;

        let non_negative = [
            ("wind_speed", self.wind_speed),
            ("wind_gusts", self.wind_gusts),
            ("precipitation", self.precipitation),
            ("fuel_moisture_1h", self.fuel_moisture_1h),
            ("fuel_moisture_10h", self.fuel_moisture_10h),
            ("fuel_moisture_100h", self.fuel_moisture_100h),
            ("fuel_moisture_1000h", self.fuel_moisture_1000h),
        ];
        for (field, value) in non_negative {
            check_range(field, value, 0.0, f64::INFINITY)?;
        }

        for (field, value) in [
            ("pressure", self.pressure),
            ("cloud_height", self.cloud_height),
            ("visibility", self.visibility),
            ("mixing_height", self.mixing_height),
            ("transport_wind", self.transport_wind),
            ("ventilation_rate", self.ventilation_rate),
        ] {
            check_finite(field, value)?;
        }

        if self.sunrise > self.sunset {
            return Err(FireModelError::invalid_weather(
                "sunrise",
                format!("sunrise {} is after sunset {}", self.sunrise, self.sunset),
            ));
        }
        Ok(())
    }
}

/// Pasquill atmospheric stability class
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, Display, Serialize, Deserialize)]
pub enum StabilityClass {
    /// very unstable
    A,
    B,
    C,
    /// neutral
    D,
    E,
    /// very stable
    F,
}

/// Validated, immutable weather snapshot used by every calculation.
/// Field access goes through `Deref` to the underlying observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeatherObservation", into = "WeatherObservation")]
pub struct WeatherConditions {
    observation: WeatherObservation,
}

impl WeatherConditions {
    pub fn new(observation: WeatherObservation) -> Result<Self, FireModelError> {
        observation.validate()?;
        Ok(Self { observation })
    }

    pub fn observation(&self) -> &WeatherObservation {
        &self.observation
    }

    /// sunrise <= timestamp <= sunset
    pub fn is_daytime(&self) -> bool {
        self.sunrise <= self.timestamp && self.timestamp <= self.sunset
    }

    /// Stability class from wind speed, daylight and cloud cover.
    /// Cloud cover only splits the calm-wind bucket in this model.
    pub fn stability_class(&self) -> StabilityClass {
        let day = self.is_daytime();
        let pick = |day_class, night_class| if day { day_class } else { night_class };

        if self.wind_speed < STABILITY_CALM_WIND {
            if self.cloud_cover < STABILITY_CLEAR_SKY {
                return pick(StabilityClass::A, StabilityClass::F);
            }
            return pick(StabilityClass::B, StabilityClass::E);
        }
        if self.wind_speed < STABILITY_LIGHT_WIND {
            return pick(StabilityClass::B, StabilityClass::E);
        }
        if self.wind_speed < STABILITY_MODERATE_WIND {
            return pick(StabilityClass::C, StabilityClass::D);
        }
        StabilityClass::D
    }

    pub fn red_flag_conditions(&self) -> bool {
        self.wind_speed >= RED_FLAG_WIND_SPEED
            && self.humidity <= RED_FLAG_HUMIDITY
            && self.fuel_moisture_10h <= RED_FLAG_FUEL_MOISTURE_10H
    }
}

impl Deref for WeatherConditions {
    type Target = WeatherObservation;

    fn deref(&self) -> &Self::Target {
        &self.observation
    }
}

impl TryFrom<WeatherObservation> for WeatherConditions {
    type Error = FireModelError;

    fn try_from(observation: WeatherObservation) -> Result<Self, Self::Error> {
        WeatherConditions::new(observation)
    }
}

impl From<WeatherConditions> for WeatherObservation {
    fn from(value: WeatherConditions) -> Self {
        value.observation
    }
}
