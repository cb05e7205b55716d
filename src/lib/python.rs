use std::str::FromStr;

use chrono::NaiveDateTime;
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule, wrap_pyfunction, Bound};
use strum::IntoEnumIterator;

use crate::{
    errors::FireModelError,
    models::{
        input::{WeatherConditions, WeatherObservation},
        output::{FireBehaviorPrediction, ValidationReport},
        vocabulary::{FuelModelType, VegetationType},
    },
    modules::{
        behavior::{
            config::FireBehaviorConfig,
            models::{BehaviorModel, FireBehaviorCalculator},
        },
        history::models::HistoricalValidator,
        tactics::functions::{firefighting_tactics, species_protection_guidelines},
    },
};

fn to_py_err(err: FireModelError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_fuels(fuels: &[String]) -> PyResult<Vec<VegetationType>> {
    fuels
        .iter()
        .map(|name| {
            VegetationType::from_str(name).map_err(|_| {
                to_py_err(FireModelError::UnknownKey {
                    kind: "vegetation type",
                    key: name.clone(),
                })
            })
        })
        .collect()
}

fn parse_fuel_model(name: Option<String>) -> PyResult<Option<FuelModelType>> {
    name.map(|name| {
        FuelModelType::from_str(&name).map_err(|_| {
            to_py_err(FireModelError::UnknownKey {
                kind: "fuel model",
                key: name.clone(),
            })
        })
    })
    .transpose()
}

#[pyclass(name = "Weather")]
#[derive(Clone)]
pub struct PyWeather {
    inner: WeatherConditions,
}

#[pymethods]
impl PyWeather {
    #[new]
    #[allow(clippy::too_many_arguments)]
    #[pyo3(
        signature = (
            temperature,
            humidity,
            wind_speed,
            wind_direction,
            drought_index,
            timestamp,
            sunrise,
            sunset,
            wind_gusts=0.0,
            precipitation=0.0,
            pressure=1013.25,
            cloud_cover=0.0,
            cloud_height=10000.0,
            visibility=10.0,
            fuel_moisture_1h=6.0,
            fuel_moisture_10h=8.0,
            fuel_moisture_100h=10.0,
            fuel_moisture_1000h=12.0,
            mixing_height=5000.0,
            transport_wind=0.0,
            ventilation_rate=0.0
        )
    )]
    fn new(
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        wind_direction: String,
        drought_index: f64,
        timestamp: NaiveDateTime,
        sunrise: NaiveDateTime,
        sunset: NaiveDateTime,
        wind_gusts: f64,
        precipitation: f64,
        pressure: f64,
        cloud_cover: f64,
        cloud_height: f64,
        visibility: f64,
        fuel_moisture_1h: f64,
        fuel_moisture_10h: f64,
        fuel_moisture_100h: f64,
        fuel_moisture_1000h: f64,
        mixing_height: f64,
        transport_wind: f64,
        ventilation_rate: f64,
    ) -> PyResult<Self> {
        let inner = WeatherConditions::new(WeatherObservation {
            temperature,
            humidity,
            wind_speed,
            wind_direction,
            wind_gusts,
            precipitation,
            pressure,
            cloud_cover,
            cloud_height,
            visibility,
            drought_index,
            fuel_moisture_1h,
            fuel_moisture_10h,
            fuel_moisture_100h,
            fuel_moisture_1000h,
            mixing_height,
            transport_wind,
            ventilation_rate,
            timestamp,
            sunrise,
            sunset,
        })
        .map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn is_daytime(&self) -> bool {
        self.inner.is_daytime()
    }

    #[getter]
    fn stability_class(&self) -> String {
        self.inner.stability_class().to_string()
    }

    #[getter]
    fn red_flag_conditions(&self) -> bool {
        self.inner.red_flag_conditions()
    }
}

#[pyclass(name = "Prediction")]
pub struct PyPrediction {
    inner: FireBehaviorPrediction,
}

#[pymethods]
impl PyPrediction {
    #[getter]
    fn risk_level(&self) -> String {
        self.inner.risk_level.to_string()
    }
    #[getter]
    fn spread_rate(&self) -> f64 {
        self.inner.spread_rate
    }
    #[getter]
    fn flame_length(&self) -> f64 {
        self.inner.flame_length
    }
    #[getter]
    fn intensity(&self) -> f64 {
        self.inner.intensity
    }
    #[getter]
    fn spotting_distance(&self) -> f64 {
        self.inner.spotting_distance
    }
    #[getter]
    fn containment_challenges(&self) -> Vec<String> {
        self.inner.containment_challenges.clone()
    }

    fn tactics(&self) -> Vec<String> {
        firefighting_tactics(&self.inner)
    }
}

#[pyclass(name = "ValidationReport")]
pub struct PyValidationReport {
    inner: ValidationReport,
}

#[pymethods]
impl PyValidationReport {
    #[getter]
    fn fire_name(&self) -> String {
        self.inner.fire_name.clone()
    }
    #[getter]
    fn confidence_score(&self) -> f64 {
        self.inner.confidence_score
    }
    #[getter]
    fn recommendations(&self) -> Vec<String> {
        self.inner.recommendations.clone()
    }

    /// JSON rendering of the whole report
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.inner).map_err(|err| PyValueError::new_err(err.to_string()))
    }
}

#[pyfunction]
#[pyo3(signature = (weather, fuels, fuel_model=None, spread_calibration=None))]
fn predict(
    weather: &PyWeather,
    fuels: Vec<String>,
    fuel_model: Option<String>,
    spread_calibration: Option<f64>,
) -> PyResult<PyPrediction> {
    let fuels = parse_fuels(&fuels)?;
    let fuel_model = parse_fuel_model(fuel_model)?;
    let config = match spread_calibration {
        Some(factor) => FireBehaviorConfig::calibrated(factor).map_err(to_py_err)?,
        None => FireBehaviorConfig::default(),
    };
    let calculator = FireBehaviorCalculator::new(config);
    Ok(PyPrediction {
        inner: calculator.predict(&weather.inner, &fuels, fuel_model),
    })
}

#[pyfunction]
fn validate_against_historical(index: usize) -> PyResult<PyValidationReport> {
    let validator = HistoricalValidator::default();
    let report = validator
        .validate_against_historical(index)
        .map_err(to_py_err)?;
    Ok(PyValidationReport { inner: report })
}

#[pyfunction]
fn protection_guidelines(location: &str, season: &str) -> Vec<String> {
    species_protection_guidelines(location, season)
}

#[pyfunction]
fn vegetation_types() -> Vec<String> {
    VegetationType::iter().map(|v| v.to_string()).collect()
}

#[pyfunction]
fn fuel_models() -> Vec<String> {
    FuelModelType::iter().map(|v| v.to_string()).collect()
}

#[pymodule]
fn pinebarrens_py(py: Python<'_>, module: Bound<'_, PyModule>) -> PyResult<()> {
    module.add_class::<PyWeather>()?;
    module.add_class::<PyPrediction>()?;
    module.add_class::<PyValidationReport>()?;

    module.add_function(wrap_pyfunction!(predict, py)?)?;
    module.add_function(wrap_pyfunction!(validate_against_historical, py)?)?;
    module.add_function(wrap_pyfunction!(protection_guidelines, py)?)?;
    module.add_function(wrap_pyfunction!(vegetation_types, py)?)?;
    module.add_function(wrap_pyfunction!(fuel_models, py)?)?;

    module.add("__version__", crate::version::VERSION)?;
    module.add("PINEBARRENS_VERSION", crate::version::FULL_VERSION)?;
    Ok(())
}
