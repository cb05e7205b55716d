use chrono::NaiveDate;
use log::info;
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};

use crate::{
    errors::FireModelError,
    models::output::{BehaviorMetrics, ValidationReport, ValidationSummary},
    modules::behavior::models::{BehaviorModel, FireBehaviorCalculator},
};

use super::{constants::HISTORICAL_FIRES, functions::validate_record};

/// Weather kept in the fire records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedWeather {
    /// [°F]
    pub temperature: f64,
    /// [%]
    pub humidity: f64,
    /// [mph]
    pub wind_speed: f64,
    pub wind_direction: String,
    /// Keetch-Byram Drought Index
    pub drought_index: f64,
}

/// A documented fire with its observed behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalFireRecord {
    pub year: i32,
    pub date: NaiveDate,
    pub acres: u32,
    pub cause: String,
    pub location: String,
    pub notes: String,
    pub weather: RecordedWeather,
    /// [ft/min]
    pub spread_rate: f64,
    /// [ft]
    pub flame_length: f64,
    /// [mi]
    pub spotting: f64,
}

impl HistoricalFireRecord {
    pub fn fire_name(&self) -> String {
        format!("{} Fire ({})", self.location, self.year)
    }

    pub fn observed(&self) -> BehaviorMetrics {
        BehaviorMetrics {
            spread_rate: self.spread_rate,
            flame_length: self.flame_length,
            spotting_distance: self.spotting,
        }
    }
}

/// Backtests a behavior model against documented fires
pub struct HistoricalValidator<M: BehaviorModel> {
    model: M,
    records: Vec<HistoricalFireRecord>,
}

impl Default for HistoricalValidator<FireBehaviorCalculator> {
    fn default() -> Self {
        Self::new(FireBehaviorCalculator::default())
    }
}

impl<M: BehaviorModel> HistoricalValidator<M> {
    /// Validator over the built-in Pine Barrens fire table
    pub fn new(model: M) -> Self {
        Self::with_records(model, HISTORICAL_FIRES.clone())
    }

    pub fn with_records(model: M, records: Vec<HistoricalFireRecord>) -> Self {
        Self { model, records }
    }

    pub fn records(&self) -> &[HistoricalFireRecord] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Result<&HistoricalFireRecord, FireModelError> {
        self.records
            .get(index)
            .ok_or(FireModelError::RecordOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    pub fn validate_against_historical(
        &self,
        index: usize,
    ) -> Result<ValidationReport, FireModelError> {
        let record = self.record(index)?;
        let report = validate_record(&self.model, record)?;
        info!(
            "{}: confidence {:.1}, {} recommendation(s)",
            report.fire_name,
            report.confidence_score,
            report.recommendations.len()
        );
        Ok(report)
    }

    /// Validate every record, reports keep the table order
    pub fn validate_all(&self) -> Result<ValidationSummary, FireModelError> {
        let reports = self
            .records
            .par_iter()
            .map(|record| validate_record(&self.model, record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ValidationSummary::new(reports))
    }
}
