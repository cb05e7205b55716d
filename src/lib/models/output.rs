use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

use super::vocabulary::FireRiskLevel;

/// Predicted fire behavior for one weather/fuel combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireBehaviorPrediction {
    pub risk_level: FireRiskLevel,
    /// rate of spread [ft/min]
    pub spread_rate: f64,
    /// flame length [ft]
    pub flame_length: f64,
    /// fireline intensity [BTU/ft/s]
    pub intensity: f64,
    /// maximum spotting distance [mi], capped at 3.0
    pub spotting_distance: f64,
    /// ordered: wind, humidity, fuel, drought
    pub containment_challenges: Vec<String>,
}

/// The three behavior quantities compared by the historical validator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehaviorMetrics {
    /// [ft/min]
    pub spread_rate: f64,
    /// [ft]
    pub flame_length: f64,
    /// [mi]
    pub spotting_distance: f64,
}

impl From<&FireBehaviorPrediction> for BehaviorMetrics {
    fn from(prediction: &FireBehaviorPrediction) -> Self {
        BehaviorMetrics {
            spread_rate: prediction.spread_rate,
            flame_length: prediction.flame_length,
            spotting_distance: prediction.spotting_distance,
        }
    }
}

/// Percentage differences (predicted - actual) / actual * 100.
/// `None` when the recorded value is zero and the difference is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDifferences {
    pub spread_rate: Option<f64>,
    pub flame_length: Option<f64>,
    pub spotting_distance: Option<f64>,
}

/// Outcome of replaying one historical fire through the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// "{location} Fire ({year})"
    pub fire_name: String,
    pub predicted: BehaviorMetrics,
    pub actual: BehaviorMetrics,
    pub differences: MetricDifferences,
    /// [0, 100]
    pub confidence_score: f64,
    pub recommendations: Vec<String>,
}

/// Validation over the whole historical table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub reports: Vec<ValidationReport>,
    pub mean_confidence: f64,
}

impl ValidationSummary {
    pub fn new(reports: Vec<ValidationReport>) -> Self {
        let mean_confidence = if reports.is_empty() {
            0.0
        } else {
            reports.iter().map(|r| r.confidence_score).sum::<f64>() / reports.len() as f64
        };
        Self {
            reports,
            mean_confidence,
        }
    }

    /// distinct recommendations of every report, in first-seen order
    pub fn recommendations(&self) -> Vec<&str> {
        self.reports
            .iter()
            .flat_map(|r| r.recommendations.iter().map(String::as_str))
            .unique()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(confidence_score: f64, recommendations: &[&str]) -> ValidationReport {
        let metrics = BehaviorMetrics {
            spread_rate: 1.0,
            flame_length: 1.0,
            spotting_distance: 1.0,
        };
        ValidationReport {
            fire_name: "Test Fire (2000)".to_string(),
            predicted: metrics,
            actual: metrics,
            differences: MetricDifferences {
                spread_rate: Some(0.0),
                flame_length: Some(0.0),
                spotting_distance: Some(0.0),
            },
            confidence_score,
            recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn summary_mean_and_distinct_recommendations() {
        let summary = ValidationSummary::new(vec![
            report(20.0, &["spotting", "fuel load"]),
            report(60.0, &["spotting"]),
        ]);
        assert_eq!(summary.mean_confidence, 40.0);
        assert_eq!(summary.recommendations(), vec!["spotting", "fuel load"]);
    }

    #[test]
    fn empty_summary() {
        let summary = ValidationSummary::new(vec![]);
        assert_eq!(summary.mean_confidence, 0.0);
        assert!(summary.recommendations().is_empty());
    }
}
