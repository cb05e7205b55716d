use std::fmt::Display;

/// Errors raised by the fire behavior engine.
/// Only caller mistakes end up here: unknown vocabulary keys met inside the
/// engine resolve to their documented fallbacks instead.
#[derive(Debug, Clone, PartialEq)]
pub enum FireModelError {
    /// a weather observation violates its valid range
    InvalidWeather { field: &'static str, reason: String },
    /// the historical fire table has no record at this index
    RecordOutOfRange { index: usize, len: usize },
    /// a name does not belong to one of the closed vocabularies
    UnknownKey { kind: &'static str, key: String },
    /// a model configuration value is unusable
    InvalidConfig { field: &'static str, reason: String },
}

impl FireModelError {
    pub fn invalid_weather(field: &'static str, reason: impl Into<String>) -> Self {
        FireModelError::InvalidWeather {
            field,
            reason: reason.into(),
        }
    }
}

impl Display for FireModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FireModelError::InvalidWeather { field, reason } => {
                write!(f, "invalid weather field '{}': {}", field, reason)
            }
            FireModelError::RecordOutOfRange { index, len } => write!(
                f,
                "historical fire index {} out of range (table holds {} records)",
                index, len
            ),
            FireModelError::UnknownKey { kind, key } => write!(f, "unknown {}: '{}'", kind, key),
            FireModelError::InvalidConfig { field, reason } => {
                write!(f, "invalid model configuration '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for FireModelError {}
