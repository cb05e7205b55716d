use serde_derive::{Deserialize, Serialize};

/// Fuel load bounds of a fuel model [lb/ft²]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelModelLoad {
    pub base: f64,
    pub max: f64,
}

impl FuelModelLoad {
    pub const fn new(base: f64, max: f64) -> Self {
        Self { base, max }
    }
}
