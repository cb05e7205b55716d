use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::vocabulary::{FuelModelType, VegetationType};

use super::models::FuelModelLoad;

// fallbacks when no fuel model is given [lb/ft²]
pub const DEFAULT_BASE_LOAD: f64 = 1.0;
pub const DEFAULT_MAX_LOAD: f64 = 3.0;
// the species contributions are summed and scaled by this divisor
pub const VEGETATION_LOAD_DIVISOR: f64 = 10.0;

pub const DEFAULT_HEAT_CONTENT: f64 = 8000.0; // [BTU/lb]

lazy_static! {
    /// base and maximum fuel load per fuel model [lb/ft²]
    pub static ref FUEL_MODEL_LOADS: HashMap<FuelModelType, FuelModelLoad> = {
        use FuelModelType::*;
        HashMap::from([
            // standard fuel models
            (GR1, FuelModelLoad::new(0.4, 1.0)),
            (GR3, FuelModelLoad::new(0.7, 2.0)),
            (SH2, FuelModelLoad::new(1.4, 3.0)),
            (SH7, FuelModelLoad::new(2.8, 4.5)),
            (TL2, FuelModelLoad::new(1.6, 3.5)),
            (TU5, FuelModelLoad::new(3.2, 5.0)),
            // custom Pine Barrens fuel models
            (PB_PineScrub, FuelModelLoad::new(2.2, 4.0)),
            (PB_DensePine, FuelModelLoad::new(3.0, 5.0)),
            (PB_SparsePine, FuelModelLoad::new(1.8, 3.5)),
            (PB_WetlandEdge, FuelModelLoad::new(1.2, 2.5)),
            (PB_CedarSwamp, FuelModelLoad::new(3.5, 6.0)),
        ])
    };

    /// additive fuel load contribution per species, absent species add nothing
    pub static ref VEGETATION_LOAD: HashMap<VegetationType, f64> = {
        use VegetationType::*;
        HashMap::from([
            // pines
            (PitchPine, 2.5),  // resinous, heavy loading
            (VirginiaPine, 2.2),
            (PondPine, 2.3),
            (ShortleafPine, 2.0),
            (AtlanticWhiteCedar, 3.0),  // very high when dry
            // oaks
            (ScrubOak, 1.2),
            (BlackjackOak, 1.3),
            (PostOak, 1.1),
            (ChestnutOak, 1.4),
            // shrubs
            (BlueberryLowbush, 0.3),
            (BlueberryHighbush, 0.3),
            (HuckleberryBlack, 0.4),
            (HuckleberryDangleberry, 0.4),
            (MountainLaurel, 0.8),
            (SheepLaurel, 0.6),
        ])
    };

    /// heat content per species [BTU/lb], absent species use DEFAULT_HEAT_CONTENT
    pub static ref HEAT_CONTENT: HashMap<VegetationType, f64> = {
        use VegetationType::*;
        HashMap::from([
            (PitchPine, 9500.0),
            (ScrubOak, 8000.0),
            (ShortleafPine, 9000.0),
        ])
    };
}
