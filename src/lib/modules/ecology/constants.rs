use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::vocabulary::{VegetationType, WildlifeType};

use super::models::{VegetationProfile, WildlifeProfile};

lazy_static! {
    pub static ref VEGETATION_PROFILES: HashMap<VegetationType, VegetationProfile> = HashMap::from([
        (
            VegetationType::PitchPine,
            VegetationProfile {
                fire_adaptation: "High",
                fuel_load: "Heavy",
                regeneration: "Serotinous cones open after fire",
                typical_height: "40-60 feet",
                fire_risk: "High",
            },
        ),
        (
            VegetationType::ScrubOak,
            VegetationProfile {
                fire_adaptation: "Moderate",
                fuel_load: "Moderate",
                regeneration: "Sprouts from root crown",
                typical_height: "6-15 feet",
                fire_risk: "Moderate",
            },
        ),
    ]);

    pub static ref WILDLIFE_PROFILES: HashMap<WildlifeType, WildlifeProfile> = HashMap::from([
        (
            WildlifeType::PineBarrensTreefrog,
            WildlifeProfile {
                status: "Threatened",
                habitat: "Cedar swamps and wet areas",
                fire_impact: "Moderate - Requires wet areas for breeding",
                conservation_notes: "Protect breeding pools during fire operations",
            },
        ),
        (
            WildlifeType::NorthernPineSnake,
            WildlifeProfile {
                status: "Threatened",
                habitat: "Sandy soil areas with open canopy",
                fire_impact: "Low - Can escape underground",
                conservation_notes: "Maintain open sandy areas post-fire",
            },
        ),
    ]);
}
