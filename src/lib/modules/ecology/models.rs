use serde_derive::Serialize;

/// Fire ecology of a vegetation species
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VegetationProfile {
    pub fire_adaptation: &'static str,
    pub fuel_load: &'static str,
    pub regeneration: &'static str,
    pub typical_height: &'static str,
    pub fire_risk: &'static str,
}

/// Conservation profile of a protected species
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WildlifeProfile {
    pub status: &'static str,
    pub habitat: &'static str,
    pub fire_impact: &'static str,
    pub conservation_notes: &'static str,
}
