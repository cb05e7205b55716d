use crate::models::vocabulary::{VegetationType, WildlifeType};

use super::{
    constants::{VEGETATION_PROFILES, WILDLIFE_PROFILES},
    models::{VegetationProfile, WildlifeProfile},
};

pub fn vegetation_profile(species: VegetationType) -> Option<&'static VegetationProfile> {
    VEGETATION_PROFILES.get(&species)
}

pub fn wildlife_profile(species: WildlifeType) -> Option<&'static WildlifeProfile> {
    WILDLIFE_PROFILES.get(&species)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_species_have_profiles() {
        let pitch_pine = vegetation_profile(VegetationType::PitchPine).expect("documented");
        assert_eq!(pitch_pine.regeneration, "Serotinous cones open after fire");
        assert!(vegetation_profile(VegetationType::Teaberry).is_none());

        let treefrog = wildlife_profile(WildlifeType::PineBarrensTreefrog).expect("documented");
        assert_eq!(treefrog.status, "Threatened");
        assert!(wildlife_profile(WildlifeType::BogTurtle).is_none());
    }
}
