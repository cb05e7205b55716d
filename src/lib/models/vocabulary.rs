use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Standard and custom fuel models of the Pine Barrens
#[allow(clippy::upper_case_acronyms, non_camel_case_types)]
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum FuelModelType {
    // STANDARD FUEL MODELS
    #[strum(to_string = "Short Grass", serialize = "GR1")]
    GR1,
    #[strum(to_string = "Tall Grass", serialize = "GR3")]
    GR3,
    #[strum(to_string = "Moderate Shrub", serialize = "SH2")]
    SH2,
    #[strum(to_string = "High Load Shrub", serialize = "SH7")]
    SH7,
    #[strum(to_string = "Low Load Broadleaf Litter", serialize = "TL2")]
    TL2,
    #[strum(to_string = "Very High Load Timber-Shrub", serialize = "TU5")]
    TU5,

    // CUSTOM PINE BARRENS FUEL MODELS
    #[strum(to_string = "Pine-Scrub Oak Mix", serialize = "PB_PineScrub")]
    PB_PineScrub,
    #[strum(to_string = "Dense Pine Stand", serialize = "PB_DensePine")]
    PB_DensePine,
    #[strum(to_string = "Sparse Pine-Oak", serialize = "PB_SparsePine")]
    PB_SparsePine,
    #[strum(to_string = "Wetland Edge", serialize = "PB_WetlandEdge")]
    PB_WetlandEdge,
    #[strum(to_string = "Cedar Swamp", serialize = "PB_CedarSwamp")]
    PB_CedarSwamp,
}

/// Vegetation species of the Pine Barrens
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum VegetationType {
    // dominant trees
    #[strum(to_string = "Pitch Pine", serialize = "PitchPine")]
    PitchPine,
    #[strum(to_string = "Shortleaf Pine", serialize = "ShortleafPine")]
    ShortleafPine,
    #[strum(to_string = "Virginia Pine", serialize = "VirginiaPine")]
    VirginiaPine,
    #[strum(to_string = "Pond Pine", serialize = "PondPine")]
    PondPine,
    #[strum(to_string = "Atlantic White Cedar", serialize = "AtlanticWhiteCedar")]
    AtlanticWhiteCedar,

    // oaks
    #[strum(to_string = "Scrub Oak", serialize = "ScrubOak")]
    ScrubOak,
    #[strum(to_string = "Blackjack Oak", serialize = "BlackjackOak")]
    BlackjackOak,
    #[strum(to_string = "Post Oak", serialize = "PostOak")]
    PostOak,
    #[strum(to_string = "White Oak", serialize = "WhiteOak")]
    WhiteOak,
    #[strum(to_string = "Chestnut Oak", serialize = "ChestnutOak")]
    ChestnutOak,

    // shrubs
    #[strum(to_string = "Lowbush Blueberry", serialize = "BlueberryLowbush")]
    BlueberryLowbush,
    #[strum(to_string = "Highbush Blueberry", serialize = "BlueberryHighbush")]
    BlueberryHighbush,
    #[strum(to_string = "Black Huckleberry", serialize = "HuckleberryBlack")]
    HuckleberryBlack,
    #[strum(to_string = "Dangleberry", serialize = "HuckleberryDangleberry")]
    HuckleberryDangleberry,
    #[strum(to_string = "Bearberry")]
    Bearberry,
    #[strum(to_string = "Sweetfern")]
    Sweetfern,
    #[strum(to_string = "Sheep Laurel", serialize = "SheepLaurel")]
    SheepLaurel,
    #[strum(to_string = "Mountain Laurel", serialize = "MountainLaurel")]
    MountainLaurel,
    #[strum(to_string = "Inkberry")]
    Inkberry,

    // ground cover
    #[strum(to_string = "Pine Barrens Gentian", serialize = "PineBarrensGentian")]
    PineBarrensGentian,
    #[strum(to_string = "Turkey Beard", serialize = "TurkeyBeard")]
    TurkeyBeard,
    #[strum(to_string = "Bracken Fern", serialize = "BrackenFern")]
    BrackenFern,
    #[strum(to_string = "Teaberry")]
    Teaberry,
    #[strum(to_string = "Pyxie Moss", serialize = "PyxieMoss")]
    PyxieMoss,
}

/// Sensitive wildlife and plant species protected during fire operations
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum WildlifeType {
    #[strum(to_string = "Pine Barrens Treefrog", serialize = "PineBarrensTreefrog")]
    PineBarrensTreefrog,
    #[strum(to_string = "Northern Pine Snake", serialize = "NorthernPineSnake")]
    NorthernPineSnake,
    #[strum(to_string = "Pine Barrens Gentian", serialize = "PineBarrensGentian")]
    PineBarrensGentian,
    #[strum(to_string = "Bog Turtle", serialize = "BogTurtle")]
    BogTurtle,
    #[strum(to_string = "Swamp Pink", serialize = "SwampPink")]
    SwampPink,
    #[strum(to_string = "Curly Grass Fern", serialize = "CurlyGrassFern")]
    CurlyGrassFern,
    #[strum(to_string = "Broom Crowberry", serialize = "BroomCrowberry")]
    BroomCrowberry,
}

/// Fire risk level.
/// Severity is ranked by `modules::behavior::functions::risk_severity`,
/// the declaration order carries no meaning.
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum FireRiskLevel {
    #[strum(to_string = "Low")]
    Low,
    #[strum(to_string = "Moderate")]
    Moderate,
    #[strum(to_string = "High")]
    High,
    #[strum(to_string = "Very High", serialize = "VeryHigh")]
    VeryHigh,
    #[strum(to_string = "Extreme")]
    Extreme,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn display_names_follow_field_usage() {
        assert_eq!(FuelModelType::GR1.to_string(), "Short Grass");
        assert_eq!(FuelModelType::PB_CedarSwamp.to_string(), "Cedar Swamp");
        assert_eq!(WildlifeType::SwampPink.to_string(), "Swamp Pink");
        assert_eq!(FireRiskLevel::VeryHigh.to_string(), "Very High");
    }

    #[test]
    fn parse_accepts_display_and_identifier_names() {
        assert_eq!(
            VegetationType::from_str("Pitch Pine"),
            Ok(VegetationType::PitchPine)
        );
        assert_eq!(
            VegetationType::from_str("pitchpine"),
            Ok(VegetationType::PitchPine)
        );
        assert_eq!(
            FuelModelType::from_str("pb_pinescrub"),
            Ok(FuelModelType::PB_PineScrub)
        );
        assert!(VegetationType::from_str("Sugar Maple").is_err());
    }

    #[test]
    fn vocabulary_sizes() {
        assert_eq!(FuelModelType::iter().count(), 11);
        assert_eq!(VegetationType::iter().count(), 24);
        assert_eq!(WildlifeType::iter().count(), 7);
        assert_eq!(FireRiskLevel::iter().count(), 5);
    }
}
