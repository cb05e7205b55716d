use crate::models::{output::FireBehaviorPrediction, vocabulary::FireRiskLevel};

use super::constants::*;

/// Suppression tactics for a predicted fire behavior
pub fn firefighting_tactics(prediction: &FireBehaviorPrediction) -> Vec<String> {
    let mut tactics: Vec<String> = Vec::new();

    if matches!(
        prediction.risk_level,
        FireRiskLevel::VeryHigh | FireRiskLevel::Extreme
    ) {
        tactics.extend(HIGH_RISK_TACTICS.iter().map(|t| t.to_string()));
    }

    let attack = if prediction.flame_length > INDIRECT_ATTACK_FLAME_LENGTH {
        INDIRECT_ATTACK_TACTIC
    } else if prediction.flame_length > HEAVY_EQUIPMENT_FLAME_LENGTH {
        HEAVY_EQUIPMENT_TACTIC
    } else {
        HANDLINE_TACTIC
    };
    tactics.push(attack.to_string());

    if prediction.spotting_distance > LOOKOUT_SPOTTING_DISTANCE {
        tactics.push(format!(
            "Position lookouts for spot fires up to {:?} miles ahead",
            prediction.spotting_distance
        ));
    }
    tactics
}

/// Guidelines protecting sensitive species during fire operations.
/// Spring adds the breeding season measures.
pub fn species_protection_guidelines(_location: &str, season: &str) -> Vec<String> {
    let mut guidelines: Vec<String> = GENERAL_GUIDELINES.iter().map(|g| g.to_string()).collect();
    if season.to_lowercase() == "spring" {
        guidelines.extend(SPRING_GUIDELINES.iter().map(|g| g.to_string()));
    }
    guidelines
}
