use log::trace;

use crate::models::vocabulary::{FuelModelType, VegetationType};

use super::{constants::*, models::FuelModelLoad};

/// Base and maximum load of a fuel model, defaults when the model is absent
pub fn fuel_model_load(fuel_model: Option<FuelModelType>) -> FuelModelLoad {
    fuel_model
        .and_then(|model| FUEL_MODEL_LOADS.get(&model).copied())
        .unwrap_or(FuelModelLoad::new(DEFAULT_BASE_LOAD, DEFAULT_MAX_LOAD))
}

// Available fuel load [lb/ft²]
// base load of the fuel model scaled by the summed species contributions,
// capped at the maximum load of the same model
pub fn fuel_load(fuels: &[VegetationType], fuel_model: Option<FuelModelType>) -> f64 {
    let loads = fuel_model_load(fuel_model);
    let veg_adjustment: f64 = fuels
        .iter()
        .map(|fuel| VEGETATION_LOAD.get(fuel).copied().unwrap_or(0.0))
        .sum();

    let total_load = loads.base * (1.0 + veg_adjustment / VEGETATION_LOAD_DIVISOR);
    trace!(
        "fuel load: base {} veg adjustment {} total {} cap {}",
        loads.base,
        veg_adjustment,
        total_load,
        loads.max
    );
    f64::min(loads.max, total_load)
}

// Mean heat content of the fuel mix [BTU/lb]
pub fn heat_content(fuels: &[VegetationType]) -> f64 {
    if fuels.is_empty() {
        return DEFAULT_HEAT_CONTENT;
    }
    let total_heat: f64 = fuels
        .iter()
        .map(|fuel| HEAT_CONTENT.get(fuel).copied().unwrap_or(DEFAULT_HEAT_CONTENT))
        .sum();
    total_heat / fuels.len() as f64
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::models::vocabulary::VegetationType::*;

    #[test]
    fn every_fuel_model_has_loads() {
        for model in FuelModelType::iter() {
            let loads = fuel_model_load(Some(model));
            assert!(loads.base < loads.max, "{:?}", model);
        }
        assert_eq!(
            fuel_model_load(None),
            FuelModelLoad::new(DEFAULT_BASE_LOAD, DEFAULT_MAX_LOAD)
        );
    }

    #[test]
    fn pitch_pine_on_short_grass() {
        // 0.4 * (1 + 2.5 / 10)
        assert_relative_eq!(fuel_load(&[PitchPine], Some(FuelModelType::GR1)), 0.5);
    }

    #[test]
    fn load_is_capped_by_fuel_model() {
        let heavy = [AtlanticWhiteCedar, AtlanticWhiteCedar, PitchPine, PitchPine];
        // 0.4 * (1 + 11 / 10) = 0.84, under the GR1 cap
        assert_relative_eq!(fuel_load(&heavy, Some(FuelModelType::GR1)), 0.84, epsilon = 1e-12);
        // 3.0 * 2.1 = 6.3 capped at 5.0
        assert_relative_eq!(fuel_load(&heavy, Some(FuelModelType::PB_DensePine)), 5.0);
        // no model: 1.0 * 2.1 = 2.1
        assert_relative_eq!(fuel_load(&heavy, None), 2.1, epsilon = 1e-12);
    }

    #[test]
    fn unlisted_species_add_no_load() {
        assert_relative_eq!(
            fuel_load(&[Teaberry, WhiteOak, PyxieMoss], Some(FuelModelType::SH2)),
            1.4
        );
        assert_relative_eq!(fuel_load(&[], None), DEFAULT_BASE_LOAD);
    }

    #[test]
    fn heat_content_is_the_species_mean() {
        assert_relative_eq!(heat_content(&[]), 8000.0);
        assert_relative_eq!(heat_content(&[PitchPine]), 9500.0);
        assert_relative_eq!(heat_content(&[PitchPine, ShortleafPine]), 9250.0);
        assert_relative_eq!(
            heat_content(&[PitchPine, ScrubOak, ShortleafPine]),
            26500.0 / 3.0
        );
        assert_relative_eq!(heat_content(&[Bearberry, Inkberry]), 8000.0);
    }
}
