//! Fuelbed intermediates (component C): per-size-class surface area
//! weighting, characteristic SAVR, bulk density, packing ratio, live
//! moisture of extinction, and the heat sink term.
//!
//! # References
//! - Rothermel, R.C. (1972), eq. 42–52, 88 (surface area weighting factors,
//!   packing ratio, live moisture of extinction, heat of preignition).
//! - `examples/original_source/src/surfaceFireSpread.cpp` calls these
//!   intermediates "fuelbed weighting" in its calling comments; the body
//!   that produces them (`fuelModel.cpp`) was not present in the retrieved
//!   slice, so the exact per-class weighting below follows the published
//!   Rothermel (1972) formulas rather than a transcribed source file — see
//!   DESIGN.md.

use tracing::debug;

use crate::core_types::fuel_model::FuelModel;
use crate::inputs::MoistureInputs;

/// Fixed surface-area-to-volume ratios for the 10-h and 100-h dead size
/// classes, ft²/ft³. Unlike the 1-h class and the live classes, these never
/// vary by fuel model (Rothermel 1972).
const SAVR_TEN_HOUR: f64 = 109.0;
const SAVR_HUNDRED_HOUR: f64 = 30.0;

/// Total mineral content fraction, used to compute net (ash-free) fuel
/// load.
const TOTAL_MINERAL_CONTENT: f64 = 0.0555;

/// Effective (silica-free) mineral content fraction, used in the mineral
/// damping coefficient.
const EFFECTIVE_MINERAL_CONTENT: f64 = 0.01;

const PARTICLE_DENSITY: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Life {
    Dead,
    Live,
}

struct Particle {
    load: f64,
    savr: f64,
    moisture: f64,
    life: Life,
}

/// All of the derived fuelbed quantities the reaction-intensity and
/// spread-rate formulas (components D and F) read. Fields are plain `f64`:
/// this module's job is bulk aggregation across size classes, and the
/// newtype units would add conversion noise without catching a real mixup
/// (mirrors the rationale in [`crate::core_types::fuel_model::FuelModel`]).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FuelbedIntermediates {
    pub characteristic_savr: f64,
    pub savr_dead: f64,
    pub savr_live: f64,
    pub bulk_density: f64,
    pub packing_ratio: f64,
    pub optimum_packing_ratio: f64,
    pub relative_packing_ratio: f64,
    pub net_fuel_load_dead: f64,
    pub net_fuel_load_live: f64,
    pub characteristic_moisture_dead: f64,
    pub characteristic_moisture_live: f64,
    pub moisture_of_extinction_live: f64,
    pub heat_sink: f64,
    pub heat_of_combustion_dead: f64,
    pub heat_of_combustion_live: f64,
    /// Fraction of live herbaceous load that transferred to the dead
    /// category under fuel model curing (§4.C), `0.0` for a static model.
    pub herbaceous_transfer_fraction: f64,
}

/// The fraction of live herbaceous load that has cured (and so is carried
/// as dead fuel) given the live herbaceous moisture fraction, for dynamic
/// fuel models.
///
/// Fully cured at or below 30% moisture, fully green at or above 42%,
/// linear between (Rothermel/BehavePlus dynamic curing transfer).
fn herbaceous_transfer_fraction(live_herbaceous_moisture: f64) -> f64 {
    (1.0 - (live_herbaceous_moisture - 0.30) / 0.120).clamp(0.0, 1.0)
}

/// Derive the fuelbed intermediates for one fuel model and moisture
/// scenario.
#[must_use]
pub fn compute_intermediates(fuel: &FuelModel, moisture: &MoistureInputs) -> FuelbedIntermediates {
    let transfer_fraction = if fuel.is_dynamic && fuel.load_live_herbaceous > 0.0 {
        herbaceous_transfer_fraction(moisture.live_herbaceous.0)
    } else {
        0.0
    };
    let dead_herb_load = fuel.load_live_herbaceous * transfer_fraction;
    let live_herb_load = fuel.load_live_herbaceous - dead_herb_load;

    let particles = [
        Particle {
            load: fuel.load_one_hour,
            savr: fuel.savr_one_hour,
            moisture: moisture.one_hour.0,
            life: Life::Dead,
        },
        Particle {
            load: fuel.load_ten_hour,
            savr: SAVR_TEN_HOUR,
            moisture: moisture.ten_hour.0,
            life: Life::Dead,
        },
        Particle {
            load: fuel.load_hundred_hour,
            savr: SAVR_HUNDRED_HOUR,
            moisture: moisture.hundred_hour.0,
            life: Life::Dead,
        },
        Particle {
            load: dead_herb_load,
            savr: fuel.savr_live_herbaceous,
            // Cured herbaceous fuel is carried at the 1-h dead moisture
            // once it has transferred categories.
            moisture: moisture.one_hour.0,
            life: Life::Dead,
        },
        Particle {
            load: live_herb_load,
            savr: fuel.savr_live_herbaceous,
            moisture: moisture.live_herbaceous.0,
            life: Life::Live,
        },
        Particle {
            load: fuel.load_live_woody,
            savr: fuel.savr_live_woody,
            moisture: moisture.live_woody.0,
            life: Life::Live,
        },
    ];

    let total_raw_load: f64 = particles.iter().map(|p| p.load).sum();
    let depth = fuel.fuelbed_depth;
    let bulk_density = if depth > 0.0 {
        total_raw_load / depth
    } else {
        0.0
    };

    // Surface area per unit ground area contributed by each component.
    let surface_area = |p: &Particle| -> f64 {
        if p.load > 0.0 && p.savr > 0.0 {
            (p.load / PARTICLE_DENSITY) * p.savr
        } else {
            0.0
        }
    };

    let surface_dead: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Dead)
        .map(surface_area)
        .sum();
    let surface_live: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Live)
        .map(surface_area)
        .sum();
    let surface_total = surface_dead + surface_live;

    if surface_total <= 0.0 || depth <= 0.0 {
        debug!(fuel_model = fuel.number, "degenerate fuelbed, zero surface area or depth");
        return FuelbedIntermediates {
            heat_of_combustion_dead: fuel.heat_of_combustion_dead,
            heat_of_combustion_live: fuel.heat_of_combustion_live,
            herbaceous_transfer_fraction: transfer_fraction,
            ..FuelbedIntermediates::default()
        };
    }

    let f_category = |p: &Particle| -> f64 {
        let category_total = match p.life {
            Life::Dead => surface_dead,
            Life::Live => surface_live,
        };
        if category_total > 0.0 {
            surface_area(p) / category_total
        } else {
            0.0
        }
    };

    let savr_dead: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Dead)
        .map(|p| f_category(p) * p.savr)
        .sum();
    let savr_live: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Live)
        .map(|p| f_category(p) * p.savr)
        .sum();

    let f_dead_category = surface_dead / surface_total;
    let f_live_category = surface_live / surface_total;
    let characteristic_savr = f_dead_category * savr_dead + f_live_category * savr_live;

    let packing_ratio = bulk_density / PARTICLE_DENSITY;
    let optimum_packing_ratio = 3.348 * characteristic_savr.powf(-0.8189);
    let relative_packing_ratio = if optimum_packing_ratio > 0.0 {
        packing_ratio / optimum_packing_ratio
    } else {
        0.0
    };

    let net_fuel_load_dead: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Dead && p.load > 0.0)
        .map(|p| p.load * (1.0 - TOTAL_MINERAL_CONTENT))
        .sum();
    let net_fuel_load_live: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Live && p.load > 0.0)
        .map(|p| p.load * (1.0 - TOTAL_MINERAL_CONTENT))
        .sum();

    let characteristic_moisture_dead: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Dead)
        .map(|p| f_category(p) * p.moisture)
        .sum();
    let characteristic_moisture_live: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Live)
        .map(|p| f_category(p) * p.moisture)
        .sum();

    let fine_dead_ratio: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Dead && p.load > 0.0 && p.savr > 0.0)
        .map(|p| p.load * (-138.0 / p.savr).exp())
        .sum();
    let fine_live_ratio: f64 = particles
        .iter()
        .filter(|p| p.life == Life::Live && p.load > 0.0 && p.savr > 0.0)
        .map(|p| p.load * (-500.0 / p.savr).exp())
        .sum();

    // The live moisture-of-extinction formula's fine dead fuel moisture
    // `M'_f` is weighted by `load · exp(-138/savr)` — the same weighting
    // `fine_dead_ratio` (`W`) uses above — not by the surface-area
    // weighting `characteristic_moisture_dead` uses. The two only agree
    // when there's a single dead size class (e.g. FM1); for any fuel model
    // with more than one dead class (FM2, FM4, FM5, FM7, FM10, most of the
    // 40-set), reusing `characteristic_moisture_dead` here diverges from
    // BehavePlus.
    let fine_dead_moisture = if fine_dead_ratio > 1e-6 {
        particles
            .iter()
            .filter(|p| p.life == Life::Dead && p.load > 0.0 && p.savr > 0.0)
            .map(|p| p.load * (-138.0 / p.savr).exp() * p.moisture)
            .sum::<f64>()
            / fine_dead_ratio
    } else {
        0.0
    };

    let moisture_of_extinction_live = if fine_live_ratio > 1e-6 {
        let w_prime = fine_dead_ratio / fine_live_ratio;
        let mx = 2.9 * w_prime * (1.0 - fine_dead_moisture / fuel.moisture_of_extinction_dead.max(1e-9))
            - 0.226;
        mx.max(fuel.moisture_of_extinction_dead)
    } else {
        fuel.moisture_of_extinction_dead
    };

    let heat_sink: f64 = particles
        .iter()
        .filter(|p| p.load > 0.0 && p.savr > 0.0)
        .map(|p| {
            let f_overall = match p.life {
                Life::Dead => f_dead_category * f_category(p),
                Life::Live => f_live_category * f_category(p),
            };
            let epsilon = (-138.0 / p.savr).exp();
            let heat_of_preignition = 250.0 + 1116.0 * p.moisture;
            f_overall * epsilon * heat_of_preignition
        })
        .sum::<f64>()
        * bulk_density;

    FuelbedIntermediates {
        characteristic_savr,
        savr_dead,
        savr_live,
        bulk_density,
        packing_ratio,
        optimum_packing_ratio,
        relative_packing_ratio,
        net_fuel_load_dead,
        net_fuel_load_live,
        characteristic_moisture_dead,
        characteristic_moisture_live,
        moisture_of_extinction_live,
        heat_sink,
        heat_of_combustion_dead: fuel.heat_of_combustion_dead,
        heat_of_combustion_live: fuel.heat_of_combustion_live,
        herbaceous_transfer_fraction: transfer_fraction,
    }
}

/// The mineral damping coefficient, a fixed constant under the standard
/// 0.01 effective mineral content assumption (shared by component D).
#[must_use]
pub fn mineral_damping_coefficient() -> f64 {
    (0.174 * EFFECTIVE_MINERAL_CONTENT.powf(-0.19)).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::Fraction;

    fn fm1() -> FuelModel {
        FuelModel::new_defined(
            1, "FM1", "Short grass", 1.0, 0.12, 8000.0, 8000.0, 0.034, 0.0, 0.0, 0.0, 0.0, 3500.0,
            0.0, 0.0, false, true,
        )
    }

    #[test]
    fn degenerate_fuelbed_is_all_zero() {
        let fuel = FuelModel::default();
        let intermediates = compute_intermediates(&fuel, &MoistureInputs::default());
        assert_eq!(intermediates.characteristic_savr, 0.0);
        assert_eq!(intermediates.heat_sink, 0.0);
    }

    #[test]
    fn fm1_packing_ratio_is_positive_and_below_optimum_typically() {
        let fuel = fm1();
        let moisture = MoistureInputs {
            one_hour: Fraction(0.06),
            ten_hour: Fraction(0.07),
            hundred_hour: Fraction(0.08),
            live_herbaceous: Fraction(0.60),
            live_woody: Fraction(0.90),
        };
        let intermediates = compute_intermediates(&fuel, &moisture);
        assert!(intermediates.packing_ratio > 0.0);
        assert!(intermediates.optimum_packing_ratio > 0.0);
        assert!(intermediates.characteristic_savr > 0.0);
        assert!(intermediates.heat_sink > 0.0);
    }

    #[test]
    fn dynamic_model_transfers_herb_load_when_cured() {
        let mut fuel = fm1();
        fuel.is_dynamic = true;
        fuel.load_live_herbaceous = 0.1;
        fuel.savr_live_herbaceous = 1800.0;
        let mut moisture = MoistureInputs::default();
        moisture.live_herbaceous = Fraction(0.30);
        let intermediates = compute_intermediates(&fuel, &moisture);
        assert!((intermediates.herbaceous_transfer_fraction - 1.0).abs() < 1e-9);

        moisture.live_herbaceous = Fraction(1.20);
        let intermediates = compute_intermediates(&fuel, &moisture);
        assert!(intermediates.herbaceous_transfer_fraction.abs() < 1e-9);
    }
}
