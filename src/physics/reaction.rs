//! Reaction intensity and propagating flux ratio (component D).
//!
//! # References
//! - Rothermel, R.C. (1972), eq. 27 (reaction velocity), eq. 29–30
//!   (moisture damping), eq. 23–24 (mineral damping), eq. 27 (reaction
//!   intensity), eq. 42 (propagating flux ratio).

use crate::physics::intermediates::{mineral_damping_coefficient, FuelbedIntermediates};

/// Optimum reaction velocity, 1/min (Rothermel 1972 eq. 36, 38).
fn reaction_velocity(characteristic_savr: f64, relative_packing_ratio: f64) -> f64 {
    if characteristic_savr <= 0.0 {
        return 0.0;
    }
    let sigma_15 = characteristic_savr.powf(1.5);
    let max_reaction_velocity = sigma_15 / (495.0 + 0.0594 * sigma_15);
    let a = 133.0 * characteristic_savr.powf(-0.7913);
    max_reaction_velocity
        * relative_packing_ratio.powf(a)
        * (a * (1.0 - relative_packing_ratio)).exp()
}

/// Moisture damping coefficient for one life category, clamped to `[0, 1]`
/// (Rothermel 1972 eq. 29).
fn moisture_damping_coefficient(characteristic_moisture: f64, moisture_of_extinction: f64) -> f64 {
    if moisture_of_extinction <= 0.0 {
        return 0.0;
    }
    let ratio = (characteristic_moisture / moisture_of_extinction).min(1.0);
    (1.0 - 2.59 * ratio + 5.11 * ratio.powi(2) - 3.52 * ratio.powi(3)).clamp(0.0, 1.0)
}

/// Reaction intensity, Btu/ft²/min, and the propagating flux ratio,
/// dimensionless.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReactionOutputs {
    pub reaction_intensity: f64,
    pub propagating_flux_ratio: f64,
}

/// Combine the fuelbed intermediates and a dead-fuel moisture of extinction
/// into reaction intensity and propagating flux ratio.
#[must_use]
pub fn compute_reaction(intermediates: &FuelbedIntermediates, moisture_of_extinction_dead: f64) -> ReactionOutputs {
    if intermediates.characteristic_savr <= 0.0 {
        return ReactionOutputs::default();
    }

    let gamma = reaction_velocity(
        intermediates.characteristic_savr,
        intermediates.relative_packing_ratio,
    );
    let eta_s = mineral_damping_coefficient();
    let eta_m_dead = moisture_damping_coefficient(
        intermediates.characteristic_moisture_dead,
        moisture_of_extinction_dead,
    );
    let eta_m_live = moisture_damping_coefficient(
        intermediates.characteristic_moisture_live,
        intermediates.moisture_of_extinction_live,
    );

    let reaction_intensity_dead =
        gamma * intermediates.net_fuel_load_dead * intermediates.heat_of_combustion_dead * eta_m_dead * eta_s;
    let reaction_intensity_live =
        gamma * intermediates.net_fuel_load_live * intermediates.heat_of_combustion_live * eta_m_live * eta_s;
    let reaction_intensity = reaction_intensity_dead + reaction_intensity_live;

    let sigma = intermediates.characteristic_savr;
    let propagating_flux_ratio = ((0.792 + 0.681 * sigma.sqrt()) * (intermediates.packing_ratio + 0.1)).exp()
        / (192.0 + 0.2595 * sigma);

    ReactionOutputs {
        reaction_intensity,
        propagating_flux_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_savr_yields_zero_reaction() {
        let intermediates = FuelbedIntermediates::default();
        let out = compute_reaction(&intermediates, 0.12);
        assert_eq!(out.reaction_intensity, 0.0);
        assert_eq!(out.propagating_flux_ratio, 0.0);
    }

    #[test]
    fn moisture_ratio_at_or_above_extinction_kills_reaction() {
        let intermediates = FuelbedIntermediates {
            characteristic_savr: 2000.0,
            packing_ratio: 0.01,
            relative_packing_ratio: 0.5,
            net_fuel_load_dead: 0.03,
            net_fuel_load_live: 0.0,
            characteristic_moisture_dead: 0.30,
            heat_of_combustion_dead: 8000.0,
            ..FuelbedIntermediates::default()
        };
        let out = compute_reaction(&intermediates, 0.12);
        assert_eq!(out.reaction_intensity, 0.0);
    }

    #[test]
    fn typical_inputs_yield_positive_reaction_intensity() {
        let intermediates = FuelbedIntermediates {
            characteristic_savr: 3500.0,
            packing_ratio: 0.00337,
            optimum_packing_ratio: 0.00611,
            relative_packing_ratio: 0.00337 / 0.00611,
            net_fuel_load_dead: 0.034 * (1.0 - 0.0555),
            net_fuel_load_live: 0.0,
            characteristic_moisture_dead: 0.06,
            moisture_of_extinction_live: 0.12,
            heat_of_combustion_dead: 8000.0,
            heat_of_combustion_live: 8000.0,
            ..FuelbedIntermediates::default()
        };
        let out = compute_reaction(&intermediates, 0.12);
        assert!(out.reaction_intensity > 0.0);
        assert!(out.propagating_flux_ratio > 0.0 && out.propagating_flux_ratio < 1.0);
    }
}
