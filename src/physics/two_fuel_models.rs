//! Two-fuel-model blending (component G): combine two independent forward
//! spread runs into one fire behavior description for a fuelbed made of two
//! fuel models in some coverage split.
//!
//! # References
//! - `examples/original_source/src/behave/surfaceTwoFuelModels.h` declares
//!   the per-model member arrays and output getters this module's inputs
//!   and outputs mirror, but the method body (`surfaceTwoFuelModels.cpp`,
//!   including Finney's `efsprd` two-dimensional integration) was not
//!   present in the retrieved `original_source/` slice. The "two
//!   dimensional" method's forward rate therefore degenerates to the same
//!   arithmetic blend as the `Arithmetic` method, per §4.G's explicit
//!   escape hatch ("implementers may use arithmetic weighting when the
//!   faster model's LWR ≤ 1"); only its length-to-width ratio is derived
//!   from the per-model minor-axis rates rather than a per-model LWR
//!   average. Documented as an Open Question resolution in DESIGN.md
//!   rather than a transcription of the original algorithm.

use crate::catalog::FuelModelCatalog;
use crate::core_types::units::{ChainsPerHour, Degrees};
use crate::inputs::{SurfaceInputs, TwoFuelModelsMethod};
use crate::physics::spread::{calculate_forward_spread_rate, FireBehavior};

/// Run both fuel models in a two-fuel-model scenario and combine them per
/// `inputs.two_fuel_models`. Returns the unmodified single-fuel-model
/// result if `inputs.two_fuel_models` is `None`.
#[must_use]
pub fn calculate_two_fuel_models_spread_rate(inputs: &SurfaceInputs, catalog: &FuelModelCatalog) -> FireBehavior {
    let Some(two_fuel) = inputs.two_fuel_models else {
        return calculate_forward_spread_rate(inputs, catalog);
    };

    let mut first_inputs = *inputs;
    first_inputs.two_fuel_models = None;
    let mut second_inputs = *inputs;
    second_inputs.two_fuel_models = None;
    second_inputs.fuel_model_number = two_fuel.second_fuel_model_number;

    let first = calculate_forward_spread_rate(&first_inputs, catalog);
    let second = calculate_forward_spread_rate(&second_inputs, catalog);

    let coverage = two_fuel.first_fuel_model_coverage.0;
    let method = if two_fuel.method == TwoFuelModelsMethod::NoMethod {
        TwoFuelModelsMethod::Arithmetic
    } else {
        two_fuel.method
    };

    let r1 = first.forward_spread_rate().0;
    let r2 = second.forward_spread_rate().0;

    let forward_spread_rate = match method {
        TwoFuelModelsMethod::Arithmetic | TwoFuelModelsMethod::NoMethod => {
            coverage * r1 + (1.0 - coverage) * r2
        }
        TwoFuelModelsMethod::Harmonic => {
            if r1 > 0.0 && r2 > 0.0 {
                1.0 / (coverage / r1 + (1.0 - coverage) / r2)
            } else {
                0.0
            }
        }
        // The Finney `efsprd` two-dimensional integration itself was not in
        // the retrieved `original_source/` slice (spec.md §9 open question
        // 3). Per §4.G's explicit escape hatch ("implementers may use
        // arithmetic weighting when the faster model's LWR ≤ 1"), the rate
        // degenerates to the arithmetic blend; only the length-to-width
        // ratio below is derived from the per-model minor-axis rates, since
        // that's what actually shapes the combined ellipse.
        TwoFuelModelsMethod::TwoDimensional => coverage * r1 + (1.0 - coverage) * r2,
    };

    let length_to_width_ratio = match method {
        TwoFuelModelsMethod::TwoDimensional => {
            let minor1 = if first.length_to_width_ratio() > 0.0 {
                r1 / first.length_to_width_ratio()
            } else {
                r1
            };
            let minor2 = if second.length_to_width_ratio() > 0.0 {
                r2 / second.length_to_width_ratio()
            } else {
                r2
            };
            let minor_blend = coverage * minor1 + (1.0 - coverage) * minor2;
            if minor_blend > 0.0 {
                forward_spread_rate / minor_blend
            } else {
                1.0
            }
        }
        _ => coverage * first.length_to_width_ratio() + (1.0 - coverage) * second.length_to_width_ratio(),
    }
    .max(1.0);

    let eccentricity = if length_to_width_ratio > 1.0 {
        (length_to_width_ratio * length_to_width_ratio - 1.0).sqrt() / length_to_width_ratio
    } else {
        0.0
    };

    let dir1 = inputs.to_upslope_relative(first.direction_of_max_spread());
    let dir2 = inputs.to_upslope_relative(second.direction_of_max_spread());
    let w1 = coverage * r1;
    let w2 = (1.0 - coverage) * r2;
    let x = w1 * dir1.to_radians().cos() + w2 * dir2.to_radians().cos();
    let y = w1 * dir1.to_radians().sin() + w2 * dir2.to_radians().sin();
    let direction_rel_upslope = if x.abs() > 1e-12 || y.abs() > 1e-12 {
        Degrees(y.atan2(x).to_degrees()).normalized()
    } else {
        Degrees(0.0)
    };

    FireBehavior::from_combined(
        ChainsPerHour(forward_spread_rate),
        inputs.from_upslope_relative(direction_rel_upslope),
        direction_rel_upslope,
        crate::core_types::units::MilesPerHour(
            coverage * first.effective_wind_speed().0 + (1.0 - coverage) * second.effective_wind_speed().0,
        ),
        crate::core_types::units::MilesPerHour(
            coverage * first.wind_speed_limit().0 + (1.0 - coverage) * second.wind_speed_limit().0,
        ),
        first.wind_speed_limit_exceeded() || second.wind_speed_limit_exceeded(),
        crate::core_types::units::BtuPerSqFtPerMin(
            coverage * first.reaction_intensity().0 + (1.0 - coverage) * second.reaction_intensity().0,
        ),
        crate::core_types::units::BtuPerFtPerSec(
            coverage * first.fireline_intensity().0 + (1.0 - coverage) * second.fireline_intensity().0,
        ),
        crate::core_types::units::Feet(
            coverage * first.flame_length().0 + (1.0 - coverage) * second.flame_length().0,
        ),
        crate::core_types::units::Minutes(
            coverage * first.residence_time().0 + (1.0 - coverage) * second.residence_time().0,
        ),
        crate::core_types::units::BtuPerSqFt(
            coverage * first.heat_per_unit_area().0 + (1.0 - coverage) * second.heat_per_unit_area().0,
        ),
        crate::core_types::units::MilesPerHour(
            coverage * first.midflame_wind_speed().0 + (1.0 - coverage) * second.midflame_wind_speed().0,
        ),
        length_to_width_ratio,
        eccentricity,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::{Feet, Fraction, MilesPerHour};
    use crate::inputs::{MoistureInputs, SlopeInputMode, TwoFuelModelsInputs, WindAndSpreadAngleMode, WindHeightInputMode};

    fn scenario() -> SurfaceInputs {
        let mut inputs = SurfaceInputs::new();
        inputs.set_to_two_fuel_models(
            1,
            TwoFuelModelsInputs {
                second_fuel_model_number: 10,
                first_fuel_model_coverage: Fraction(0.7),
                method: TwoFuelModelsMethod::Arithmetic,
            },
            MoistureInputs {
                one_hour: Fraction(0.06),
                ten_hour: Fraction(0.07),
                hundred_hour: Fraction(0.08),
                live_herbaceous: Fraction(0.60),
                live_woody: Fraction(0.90),
            },
            MilesPerHour(5.0),
            WindHeightInputMode::TwentyFoot,
            Degrees(0.0),
            WindAndSpreadAngleMode::RelativeToUpslope,
            SlopeInputMode::Percent,
            0.0,
            Degrees(0.0),
            Fraction::ZERO,
            Feet(0.0),
            Fraction::ZERO,
        );
        inputs
    }

    #[test]
    fn arithmetic_blend_lies_between_the_two_pure_rates() {
        let catalog = FuelModelCatalog::new();
        let inputs = scenario();
        let blended = calculate_two_fuel_models_spread_rate(&inputs, &catalog);

        let mut fm1_only = inputs;
        fm1_only.two_fuel_models = None;
        let pure1 = calculate_forward_spread_rate(&fm1_only, &catalog);

        let mut fm10_only = inputs;
        fm10_only.two_fuel_models = None;
        fm10_only.fuel_model_number = 10;
        let pure10 = calculate_forward_spread_rate(&fm10_only, &catalog);

        let lo = pure1.forward_spread_rate().0.min(pure10.forward_spread_rate().0);
        let hi = pure1.forward_spread_rate().0.max(pure10.forward_spread_rate().0);
        assert!(blended.forward_spread_rate().0 >= lo - 1e-6);
        assert!(blended.forward_spread_rate().0 <= hi + 1e-6);
    }

    #[test]
    fn no_two_fuel_models_payload_falls_back_to_single_model() {
        let catalog = FuelModelCatalog::new();
        let mut inputs = scenario();
        inputs.two_fuel_models = None;
        let behavior = calculate_two_fuel_models_spread_rate(&inputs, &catalog);
        let direct = calculate_forward_spread_rate(&inputs, &catalog);
        assert_eq!(behavior.forward_spread_rate(), direct.forward_spread_rate());
    }
}
