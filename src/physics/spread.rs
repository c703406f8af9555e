//! The forward spread rate orchestrator (component F): combines components
//! A–E into a fire-ellipse description of surface fire behavior for one
//! scenario.
//!
//! # References
//! - `examples/original_source/src/surfaceFireSpread.cpp`
//!   (`calculateForwardSpreadRate`, `calculateSpreadRateAtVector`,
//!   `getDirectionOfMaxSpread`, `calculateWindSpeedLimit`) — the
//!   orchestration order, the slope-factor wind-speed-limit clamp, the
//!   zero-forward-rate vector guard, and the `rem_euclid`-equivalent
//!   direction wrap are all grounded here (SPEC_FULL §B.2, §B.3).
//! - Rothermel, R.C. (1972), eq. 47–49 (wind factor), eq. 51 (slope
//!   factor), eq. 86–88 (wind speed limit).
//! - Albini, F.A. (1976); Anderson, H.E. (1983), "Predicting Wind-Driven
//!   Wildland Fire Size and Shape" (fire ellipse length-to-width ratio and
//!   eccentricity; not in the retrieved `original_source/` slice, so
//!   transcribed from the published formula — see DESIGN.md).

use tracing::{debug, warn};

use crate::catalog::FuelModelCatalog;
use crate::core_types::units::{
    BtuPerFtPerSec, BtuPerSqFt, BtuPerSqFtPerMin, ChainsPerHour, Degrees, Feet, FeetPerMinute,
    Fraction, MilesPerHour, Minutes,
};
use crate::inputs::{SurfaceInputs, WindHeightInputMode};
use crate::physics::intermediates::compute_intermediates;
use crate::physics::reaction::compute_reaction;
use crate::physics::wind_adjustment;

/// Conversion applied to a 10-m wind observation before the midflame
/// adjustment, which is defined relative to the 20-ft wind profile.
const TEN_METER_TO_TWENTY_FOOT: f64 = 1.15;

/// The complete fire behavior description for one scenario's forward
/// spread direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FireBehavior {
    forward_spread_rate: ChainsPerHour,
    /// Direction of maximum spread, in the frame the originating
    /// `SurfaceInputs::wind_and_spread_angle_mode` named.
    direction_of_max_spread: Degrees,
    effective_wind_speed: MilesPerHour,
    wind_speed_limit: MilesPerHour,
    wind_speed_limit_exceeded: bool,
    reaction_intensity: BtuPerSqFtPerMin,
    fireline_intensity: BtuPerFtPerSec,
    flame_length: Feet,
    residence_time: Minutes,
    heat_per_unit_area: BtuPerSqFt,
    midflame_wind_speed: MilesPerHour,
    length_to_width_ratio: f64,
    eccentricity: f64,

    // Carried internally so `calculate_spread_rate_at_vector` doesn't need
    // to repeat component C/D/E/F work for the same scenario.
    direction_of_max_spread_relative_to_upslope: Degrees,
}

impl FireBehavior {
    /// Build a `FireBehavior` from already-combined fields. Used by
    /// component G (two-fuel-model blending) to assemble a result without
    /// re-deriving it through `calculate_forward_spread_rate`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_combined(
        forward_spread_rate: ChainsPerHour,
        direction_of_max_spread: Degrees,
        direction_of_max_spread_relative_to_upslope: Degrees,
        effective_wind_speed: MilesPerHour,
        wind_speed_limit: MilesPerHour,
        wind_speed_limit_exceeded: bool,
        reaction_intensity: BtuPerSqFtPerMin,
        fireline_intensity: BtuPerFtPerSec,
        flame_length: Feet,
        residence_time: Minutes,
        heat_per_unit_area: BtuPerSqFt,
        midflame_wind_speed: MilesPerHour,
        length_to_width_ratio: f64,
        eccentricity: f64,
    ) -> Self {
        FireBehavior {
            forward_spread_rate,
            direction_of_max_spread,
            effective_wind_speed,
            wind_speed_limit,
            wind_speed_limit_exceeded,
            reaction_intensity,
            fireline_intensity,
            flame_length,
            residence_time,
            heat_per_unit_area,
            midflame_wind_speed,
            length_to_width_ratio,
            eccentricity,
            direction_of_max_spread_relative_to_upslope,
        }
    }

    #[must_use]
    pub fn forward_spread_rate(&self) -> ChainsPerHour {
        self.forward_spread_rate
    }

    #[must_use]
    pub fn direction_of_max_spread(&self) -> Degrees {
        self.direction_of_max_spread
    }

    #[must_use]
    pub fn effective_wind_speed(&self) -> MilesPerHour {
        self.effective_wind_speed
    }

    #[must_use]
    pub fn wind_speed_limit(&self) -> MilesPerHour {
        self.wind_speed_limit
    }

    #[must_use]
    pub fn wind_speed_limit_exceeded(&self) -> bool {
        self.wind_speed_limit_exceeded
    }

    #[must_use]
    pub fn reaction_intensity(&self) -> BtuPerSqFtPerMin {
        self.reaction_intensity
    }

    #[must_use]
    pub fn fireline_intensity(&self) -> BtuPerFtPerSec {
        self.fireline_intensity
    }

    #[must_use]
    pub fn flame_length(&self) -> Feet {
        self.flame_length
    }

    #[must_use]
    pub fn residence_time(&self) -> Minutes {
        self.residence_time
    }

    #[must_use]
    pub fn heat_per_unit_area(&self) -> BtuPerSqFt {
        self.heat_per_unit_area
    }

    #[must_use]
    pub fn midflame_wind_speed(&self) -> MilesPerHour {
        self.midflame_wind_speed
    }

    #[must_use]
    pub fn length_to_width_ratio(&self) -> f64 {
        self.length_to_width_ratio
    }

    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// The spread rate along an arbitrary direction of interest, derived
    /// from the forward rate and the fire ellipse's eccentricity.
    ///
    /// `direction_of_interest` is in whichever frame `inputs`'
    /// `wind_and_spread_angle_mode` names. A forward rate of zero
    /// short-circuits to zero without touching the eccentricity formula,
    /// matching the source's `if (forwardSpreadRate_)` guard (SPEC_FULL
    /// §B.2) — otherwise a zero-rate, zero-eccentricity scenario would
    /// divide zero by zero.
    #[must_use]
    pub fn calculate_spread_rate_at_vector(
        &self,
        inputs: &SurfaceInputs,
        direction_of_interest: Degrees,
    ) -> ChainsPerHour {
        if self.forward_spread_rate.0 <= 0.0 {
            return self.forward_spread_rate;
        }
        let direction_rel_upslope = inputs.to_upslope_relative(direction_of_interest);
        spread_rate_at_vector(
            self.forward_spread_rate,
            self.direction_of_max_spread_relative_to_upslope,
            self.eccentricity,
            direction_rel_upslope,
        )
    }
}

/// The vector-spread formula shared by the post-hoc
/// [`FireBehavior::calculate_spread_rate_at_vector`] accessor and the
/// `direction_of_interest`-aware orchestrator below (§4.F step 15). Works in
/// whatever rate unit is passed in and returns the same unit, since the
/// ellipse ratio is unit-independent.
fn vector_adjusted_rate_fpm(
    forward_spread_rate_fpm: f64,
    direction_of_max_spread_rel_upslope: Degrees,
    eccentricity: f64,
    direction_of_interest_rel_upslope: Degrees,
) -> f64 {
    if forward_spread_rate_fpm <= 0.0 {
        return forward_spread_rate_fpm;
    }
    let mut beta = (direction_of_interest_rel_upslope.0 - direction_of_max_spread_rel_upslope.0).abs();
    if beta > 180.0 {
        beta = 360.0 - beta;
    }
    if beta <= 0.1 {
        return forward_spread_rate_fpm;
    }
    let beta_radians = beta.to_radians();
    let denominator = 1.0 - eccentricity * beta_radians.cos();
    if denominator <= 0.0 {
        return forward_spread_rate_fpm;
    }
    forward_spread_rate_fpm * (1.0 - eccentricity) / denominator
}

fn spread_rate_at_vector(
    forward_spread_rate: ChainsPerHour,
    direction_of_max_spread_rel_upslope: Degrees,
    eccentricity: f64,
    direction_of_interest_rel_upslope: Degrees,
) -> ChainsPerHour {
    ChainsPerHour(vector_adjusted_rate_fpm(
        forward_spread_rate.0,
        direction_of_max_spread_rel_upslope,
        eccentricity,
        direction_of_interest_rel_upslope,
    ))
}

fn wind_factor(characteristic_savr: f64, relative_packing_ratio: f64, midflame_wind_fpm: f64) -> f64 {
    if midflame_wind_fpm <= 0.0 {
        return 0.0;
    }
    let c = 7.47 * (-0.133 * characteristic_savr.powf(0.55)).exp();
    let b = 0.02526 * characteristic_savr.powf(0.54);
    let e = 0.715 * (-0.000359 * characteristic_savr).exp();
    c * midflame_wind_fpm.powf(b) * relative_packing_ratio.powf(-e)
}

/// Invert the wind factor formula to recover the midflame wind speed (in
/// ft/min) that would produce a given wind factor value.
fn wind_factor_to_wind_speed(characteristic_savr: f64, relative_packing_ratio: f64, phi_w: f64) -> f64 {
    if phi_w <= 0.0 {
        return 0.0;
    }
    let c = 7.47 * (-0.133 * characteristic_savr.powf(0.55)).exp();
    let b = 0.02526 * characteristic_savr.powf(0.54);
    let e = 0.715 * (-0.000359 * characteristic_savr).exp();
    (phi_w / (c * relative_packing_ratio.powf(-e))).powf(1.0 / b)
}

fn slope_factor(packing_ratio: f64, slope_degrees: f64) -> f64 {
    let tan_slope = slope_degrees.to_radians().tan();
    5.275 * packing_ratio.powf(-0.3) * tan_slope.powi(2)
}

fn midflame_wind_speed(inputs: &SurfaceInputs, fuelbed_depth: Feet) -> FeetPerMinute {
    let waf = wind_adjustment::derive(
        inputs.user_wind_adjustment_factor,
        inputs.canopy_cover,
        inputs.canopy_height,
        inputs.crown_ratio,
        fuelbed_depth,
    );
    match inputs.wind_height_input_mode {
        WindHeightInputMode::DirectMidflame => inputs.wind_speed.to_feet_per_minute(),
        WindHeightInputMode::TwentyFoot => FeetPerMinute(inputs.wind_speed.to_feet_per_minute().0 * waf.0),
        WindHeightInputMode::TenMeter => {
            let twenty_foot_mph = MilesPerHour(inputs.wind_speed.0 / TEN_METER_TO_TWENTY_FOOT);
            FeetPerMinute(twenty_foot_mph.to_feet_per_minute().0 * waf.0)
        }
    }
}

/// Run the full component A–F chain for one scenario: resolve the fuel
/// model, derive fuelbed intermediates, reaction intensity, wind and slope
/// factors, compose the direction of maximum spread, apply the
/// wind-speed limit, and build the fire ellipse.
///
/// If `inputs.direction_of_interest` is set, the returned rate (and the
/// fireline intensity and flame length derived from it) is the spread rate
/// along that vector rather than the forward rate, matching the source's
/// `calculateForwardSpreadRate(directionOfInterest)` contract (§4.F step
/// 15; `None` is the source's `directionOfInterest == -1.0` sentinel).
#[must_use]
pub fn calculate_forward_spread_rate(inputs: &SurfaceInputs, catalog: &FuelModelCatalog) -> FireBehavior {
    let Some(fuel) = catalog.get(inputs.fuel_model_number) else {
        warn!(fuel_model = inputs.fuel_model_number, "undefined fuel model, returning zero fire behavior");
        return FireBehavior::default();
    };

    let intermediates = compute_intermediates(fuel, &inputs.moisture);
    let reaction = compute_reaction(&intermediates, fuel.moisture_of_extinction_dead);

    if intermediates.heat_sink <= 0.0 || intermediates.characteristic_savr <= 0.0 {
        debug!(fuel_model = inputs.fuel_model_number, "degenerate fuelbed, zero spread");
        return FireBehavior::default();
    }

    let no_wind_no_slope_rate = reaction.reaction_intensity * reaction.propagating_flux_ratio / intermediates.heat_sink;

    let midflame_wind = midflame_wind_speed(inputs, Feet(fuel.fuelbed_depth));
    let phi_w = wind_factor(
        intermediates.characteristic_savr,
        intermediates.relative_packing_ratio,
        midflame_wind.0,
    );
    let mut phi_s = slope_factor(intermediates.packing_ratio, inputs.slope_as_degrees().0);

    // Wind speed limit (ft/min), computed before composing the direction
    // vector: the slope factor alone is clamped against it first to avoid
    // an unbounded slope response on a near-empty fuelbed (§4.F step 7).
    let wind_speed_limit_fpm = 0.9 * reaction.reaction_intensity;
    if phi_s > wind_speed_limit_fpm {
        phi_s = wind_speed_limit_fpm;
    }

    let wind_direction_rel_upslope = inputs.wind_direction_relative_to_upslope();
    let wind_rad = wind_direction_rel_upslope.to_radians();
    let x = phi_s + phi_w * wind_rad.cos();
    let y = phi_w * wind_rad.sin();
    let mut phi_max = (x * x + y * y).sqrt();
    let mut azimuth_degrees = y.atan2(x).to_degrees();
    if azimuth_degrees < -1e-20 {
        azimuth_degrees += 360.0;
    }
    if azimuth_degrees.abs() < 0.5 {
        azimuth_degrees = 0.0;
    }
    let direction_of_max_spread_rel_upslope = Degrees(azimuth_degrees).normalized();

    let effective_wind_speed_fpm = wind_factor_to_wind_speed(
        intermediates.characteristic_savr,
        intermediates.relative_packing_ratio,
        phi_max,
    );

    let mut wind_speed_limit_exceeded = false;
    let final_effective_wind_speed_fpm = if effective_wind_speed_fpm > wind_speed_limit_fpm {
        wind_speed_limit_exceeded = true;
        warn!(
            fuel_model = inputs.fuel_model_number,
            limit = wind_speed_limit_fpm,
            effective = effective_wind_speed_fpm,
            "effective wind speed exceeds Rothermel wind speed limit, clamping"
        );
        phi_max = wind_factor(
            intermediates.characteristic_savr,
            intermediates.relative_packing_ratio,
            wind_speed_limit_fpm,
        );
        wind_speed_limit_fpm
    } else {
        effective_wind_speed_fpm
    };

    let forward_spread_rate_fpm = no_wind_no_slope_rate * (1.0 + phi_max);

    let residence_time = Minutes(384.0 / intermediates.characteristic_savr);
    let heat_per_unit_area = BtuPerSqFtPerMin(reaction.reaction_intensity) * residence_time;

    let effective_wind_mph = FeetPerMinute(final_effective_wind_speed_fpm).to_miles_per_hour();
    let wind_speed_limit_mph = FeetPerMinute(wind_speed_limit_fpm).to_miles_per_hour();
    let length_to_width_ratio = if effective_wind_mph.0 > 1e-7 {
        1.0 + 0.25 * effective_wind_mph.0
    } else {
        1.0
    };
    let eccentricity = if length_to_width_ratio > 1.0 {
        (length_to_width_ratio * length_to_width_ratio - 1.0).sqrt() / length_to_width_ratio
    } else {
        0.0
    };

    // Spread rate at an arbitrary direction of interest replaces the
    // forward rate for everything downstream (fireline intensity, flame
    // length, the returned rate itself) when the caller asked for one.
    let reported_rate_fpm = match inputs.direction_of_interest {
        Some(doi) => {
            let doi_rel_upslope = inputs.to_upslope_relative(doi);
            vector_adjusted_rate_fpm(
                forward_spread_rate_fpm,
                direction_of_max_spread_rel_upslope,
                eccentricity,
                doi_rel_upslope,
            )
        }
        None => forward_spread_rate_fpm,
    };

    let fireline_intensity = BtuPerFtPerSec(heat_per_unit_area.0 * reported_rate_fpm / 60.0);
    let flame_length = Feet(if fireline_intensity.0 < 1e-7 {
        0.0
    } else {
        0.45 * fireline_intensity.0.powf(0.46)
    });

    let forward_spread_rate = FeetPerMinute(reported_rate_fpm).to_chains_per_hour();

    FireBehavior {
        forward_spread_rate,
        direction_of_max_spread: inputs.from_upslope_relative(direction_of_max_spread_rel_upslope),
        effective_wind_speed: effective_wind_mph,
        wind_speed_limit: wind_speed_limit_mph,
        wind_speed_limit_exceeded,
        reaction_intensity: BtuPerSqFtPerMin(reaction.reaction_intensity),
        fireline_intensity,
        flame_length,
        residence_time,
        heat_per_unit_area,
        midflame_wind_speed: midflame_wind.to_miles_per_hour(),
        length_to_width_ratio,
        eccentricity,
        direction_of_max_spread_relative_to_upslope: direction_of_max_spread_rel_upslope,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FuelModelCatalog;
    use crate::core_types::units::Fraction;
    use crate::inputs::{MoistureInputs, SlopeInputMode, SurfaceInputs, WindAndSpreadAngleMode};

    fn no_wind_no_slope_inputs(fuel_model_number: u16) -> SurfaceInputs {
        let mut inputs = SurfaceInputs::new();
        inputs.set_to_standard(
            fuel_model_number,
            MoistureInputs {
                one_hour: Fraction(0.06),
                ten_hour: Fraction(0.07),
                hundred_hour: Fraction(0.08),
                live_herbaceous: Fraction(0.60),
                live_woody: Fraction(0.90),
            },
            MilesPerHour(0.0),
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
    fn no_wind_no_slope_has_zero_length_to_width_ratio_baseline() {
        let catalog = FuelModelCatalog::new();
        let inputs = no_wind_no_slope_inputs(1);
        let behavior = calculate_forward_spread_rate(&inputs, &catalog);
        assert!(behavior.forward_spread_rate().0 > 0.0);
        assert!((behavior.length_to_width_ratio() - 1.0).abs() < 1e-9);
        assert_eq!(behavior.eccentricity(), 0.0);
        assert!(!behavior.wind_speed_limit_exceeded());
        assert_eq!(behavior.direction_of_max_spread(), Degrees(0.0));
    }

    #[test]
    fn undefined_fuel_model_yields_zero_behavior() {
        let catalog = FuelModelCatalog::new();
        let inputs = no_wind_no_slope_inputs(9999);
        let behavior = calculate_forward_spread_rate(&inputs, &catalog);
        assert_eq!(behavior.forward_spread_rate(), ChainsPerHour(0.0));
    }

    #[test]
    fn wind_increases_forward_spread_rate() {
        let catalog = FuelModelCatalog::new();
        let mut inputs = no_wind_no_slope_inputs(1);
        let calm = calculate_forward_spread_rate(&inputs, &catalog);
        inputs.wind_speed = MilesPerHour(5.0);
        let windy = calculate_forward_spread_rate(&inputs, &catalog);
        assert!(windy.forward_spread_rate().0 > calm.forward_spread_rate().0);
    }

    #[test]
    fn zero_forward_rate_short_circuits_vector_spread() {
        let catalog = FuelModelCatalog::new();
        let inputs = no_wind_no_slope_inputs(9999);
        let behavior = calculate_forward_spread_rate(&inputs, &catalog);
        let rate = behavior.calculate_spread_rate_at_vector(&inputs, Degrees(90.0));
        assert_eq!(rate, ChainsPerHour(0.0));
    }

    #[test]
    fn spread_at_max_spread_direction_equals_forward_rate() {
        let catalog = FuelModelCatalog::new();
        let mut inputs = no_wind_no_slope_inputs(1);
        inputs.wind_speed = MilesPerHour(5.0);
        let behavior = calculate_forward_spread_rate(&inputs, &catalog);
        let at_max = behavior.calculate_spread_rate_at_vector(&inputs, behavior.direction_of_max_spread());
        assert!((at_max.0 - behavior.forward_spread_rate().0).abs() / behavior.forward_spread_rate().0 < 1e-9);
    }

    #[test]
    fn wind_speed_limit_regime_clamps_effective_wind_to_limit() {
        let catalog = FuelModelCatalog::new();
        let mut inputs = SurfaceInputs::new();
        inputs.set_to_standard(
            1,
            MoistureInputs {
                one_hour: Fraction(0.03),
                ten_hour: Fraction(0.04),
                hundred_hour: Fraction(0.05),
                live_herbaceous: Fraction(0.30),
                live_woody: Fraction(0.60),
            },
            MilesPerHour(50.0),
            WindHeightInputMode::DirectMidflame,
            Degrees(0.0),
            WindAndSpreadAngleMode::RelativeToUpslope,
            SlopeInputMode::Percent,
            0.0,
            Degrees(0.0),
            Fraction::ZERO,
            Feet(0.0),
            Fraction::ZERO,
        );
        let behavior = calculate_forward_spread_rate(&inputs, &catalog);
        assert!(behavior.wind_speed_limit_exceeded());
        assert!((behavior.effective_wind_speed().0 - behavior.wind_speed_limit().0).abs() < 1e-9);
    }

    #[test]
    fn direction_of_interest_replaces_reported_rate() {
        let catalog = FuelModelCatalog::new();
        let mut inputs = no_wind_no_slope_inputs(1);
        inputs.wind_speed = MilesPerHour(5.0);
        let forward = calculate_forward_spread_rate(&inputs, &catalog);

        inputs.direction_of_interest = Some(Degrees(
            forward.direction_of_max_spread().0 + 180.0,
        ));
        let backing = calculate_forward_spread_rate(&inputs, &catalog);
        let expected = forward.forward_spread_rate().0 * (1.0 - forward.eccentricity())
            / (1.0 + forward.eccentricity());
        assert!((backing.forward_spread_rate().0 - expected).abs() / expected < 1e-6);
    }
}
