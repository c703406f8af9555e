//! The scenario input surface (component B): a mutable, per-run value object
//! describing the fuelbed, moisture, wind, slope, and aspect a caller wants
//! a forward spread rate for.
//!
//! # References
//! - `examples/original_source/src/behave/surfaceInputs.cpp` (field
//!   semantics, the reset-then-activate update order, wind/slope/aspect
//!   frame conversions).

use serde::{Deserialize, Serialize};

use crate::core_types::units::{Degrees, Feet, Fraction, MilesPerHour};

/// Dead and live fuel moisture fractions for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MoistureInputs {
    pub one_hour: Fraction,
    pub ten_hour: Fraction,
    pub hundred_hour: Fraction,
    pub live_herbaceous: Fraction,
    pub live_woody: Fraction,
}

/// Height at which wind speed was measured or derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindHeightInputMode {
    TwentyFoot,
    TenMeter,
    DirectMidflame,
}

impl Default for WindHeightInputMode {
    fn default() -> Self {
        WindHeightInputMode::TwentyFoot
    }
}

/// Whether slope steepness was entered as a percent rise-over-run or a
/// degree angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlopeInputMode {
    Percent,
    Degrees,
}

impl Default for SlopeInputMode {
    fn default() -> Self {
        SlopeInputMode::Percent
    }
}

/// Whether wind direction and the caller's requested direction of interest
/// are expressed relative to true north or relative to the upslope
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindAndSpreadAngleMode {
    RelativeToUpslope,
    RelativeToNorth,
}

impl Default for WindAndSpreadAngleMode {
    fn default() -> Self {
        WindAndSpreadAngleMode::RelativeToUpslope
    }
}

/// The combination method for a two-fuel-model run (component G).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TwoFuelModelsMethod {
    NoMethod,
    Arithmetic,
    Harmonic,
    TwoDimensional,
}

impl Default for TwoFuelModelsMethod {
    fn default() -> Self {
        TwoFuelModelsMethod::NoMethod
    }
}

/// A caller-supplied coverage fraction of the first fuel model in a
/// two-fuel-model blend; the second fuel model covers the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoFuelModelsInputs {
    pub second_fuel_model_number: u16,
    pub first_fuel_model_coverage: Fraction,
    pub method: TwoFuelModelsMethod,
}

/// Payload for the palmetto-gallberry operating mode. The core stores and
/// round-trips these fields; computing PG-specific fuel loads from them is
/// the responsibility of a companion module outside this crate (§1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PalmettoGallberryInputs {
    pub age_of_rough_years: f64,
    pub height_of_understory: Feet,
    pub palmetto_coverage: Fraction,
    pub overstory_basal_area_sq_ft_per_acre: f64,
}

/// Payload for the western-aspen operating mode. As with palmetto-gallberry,
/// the aspen-specific fuel-load computation lives outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WesternAspenInputs {
    pub aspen_fuel_model_number: u16,
    pub aspen_curing_level: Fraction,
    pub aspen_fire_severity: Fraction,
}

/// The scenario's mutually exclusive fuel-dynamics mode. Carried as a sum
/// type rather than boolean flags (Design Note 9): only one mode's payload
/// can be active for a given `SurfaceInputs` at a time, and activating a new
/// mode always replaces the whole variant rather than leaving stale fields
/// from a previous mode lying around.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OperatingMode {
    Standard,
    PalmettoGallberry(PalmettoGallberryInputs),
    WesternAspen(WesternAspenInputs),
}

impl Default for OperatingMode {
    fn default() -> Self {
        OperatingMode::Standard
    }
}

/// A single scenario: one fuelbed, one moisture/wind/slope/aspect
/// configuration, ready to hand to the calculator (component F) alongside a
/// [`crate::catalog::FuelModelCatalog`].
///
/// `SurfaceInputs` is a plain value object, not an owner of any catalog
/// data: it stores a fuel model *number*, and the calculator resolves that
/// number against the catalog at call time. This mirrors Design Note 9's
/// "pure calculator, stateful-by-value scenario" split.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceInputs {
    pub fuel_model_number: u16,
    pub operating_mode: OperatingMode,
    pub two_fuel_models: Option<TwoFuelModelsInputs>,

    pub moisture: MoistureInputs,

    pub wind_speed: MilesPerHour,
    pub wind_height_input_mode: WindHeightInputMode,
    pub wind_direction: Degrees,
    pub wind_and_spread_angle_mode: WindAndSpreadAngleMode,
    /// User-entered wind adjustment factor, when the caller supplies one
    /// directly instead of asking the calculator to derive it from canopy
    /// cover and height (§4.E). `None` means "not entered" — the
    /// non-negated sentinel check per SPEC_FULL §B.1.
    pub user_wind_adjustment_factor: Option<Fraction>,

    pub slope_input_mode: SlopeInputMode,
    /// Slope steepness, percent or degrees per `slope_input_mode`.
    pub slope: f64,
    /// Compass direction the slope faces (downhill direction), degrees
    /// from true north.
    pub aspect: Degrees,

    pub canopy_cover: Fraction,
    pub canopy_height: Feet,
    pub crown_ratio: Fraction,

    /// Direction of interest for `calculate_spread_rate_at_vector`, in
    /// whichever frame `wind_and_spread_angle_mode` names. `None` matches
    /// the source's `directionOfInterest = -1.0` sentinel for "use the
    /// direction of maximum spread."
    pub direction_of_interest: Option<Degrees>,
}

impl SurfaceInputs {
    #[must_use]
    pub fn new() -> Self {
        SurfaceInputs::default()
    }

    /// Reset to defaults, then populate the fields every scenario needs
    /// regardless of operating mode. Every `set_to_*` constructor below
    /// calls this first, matching `updateSurfaceInputs`'s
    /// reset-then-layer-extras order (SPEC_FULL §B.4): activating a new
    /// mode can never leave a stale field from a previous mode's payload.
    fn reset_base(
        &mut self,
        fuel_model_number: u16,
        moisture: MoistureInputs,
        wind_speed: MilesPerHour,
        wind_height_input_mode: WindHeightInputMode,
        wind_direction: Degrees,
        wind_and_spread_angle_mode: WindAndSpreadAngleMode,
        slope_input_mode: SlopeInputMode,
        slope: f64,
        aspect: Degrees,
        canopy_cover: Fraction,
        canopy_height: Feet,
        crown_ratio: Fraction,
    ) {
        *self = SurfaceInputs {
            fuel_model_number,
            operating_mode: OperatingMode::Standard,
            two_fuel_models: None,
            moisture,
            wind_speed,
            wind_height_input_mode,
            wind_direction: wind_direction.normalized(),
            wind_and_spread_angle_mode,
            user_wind_adjustment_factor: None,
            slope_input_mode,
            slope,
            aspect: aspect.normalized(),
            canopy_cover,
            canopy_height,
            crown_ratio,
            direction_of_interest: None,
        };
    }

    /// Activate the plain standard-fuel-model scenario.
    #[allow(clippy::too_many_arguments)]
    pub fn set_to_standard(
        &mut self,
        fuel_model_number: u16,
        moisture: MoistureInputs,
        wind_speed: MilesPerHour,
        wind_height_input_mode: WindHeightInputMode,
        wind_direction: Degrees,
        wind_and_spread_angle_mode: WindAndSpreadAngleMode,
        slope_input_mode: SlopeInputMode,
        slope: f64,
        aspect: Degrees,
        canopy_cover: Fraction,
        canopy_height: Feet,
        crown_ratio: Fraction,
    ) {
        self.reset_base(
            fuel_model_number,
            moisture,
            wind_speed,
            wind_height_input_mode,
            wind_direction,
            wind_and_spread_angle_mode,
            slope_input_mode,
            slope,
            aspect,
            canopy_cover,
            canopy_height,
            crown_ratio,
        );
    }

    /// Activate a two-fuel-model scenario (component G).
    #[allow(clippy::too_many_arguments)]
    pub fn set_to_two_fuel_models(
        &mut self,
        first_fuel_model_number: u16,
        two_fuel_models: TwoFuelModelsInputs,
        moisture: MoistureInputs,
        wind_speed: MilesPerHour,
        wind_height_input_mode: WindHeightInputMode,
        wind_direction: Degrees,
        wind_and_spread_angle_mode: WindAndSpreadAngleMode,
        slope_input_mode: SlopeInputMode,
        slope: f64,
        aspect: Degrees,
        canopy_cover: Fraction,
        canopy_height: Feet,
        crown_ratio: Fraction,
    ) {
        self.reset_base(
            first_fuel_model_number,
            moisture,
            wind_speed,
            wind_height_input_mode,
            wind_direction,
            wind_and_spread_angle_mode,
            slope_input_mode,
            slope,
            aspect,
            canopy_cover,
            canopy_height,
            crown_ratio,
        );
        self.two_fuel_models = Some(two_fuel_models);
    }

    /// Activate the palmetto-gallberry operating mode.
    #[allow(clippy::too_many_arguments)]
    pub fn set_to_palmetto_gallberry(
        &mut self,
        fuel_model_number: u16,
        payload: PalmettoGallberryInputs,
        moisture: MoistureInputs,
        wind_speed: MilesPerHour,
        wind_height_input_mode: WindHeightInputMode,
        wind_direction: Degrees,
        wind_and_spread_angle_mode: WindAndSpreadAngleMode,
        slope_input_mode: SlopeInputMode,
        slope: f64,
        aspect: Degrees,
        canopy_cover: Fraction,
        canopy_height: Feet,
        crown_ratio: Fraction,
    ) {
        self.reset_base(
            fuel_model_number,
            moisture,
            wind_speed,
            wind_height_input_mode,
            wind_direction,
            wind_and_spread_angle_mode,
            slope_input_mode,
            slope,
            aspect,
            canopy_cover,
            canopy_height,
            crown_ratio,
        );
        self.operating_mode = OperatingMode::PalmettoGallberry(payload);
    }

    /// Activate the western-aspen operating mode.
    #[allow(clippy::too_many_arguments)]
    pub fn set_to_western_aspen(
        &mut self,
        fuel_model_number: u16,
        payload: WesternAspenInputs,
        moisture: MoistureInputs,
        wind_speed: MilesPerHour,
        wind_height_input_mode: WindHeightInputMode,
        wind_direction: Degrees,
        wind_and_spread_angle_mode: WindAndSpreadAngleMode,
        slope_input_mode: SlopeInputMode,
        slope: f64,
        aspect: Degrees,
        canopy_cover: Fraction,
        canopy_height: Feet,
        crown_ratio: Fraction,
    ) {
        self.reset_base(
            fuel_model_number,
            moisture,
            wind_speed,
            wind_height_input_mode,
            wind_direction,
            wind_and_spread_angle_mode,
            slope_input_mode,
            slope,
            aspect,
            canopy_cover,
            canopy_height,
            crown_ratio,
        );
        self.operating_mode = OperatingMode::WesternAspen(payload);
    }

    /// Record a caller-supplied wind adjustment factor, bypassing component
    /// E's canopy-derived calculation. A straight copy, never negated
    /// (SPEC_FULL §B.1 — the source's copy-constructor sign bug is not
    /// reproduced).
    pub fn set_user_wind_adjustment_factor(&mut self, waf: Fraction) {
        self.user_wind_adjustment_factor = Some(waf);
    }

    pub fn clear_user_wind_adjustment_factor(&mut self) {
        self.user_wind_adjustment_factor = None;
    }

    #[must_use]
    pub fn has_user_entered_wind_adjustment_factor(&self) -> bool {
        self.user_wind_adjustment_factor.is_some()
    }

    /// Slope angle, converted to degrees regardless of `slope_input_mode`.
    #[must_use]
    pub fn slope_as_degrees(&self) -> Degrees {
        match self.slope_input_mode {
            SlopeInputMode::Degrees => Degrees(self.slope),
            SlopeInputMode::Percent => Degrees((self.slope / 100.0).atan().to_degrees()),
        }
    }

    /// The upslope compass direction: the slope faces downhill along
    /// `aspect`, so upslope runs opposite it.
    #[must_use]
    pub fn upslope_direction(&self) -> Degrees {
        (self.aspect + Degrees(180.0)).normalized()
    }

    /// Convert a direction-of-spread angle (direction of maximum spread, or
    /// a caller's direction of interest) given in whichever frame
    /// `wind_and_spread_angle_mode` names into the upslope-relative frame
    /// the spread calculation uses internally.
    ///
    /// This is *not* the same conversion the wind direction uses: a spread
    /// direction is measured clockwise from the direction the fire travels
    /// under slope alone (`aspect + 180`, since `aspect` is the downhill
    /// compass direction the slope faces), so converting it to/from
    /// north-relative shifts by `aspect + 180`
    /// (`examples/original_source/src/surfaceFireSpread.cpp`,
    /// `convertDirectionOfSpreadToRelativeToNorth` and the
    /// `directionOfInterest -= slopeAspect + 180` line in
    /// `calculateSpreadRateAtVector`).
    #[must_use]
    pub fn to_upslope_relative(&self, angle: Degrees) -> Degrees {
        match self.wind_and_spread_angle_mode {
            WindAndSpreadAngleMode::RelativeToUpslope => angle.normalized(),
            WindAndSpreadAngleMode::RelativeToNorth => (angle - self.upslope_direction()).normalized(),
        }
    }

    /// Convert an upslope-relative spread-direction angle back into
    /// whichever frame `wind_and_spread_angle_mode` names, for reporting
    /// results. The inverse of [`Self::to_upslope_relative`].
    #[must_use]
    pub fn from_upslope_relative(&self, angle: Degrees) -> Degrees {
        match self.wind_and_spread_angle_mode {
            WindAndSpreadAngleMode::RelativeToUpslope => angle.normalized(),
            WindAndSpreadAngleMode::RelativeToNorth => (angle + self.upslope_direction()).normalized(),
        }
    }

    /// Wind direction, converted into the upslope-relative frame the spread
    /// calculation uses internally.
    ///
    /// Wind direction uses a *different* north-relative conversion than a
    /// spread direction does: it shifts by `aspect` alone, not
    /// `aspect + 180`
    /// (`examples/original_source/src/behave/surfaceInputs.cpp`,
    /// `convertWindToUpslope`). Reusing [`Self::to_upslope_relative`] here
    /// would silently apply the wrong shift whenever a scenario is in the
    /// north-relative frame.
    #[must_use]
    pub fn wind_direction_relative_to_upslope(&self) -> Degrees {
        match self.wind_and_spread_angle_mode {
            WindAndSpreadAngleMode::RelativeToUpslope => self.wind_direction.normalized(),
            WindAndSpreadAngleMode::RelativeToNorth => (self.wind_direction - self.aspect).normalized(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_then_activate_clears_previous_mode() {
        let mut inputs = SurfaceInputs::new();
        inputs.set_to_palmetto_gallberry(
            7,
            PalmettoGallberryInputs {
                age_of_rough_years: 10.0,
                height_of_understory: Feet(3.0),
                palmetto_coverage: Fraction(0.5),
                overstory_basal_area_sq_ft_per_acre: 80.0,
            },
            MoistureInputs::default(),
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
        assert!(matches!(inputs.operating_mode, OperatingMode::PalmettoGallberry(_)));

        inputs.set_to_standard(
            1,
            MoistureInputs::default(),
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
        assert_eq!(inputs.operating_mode, OperatingMode::Standard);
    }

    #[test]
    fn slope_percent_converts_to_degrees() {
        let mut inputs = SurfaceInputs::new();
        inputs.slope_input_mode = SlopeInputMode::Percent;
        inputs.slope = 100.0;
        assert!((inputs.slope_as_degrees().0 - 45.0).abs() < 1e-9);
    }

    #[test]
    fn wind_direction_relative_to_north_subtracts_aspect_not_upslope_direction() {
        // spec.md §8 seed scenario 4: aspect=90°, windDir=180° (north-relative)
        // must store as 90° upslope-relative. The wind conversion shifts by
        // `aspect` alone, unlike the spread-direction conversion which
        // shifts by `aspect + 180` (SPEC_FULL §B, original_source
        // `convertWindToUpslope` vs `convertDirectionOfSpreadToRelativeToNorth`).
        let mut inputs = SurfaceInputs::new();
        inputs.wind_and_spread_angle_mode = WindAndSpreadAngleMode::RelativeToNorth;
        inputs.aspect = Degrees(90.0);
        inputs.wind_direction = Degrees(180.0);
        assert!((inputs.wind_direction_relative_to_upslope().0 - 90.0).abs() < 1e-9);
    }

    #[test]
    fn wind_adjustment_factor_sentinel_round_trips_without_sign_flip() {
        let mut inputs = SurfaceInputs::new();
        assert!(!inputs.has_user_entered_wind_adjustment_factor());
        inputs.set_user_wind_adjustment_factor(Fraction(0.4));
        assert!(inputs.has_user_entered_wind_adjustment_factor());
        assert_eq!(inputs.user_wind_adjustment_factor, Some(Fraction(0.4)));
    }
}
