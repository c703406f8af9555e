//! The immutable, per-fuel-model parameter bundle (component A's payload).
//!
//! # References
//! - Rothermel, R.C. (1972). "A mathematical model for predicting fire spread
//!   in wildland fuels." USDA Forest Service Research Paper INT-115.
//! - Anderson, H.E. (1982). "Aids to determining fuel models for estimating
//!   fire behavior." USDA Forest Service General Technical Report INT-122
//!   (the original 13 fuel models).
//! - Scott, J.H.; Burgan, R.E. (2005). "Standard fire behavior fuel models: a
//!   comprensive set for use with Rothermel's surface fire spread model."
//!   USDA Forest Service General Technical Report RMRS-GTR-153 (the 40 set).

use serde::{Deserialize, Serialize};

/// An immutable physical parameter bundle describing one vegetation type.
///
/// Loads, SAVRs, and fuelbed depth are plain `f64` rather than newtype units
/// here: the fields are read in bulk by the fuelbed-intermediates aggregation
/// (component C), where the per-size-class loop multiplies, sums, and
/// exponentiates across all of them together, and the newtype wrappers would
/// add conversion noise to every line without preventing any real mixup (a
/// `FuelModel`'s fields never get compared against a different fuel model's
/// fields of a different unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelModel {
    pub number: u16,
    pub code: String,
    pub name: String,

    /// Fuelbed depth, ft.
    pub fuelbed_depth: f64,
    /// Dead fuel moisture of extinction, fraction.
    pub moisture_of_extinction_dead: f64,
    /// Dead fuel heat of combustion, Btu/lb.
    pub heat_of_combustion_dead: f64,
    /// Live fuel heat of combustion, Btu/lb.
    pub heat_of_combustion_live: f64,

    /// Dead 1-h fuel loading, lb/ft².
    pub load_one_hour: f64,
    /// Dead 10-h fuel loading, lb/ft².
    pub load_ten_hour: f64,
    /// Dead 100-h fuel loading, lb/ft².
    pub load_hundred_hour: f64,
    /// Live herbaceous fuel loading, lb/ft².
    pub load_live_herbaceous: f64,
    /// Live woody fuel loading, lb/ft².
    pub load_live_woody: f64,

    /// Dead 1-h SAVR, ft²/ft³.
    pub savr_one_hour: f64,
    /// Live herbaceous SAVR, ft²/ft³.
    pub savr_live_herbaceous: f64,
    /// Live woody SAVR, ft²/ft³.
    pub savr_live_woody: f64,

    /// Dynamic fuel model: live herbaceous load transfers to a synthetic
    /// dead class as herbaceous moisture drops (§4.C).
    pub is_dynamic: bool,
    /// Standard-catalog slot: protected from `setCustom`/`clearCustom`.
    pub is_reserved: bool,
    /// Whether this slot has been fully populated.
    pub is_defined: bool,
}

impl Default for FuelModel {
    fn default() -> Self {
        FuelModel {
            number: 0,
            code: String::new(),
            name: String::new(),
            fuelbed_depth: 0.0,
            moisture_of_extinction_dead: 0.0,
            heat_of_combustion_dead: 0.0,
            heat_of_combustion_live: 0.0,
            load_one_hour: 0.0,
            load_ten_hour: 0.0,
            load_hundred_hour: 0.0,
            load_live_herbaceous: 0.0,
            load_live_woody: 0.0,
            savr_one_hour: 0.0,
            savr_live_herbaceous: 0.0,
            savr_live_woody: 0.0,
            is_dynamic: false,
            is_reserved: false,
            is_defined: false,
        }
    }
}

impl FuelModel {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_defined(
        number: u16,
        code: &str,
        name: &str,
        fuelbed_depth: f64,
        moisture_of_extinction_dead: f64,
        heat_of_combustion_dead: f64,
        heat_of_combustion_live: f64,
        load_one_hour: f64,
        load_ten_hour: f64,
        load_hundred_hour: f64,
        load_live_herbaceous: f64,
        load_live_woody: f64,
        savr_one_hour: f64,
        savr_live_herbaceous: f64,
        savr_live_woody: f64,
        is_dynamic: bool,
        is_reserved: bool,
    ) -> Self {
        FuelModel {
            number,
            code: code.to_string(),
            name: name.to_string(),
            fuelbed_depth,
            moisture_of_extinction_dead,
            heat_of_combustion_dead,
            heat_of_combustion_live,
            load_one_hour,
            load_ten_hour,
            load_hundred_hour,
            load_live_herbaceous,
            load_live_woody,
            savr_one_hour,
            savr_live_herbaceous,
            savr_live_woody,
            is_dynamic,
            is_reserved,
            is_defined: true,
        }
    }

    /// Invariant check used in debug builds after catalog writes (§3).
    pub(crate) fn debug_check_invariants(&self) {
        if !self.is_defined {
            return;
        }
        debug_assert!(self.load_one_hour >= 0.0);
        debug_assert!(self.load_ten_hour >= 0.0);
        debug_assert!(self.load_hundred_hour >= 0.0);
        debug_assert!(self.load_live_herbaceous >= 0.0);
        debug_assert!(self.load_live_woody >= 0.0);
        debug_assert!(self.fuelbed_depth > 0.0);
        if self.load_one_hour + self.load_ten_hour + self.load_hundred_hour > 0.0 {
            debug_assert!(self.savr_one_hour > 0.0);
        }
        if self.load_live_herbaceous > 0.0 {
            debug_assert!(self.savr_live_herbaceous > 0.0);
        }
        if self.load_live_woody > 0.0 {
            debug_assert!(self.savr_live_woody > 0.0);
        }
    }
}
