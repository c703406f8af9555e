//! Surface fire spread prediction core.
//!
//! Implements the Rothermel (1972) surface fire spread model as used by
//! BehavePlus: a fuel model catalog (component A), a per-scenario input
//! surface (component B), fuelbed intermediates and reaction intensity
//! (components C–D), wind adjustment (component E), the forward spread
//! rate and fire ellipse orchestrator (component F), and two-fuel-model
//! blending (component G).
//!
//! Crown fire, spotting, and ignition probability are companion concerns
//! read from this crate's outputs by other modules; they are not
//! implemented here (see `SPEC_FULL.md` §C).

pub mod catalog;
pub mod core_types;
pub mod inputs;
pub mod physics;
pub mod standard_fuel_models;

pub use catalog::FuelModelCatalog;
pub use core_types::fuel_model::FuelModel;
pub use inputs::{
    MoistureInputs, OperatingMode, PalmettoGallberryInputs, SlopeInputMode, SurfaceInputs,
    TwoFuelModelsInputs, TwoFuelModelsMethod, WesternAspenInputs, WindAndSpreadAngleMode,
    WindHeightInputMode,
};
pub use physics::{calculate_forward_spread_rate, calculate_two_fuel_models_spread_rate, FireBehavior};
