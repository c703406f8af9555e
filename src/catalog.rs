//! The fuel model catalog (component A): a read-mostly registry of
//! [`FuelModel`] records, seeded with the standard 13 and standard 40 sets at
//! construction and open to custom slots at any unreserved number.
//!
//! # References
//! - `examples/original_source/src/behave/fuelModelSet.h` (the
//!   `FuelModelSet`/`FuelModelRecord` declarations this module is grounded
//!   on: `setCustomFuelModel`, `clearCustomFuelModel`, `isFuelModelDefined`,
//!   the reserved-standard-slot protection).

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core_types::fuel_model::FuelModel;
use crate::standard_fuel_models::all_seed_rows;

/// Read-mostly registry mapping a fuel model number to its parameter bundle.
///
/// Standard-catalog numbers (1–13, 101–204) are seeded at construction and
/// marked `is_reserved`; [`FuelModelCatalog::set_custom`] and
/// [`FuelModelCatalog::clear_custom`] refuse to touch them, mirroring
/// `FuelModelSet::setCustomFuelModel` in the source, which silently no-ops on
/// a reserved number rather than overwriting a standard definition.
#[derive(Debug, Clone, Default)]
pub struct FuelModelCatalog {
    models: FxHashMap<u16, FuelModel>,
}

impl FuelModelCatalog {
    /// Build a catalog pre-seeded with the standard 13 (Anderson 1982) and
    /// standard 40 (Scott & Burgan 2005) fuel models.
    #[must_use]
    pub fn new() -> Self {
        let mut models = FxHashMap::default();
        for row in all_seed_rows() {
            let fm = row.into_fuel_model();
            fm.debug_check_invariants();
            models.insert(fm.number, fm);
        }
        debug!(count = models.len(), "fuel model catalog seeded");
        FuelModelCatalog { models }
    }

    /// An empty catalog with no standard seed rows. Not used by normal
    /// construction; exposed for callers that want to define an entirely
    /// custom number space.
    #[must_use]
    pub fn empty() -> Self {
        FuelModelCatalog {
            models: FxHashMap::default(),
        }
    }

    /// Whether `number` has a fully populated definition.
    #[must_use]
    pub fn is_fuel_model_defined(&self, number: u16) -> bool {
        self.models.get(&number).is_some_and(|m| m.is_defined)
    }

    /// Whether `number` is a protected standard-catalog slot.
    #[must_use]
    pub fn is_reserved(&self, number: u16) -> bool {
        self.models.get(&number).is_some_and(|m| m.is_reserved)
    }

    /// Look up a fuel model by number.
    #[must_use]
    pub fn get(&self, number: u16) -> Option<&FuelModel> {
        self.models.get(&number)
    }

    /// Define or replace a custom (non-reserved) fuel model.
    ///
    /// Returns `false` and leaves the catalog unchanged if `number` names a
    /// reserved standard slot, matching `setCustomFuelModel`'s refusal to
    /// clobber a standard definition.
    pub fn set_custom(&mut self, model: FuelModel) -> bool {
        if self.is_reserved(model.number) {
            warn!(
                number = model.number,
                "refusing to overwrite reserved fuel model slot"
            );
            return false;
        }
        model.debug_check_invariants();
        self.models.insert(model.number, model);
        true
    }

    /// Remove a custom fuel model definition, if any. Reserved slots are
    /// left untouched and this returns `false` for them.
    pub fn clear_custom(&mut self, number: u16) -> bool {
        if self.is_reserved(number) {
            warn!(number, "refusing to clear reserved fuel model slot");
            return false;
        }
        self.models.remove(&number).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_standard_models() {
        let catalog = FuelModelCatalog::new();
        assert!(catalog.is_fuel_model_defined(1));
        assert!(catalog.is_fuel_model_defined(204));
        assert!(!catalog.is_fuel_model_defined(9999));
    }

    #[test]
    fn standard_slots_are_reserved() {
        let catalog = FuelModelCatalog::new();
        assert!(catalog.is_reserved(1));
        assert!(catalog.is_reserved(101));
    }

    #[test]
    fn custom_model_round_trips() {
        let mut catalog = FuelModelCatalog::new();
        let custom = FuelModel::new_defined(
            500, "CUST1", "Custom test fuel", 1.5, 0.25, 8000.0, 8000.0, 0.10, 0.05, 0.02, 0.0,
            0.0, 2000.0, 0.0, 0.0, false, false,
        );
        assert!(catalog.set_custom(custom.clone()));
        assert_eq!(catalog.get(500), Some(&custom));
        assert!(catalog.clear_custom(500));
        assert!(!catalog.is_fuel_model_defined(500));
    }

    #[test]
    fn cannot_overwrite_or_clear_reserved_slot() {
        let mut catalog = FuelModelCatalog::new();
        let attempt = FuelModel::new_defined(
            1, "BOGUS", "bogus", 1.0, 0.12, 8000.0, 8000.0, 0.034, 0.0, 0.0, 0.0, 0.0, 3500.0,
            0.0, 0.0, false, false,
        );
        assert!(!catalog.set_custom(attempt));
        assert!(!catalog.clear_custom(1));
        assert!(catalog.is_fuel_model_defined(1));
    }
}
