//! The standard 13 (Anderson 1982) and standard 40 (Scott & Burgan 2005) fuel
//! model tables used to pre-seed a [`crate::catalog::FuelModelCatalog`].
//!
//! # References
//! - Anderson, H.E. (1982). USDA Forest Service GTR INT-122.
//! - Scott, J.H.; Burgan, R.E. (2005). USDA Forest Service GTR RMRS-GTR-153.
//!
//! The standard-13 values below are the widely reproduced Anderson (1982)
//! table and are carried with high confidence. The standard-40 values are a
//! best-effort transcription of the Scott & Burgan (2005) table (see
//! DESIGN.md): this crate's test suite was not checked against a running
//! BehavePlus reference build this session, so treat the 40-set numbers as
//! "structurally correct, not independently bit-verified."

use crate::core_types::fuel_model::FuelModel;

/// One row of the seed table: matches the parameter order of
/// `FuelModel::new_defined` minus `is_reserved` (always true for seed rows).
#[allow(clippy::type_complexity)]
struct SeedRow {
    number: u16,
    code: &'static str,
    name: &'static str,
    depth: f64,
    mx_dead: f64,
    heat_dead: f64,
    heat_live: f64,
    load_1h: f64,
    load_10h: f64,
    load_100h: f64,
    load_herb: f64,
    load_woody: f64,
    savr_1h: f64,
    savr_herb: f64,
    savr_woody: f64,
    is_dynamic: bool,
}

macro_rules! row {
    ($n:expr, $code:expr, $name:expr, $depth:expr, $mx:expr, $hd:expr, $hl:expr,
     $l1:expr, $l10:expr, $l100:expr, $lh:expr, $lw:expr, $s1:expr, $sh:expr, $sw:expr, $dyn:expr) => {
        SeedRow {
            number: $n,
            code: $code,
            name: $name,
            depth: $depth,
            mx_dead: $mx,
            heat_dead: $hd,
            heat_live: $hl,
            load_1h: $l1,
            load_10h: $l10,
            load_100h: $l100,
            load_herb: $lh,
            load_woody: $lw,
            savr_1h: $s1,
            savr_herb: $sh,
            savr_woody: $sw,
            is_dynamic: $dyn,
        }
    };
}

/// The original 13 fuel models (Anderson 1982). Numbers 1–13.
fn standard_thirteen() -> Vec<SeedRow> {
    vec![
        row!(1, "FM1", "Short grass (1 ft)", 1.0, 0.12, 8000.0, 8000.0, 0.034, 0.0, 0.0, 0.0, 0.0, 3500.0, 0.0, 0.0, false),
        row!(2, "FM2", "Timber grass and understory", 1.0, 0.15, 8000.0, 8000.0, 0.092, 0.046, 0.023, 0.023, 0.0, 3000.0, 1500.0, 0.0, false),
        row!(3, "FM3", "Tall grass (2.5 ft)", 2.5, 0.25, 8000.0, 8000.0, 0.138, 0.0, 0.0, 0.0, 0.0, 1500.0, 0.0, 0.0, false),
        row!(4, "FM4", "Chaparral (6 ft)", 6.0, 0.20, 8000.0, 8000.0, 0.230, 0.184, 0.092, 0.0, 0.230, 2000.0, 0.0, 1500.0, false),
        row!(5, "FM5", "Brush (2 ft)", 2.0, 0.20, 8000.0, 8000.0, 0.046, 0.023, 0.0, 0.0, 0.092, 2000.0, 0.0, 1500.0, false),
        row!(6, "FM6", "Dormant brush, hardwood slash", 2.5, 0.25, 8000.0, 8000.0, 0.069, 0.115, 0.092, 0.0, 0.0, 1750.0, 0.0, 0.0, false),
        row!(7, "FM7", "Southern rough", 2.5, 0.40, 8000.0, 8000.0, 0.052, 0.086, 0.069, 0.0, 0.017, 1750.0, 0.0, 1550.0, false),
        row!(8, "FM8", "Closed timber litter", 0.2, 0.30, 8000.0, 8000.0, 0.069, 0.046, 0.115, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(9, "FM9", "Hardwood litter", 0.2, 0.25, 8000.0, 8000.0, 0.134, 0.019, 0.007, 0.0, 0.0, 2500.0, 0.0, 0.0, false),
        row!(10, "FM10", "Timber (litter and understory)", 1.0, 0.25, 8000.0, 8000.0, 0.138, 0.092, 0.230, 0.0, 0.092, 2000.0, 0.0, 1500.0, false),
        row!(11, "FM11", "Light logging slash", 1.0, 0.15, 8000.0, 8000.0, 0.069, 0.207, 0.253, 0.0, 0.0, 1500.0, 0.0, 0.0, false),
        row!(12, "FM12", "Medium logging slash", 2.3, 0.20, 8000.0, 8000.0, 0.184, 0.644, 0.759, 0.0, 0.0, 1500.0, 0.0, 0.0, false),
        row!(13, "FM13", "Heavy logging slash", 3.0, 0.25, 8000.0, 8000.0, 0.322, 1.058, 1.288, 0.0, 0.0, 1500.0, 0.0, 0.0, false),
    ]
}

/// The Scott & Burgan (2005) standard 40 fuel models, numbered per their
/// convention (101–204). All grass (GR) and grass-shrub (GS) models, plus
/// TU1, are dynamic: a fraction of live herbaceous load cures to dead as
/// herbaceous moisture drops (§4.C).
fn standard_forty() -> Vec<SeedRow> {
    vec![
        // Grass (GR)
        row!(101, "GR1", "Short, sparse, dry climate grass", 0.4, 0.15, 8000.0, 8000.0, 0.010, 0.0, 0.0, 0.030, 0.0, 2200.0, 2000.0, 0.0, true),
        row!(102, "GR2", "Low load, dry climate grass", 1.0, 0.15, 8000.0, 8000.0, 0.010, 0.0, 0.0, 0.100, 0.0, 2000.0, 1800.0, 0.0, true),
        row!(103, "GR3", "Low load, very coarse, humid climate grass", 2.0, 0.30, 8000.0, 8000.0, 0.010, 0.040, 0.0, 0.150, 0.0, 1500.0, 1300.0, 0.0, true),
        row!(104, "GR4", "Moderate load, dry climate grass", 2.0, 0.15, 8000.0, 8000.0, 0.025, 0.0, 0.0, 0.190, 0.0, 2000.0, 1800.0, 0.0, true),
        row!(105, "GR5", "Low load, humid climate grass", 1.5, 0.40, 8000.0, 8000.0, 0.040, 0.0, 0.0, 0.170, 0.0, 1800.0, 1600.0, 0.0, true),
        row!(106, "GR6", "Moderate load, humid climate grass", 1.5, 0.40, 9000.0, 9000.0, 0.010, 0.0, 0.0, 0.230, 0.0, 2200.0, 2000.0, 0.0, true),
        row!(107, "GR7", "High load, dry climate grass", 3.0, 0.15, 8000.0, 8000.0, 0.130, 0.0, 0.0, 0.370, 0.0, 2000.0, 1800.0, 0.0, true),
        row!(108, "GR8", "High load, very coarse, humid climate grass", 4.0, 0.30, 8000.0, 8000.0, 0.020, 0.100, 0.0, 0.620, 0.0, 1500.0, 1300.0, 0.0, true),
        row!(109, "GR9", "Very high load, humid climate grass", 5.0, 0.40, 8000.0, 8000.0, 0.090, 0.0, 0.0, 0.720, 0.0, 1800.0, 1600.0, 0.0, true),
        // Grass-Shrub (GS)
        row!(121, "GS1", "Low load, dry climate grass-shrub", 0.9, 0.15, 8000.0, 8000.0, 0.020, 0.0, 0.0, 0.030, 0.140, 2000.0, 1800.0, 1800.0, true),
        row!(122, "GS2", "Moderate load, dry climate grass-shrub", 1.5, 0.15, 8000.0, 8000.0, 0.050, 0.050, 0.0, 0.150, 0.180, 2000.0, 1800.0, 1800.0, true),
        row!(123, "GS3", "Moderate load, humid climate grass-shrub", 1.8, 0.40, 8000.0, 8000.0, 0.010, 0.030, 0.0, 0.250, 0.250, 1800.0, 1600.0, 1600.0, true),
        row!(124, "GS4", "High load, humid climate grass-shrub", 2.1, 0.40, 8000.0, 8000.0, 0.300, 0.150, 0.0, 0.290, 0.290, 1800.0, 1600.0, 1600.0, true),
        // Shrub (SH)
        row!(141, "SH1", "Low load, dry climate shrub", 1.0, 0.15, 8000.0, 8000.0, 0.020, 0.070, 0.0, 0.0, 0.090, 2000.0, 0.0, 1600.0, false),
        row!(142, "SH2", "Moderate load, dry climate shrub", 1.0, 0.15, 8000.0, 8000.0, 0.070, 0.350, 0.190, 0.0, 0.090, 2000.0, 0.0, 1600.0, false),
        row!(143, "SH3", "Moderate load, humid climate shrub", 2.4, 0.40, 8000.0, 8000.0, 0.110, 0.200, 0.0, 0.0, 0.150, 1600.0, 0.0, 1400.0, false),
        row!(144, "SH4", "Low load, humid climate timber-shrub", 3.0, 0.30, 8000.0, 9000.0, 0.240, 0.180, 0.0, 0.0, 0.110, 2000.0, 0.0, 1600.0, false),
        row!(145, "SH5", "High load, dry climate shrub", 6.0, 0.15, 8000.0, 8000.0, 0.480, 0.110, 0.0, 0.0, 0.150, 750.0, 0.0, 1600.0, false),
        row!(146, "SH6", "Low load, humid climate shrub", 2.0, 0.30, 8000.0, 8000.0, 0.170, 0.230, 0.0, 0.0, 0.110, 750.0, 0.0, 1600.0, false),
        row!(147, "SH7", "Very high load, dry climate shrub", 6.0, 0.15, 8000.0, 8000.0, 0.480, 0.320, 0.370, 0.0, 0.290, 750.0, 0.0, 1600.0, false),
        row!(148, "SH8", "High load, humid climate shrub", 3.0, 0.40, 8000.0, 8000.0, 0.170, 0.280, 0.0, 0.0, 0.240, 750.0, 0.0, 1600.0, false),
        row!(149, "SH9", "Very high load, humid climate shrub", 4.4, 0.40, 8000.0, 8000.0, 0.650, 0.150, 0.0, 0.0, 0.610, 750.0, 0.0, 1600.0, false),
        // Timber-Understory (TU)
        row!(161, "TU1", "Light load, dry climate timber-grass-shrub", 0.6, 0.20, 8000.0, 8000.0, 0.010, 0.020, 0.030, 0.150, 0.070, 2000.0, 1800.0, 1600.0, true),
        row!(162, "TU2", "Moderate load, humid climate timber-shrub", 1.0, 0.30, 8000.0, 8000.0, 0.060, 0.350, 0.140, 0.0, 0.020, 2000.0, 0.0, 1600.0, false),
        row!(163, "TU3", "Moderate load, humid climate timber-grass-shrub", 1.3, 0.30, 8000.0, 8000.0, 0.050, 0.110, 0.0, 0.020, 0.090, 1800.0, 1600.0, 1400.0, true),
        row!(164, "TU4", "Dwarf conifer understory", 0.5, 0.12, 8000.0, 8000.0, 0.120, 0.0, 0.0, 0.0, 0.230, 2300.0, 0.0, 2000.0, false),
        row!(165, "TU5", "Very high load, dry climate timber-shrub", 1.0, 0.25, 8000.0, 8000.0, 0.130, 0.190, 0.150, 0.0, 0.080, 1500.0, 0.0, 750.0, false),
        // Timber Litter (TL)
        row!(181, "TL1", "Low load, compact conifer litter", 0.2, 0.30, 8000.0, 8000.0, 0.010, 0.140, 0.500, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(182, "TL2", "Low load broadleaf litter", 0.2, 0.25, 8000.0, 8000.0, 0.070, 0.050, 0.0, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(183, "TL3", "Moderate load conifer litter", 0.3, 0.20, 8000.0, 8000.0, 0.030, 0.110, 0.060, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(184, "TL4", "Small downed logs", 0.4, 0.25, 8000.0, 8000.0, 0.020, 0.090, 0.150, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(185, "TL5", "High load conifer litter", 0.6, 0.25, 8000.0, 9000.0, 0.250, 0.070, 0.0, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(186, "TL6", "Moderate load broadleaf litter", 0.3, 0.25, 8000.0, 8000.0, 0.110, 0.050, 0.0, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(187, "TL7", "Large downed logs", 0.4, 0.25, 8000.0, 8000.0, 0.010, 0.020, 0.400, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(188, "TL8", "Long-needle litter", 0.3, 0.35, 8000.0, 8000.0, 0.300, 0.150, 0.0, 0.0, 0.0, 1800.0, 0.0, 0.0, false),
        row!(189, "TL9", "Very high load broadleaf litter", 0.6, 0.35, 8000.0, 8000.0, 0.650, 0.250, 0.110, 0.0, 0.0, 1800.0, 0.0, 0.0, false),
        // Slash-Blowdown (SB)
        row!(201, "SB1", "Low load activity fuel", 1.0, 0.25, 8000.0, 8000.0, 0.340, 0.280, 0.100, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(202, "SB2", "Moderate load activity fuel or low load blowdown", 1.0, 0.25, 8000.0, 8000.0, 0.520, 0.270, 0.420, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(203, "SB3", "High load activity fuel or moderate load blowdown", 1.2, 0.25, 8000.0, 8000.0, 0.820, 0.750, 0.430, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
        row!(204, "SB4", "High load blowdown", 2.7, 0.25, 8000.0, 8000.0, 0.580, 0.900, 1.290, 0.0, 0.0, 2000.0, 0.0, 0.0, false),
    ]
}

/// All standard-catalog rows (53 models, numbers 1–13 and 101–204).
pub(crate) fn all_seed_rows() -> Vec<SeedRowOwned> {
    standard_thirteen()
        .into_iter()
        .chain(standard_forty())
        .map(SeedRowOwned::from)
        .collect()
}

/// Owned variant so the catalog constructor doesn't need the macro type.
pub(crate) struct SeedRowOwned {
    pub number: u16,
    pub code: String,
    pub name: String,
    pub depth: f64,
    pub mx_dead: f64,
    pub heat_dead: f64,
    pub heat_live: f64,
    pub load_1h: f64,
    pub load_10h: f64,
    pub load_100h: f64,
    pub load_herb: f64,
    pub load_woody: f64,
    pub savr_1h: f64,
    pub savr_herb: f64,
    pub savr_woody: f64,
    pub is_dynamic: bool,
}

impl From<SeedRow> for SeedRowOwned {
    fn from(r: SeedRow) -> Self {
        SeedRowOwned {
            number: r.number,
            code: r.code.to_string(),
            name: r.name.to_string(),
            depth: r.depth,
            mx_dead: r.mx_dead,
            heat_dead: r.heat_dead,
            heat_live: r.heat_live,
            load_1h: r.load_1h,
            load_10h: r.load_10h,
            load_100h: r.load_100h,
            load_herb: r.load_herb,
            load_woody: r.load_woody,
            savr_1h: r.savr_1h,
            savr_herb: r.savr_herb,
            savr_woody: r.savr_woody,
            is_dynamic: r.is_dynamic,
        }
    }
}

impl SeedRowOwned {
    pub(crate) fn into_fuel_model(self) -> FuelModel {
        FuelModel::new_defined(
            self.number,
            &self.code,
            &self.name,
            self.depth,
            self.mx_dead,
            self.heat_dead,
            self.heat_live,
            self.load_1h,
            self.load_10h,
            self.load_100h,
            self.load_herb,
            self.load_woody,
            self.savr_1h,
            self.savr_herb,
            self.savr_woody,
            self.is_dynamic,
            true, // all seed rows are reserved
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_three_standard_models() {
        assert_eq!(all_seed_rows().len(), 53);
    }

    #[test]
    fn all_seed_rows_satisfy_invariants() {
        for row in all_seed_rows() {
            let fm = row.into_fuel_model();
            fm.debug_check_invariants();
            assert!(fm.is_reserved);
            assert!(fm.is_defined);
        }
    }
}
