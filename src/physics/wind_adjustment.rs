//! Wind adjustment factor (component E): reduces 20-ft wind speed to the
//! midflame height actually driving surface fire spread.
//!
//! # References
//! - Albini, F.A. (1976). "Estimating Wind Speeds for Predicting Wildland
//!   Fire Behavior." USDA Forest Service Research Paper INT-221 (the
//!   unsheltered formula).
//! - Albini, F.A.; Baughman, R.G. (1979). "Estimating Windspeeds for
//!   Predicting Wildland Fire Behavior." USDA Forest Service Research Paper
//!   INT-221 (the sheltered/under-canopy formula).
//! - Not present in the retrieved `original_source/` slice; transcribed
//!   from the published Albini formulas rather than the BehavePlus source
//!   (see DESIGN.md).

use crate::core_types::units::{Feet, Fraction};

/// The unsheltered midflame wind adjustment factor: open fuelbed, no
/// overstory canopy reducing the wind profile.
#[must_use]
pub fn unsheltered(fuelbed_depth: Feet) -> Fraction {
    if fuelbed_depth.0 <= 0.0 {
        return Fraction::ZERO;
    }
    let waf = 1.83 / ((20.0 + 0.36 * fuelbed_depth.0) / (0.13 * fuelbed_depth.0)).ln();
    Fraction::new_clamped(waf)
}

/// The sheltered midflame wind adjustment factor: wind is reduced first by
/// the canopy, then by the fuelbed underneath it.
///
/// `f = f_c·CR/3` is the fraction of canopy height the crowns actually
/// fill; `H' = h_c·(1 − f)` is the canopy-base height the wind profile
/// resets to beneath the crowns.
#[must_use]
pub fn sheltered(canopy_cover: Fraction, canopy_height: Feet, crown_ratio: Fraction) -> Fraction {
    if canopy_height.0 <= 0.0 {
        return Fraction::ZERO;
    }
    let f = crown_ratio.0 * canopy_cover.0 / 3.0;
    let crown_base_height = canopy_height.0 * (1.0 - f);
    if crown_base_height <= 0.0 {
        return Fraction::ZERO;
    }
    let waf = 0.555
        / ((f * canopy_height.0).sqrt()
            * ((20.0 + 0.36 * crown_base_height) / (0.13 * crown_base_height)).ln());
    Fraction::new_clamped(waf)
}

/// Select sheltered or unsheltered WAF based on whether the canopy is
/// dense enough to shelter the fuelbed (`f_c·CR > 0.05`, §4.E), unless the
/// caller has entered a wind adjustment factor directly.
#[must_use]
pub fn derive(
    user_supplied: Option<Fraction>,
    canopy_cover: Fraction,
    canopy_height: Feet,
    crown_ratio: Fraction,
    fuelbed_depth: Feet,
) -> Fraction {
    if let Some(waf) = user_supplied {
        return waf;
    }
    if canopy_cover.0 * crown_ratio.0 > 0.05 && canopy_height.0 > 0.0 {
        sheltered(canopy_cover, canopy_height, crown_ratio)
    } else {
        unsheltered(fuelbed_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsheltered_waf_is_bounded() {
        let waf = unsheltered(Feet(1.0));
        assert!(waf.0 > 0.0 && waf.0 <= 1.0);
    }

    #[test]
    fn zero_depth_is_zero_waf() {
        assert_eq!(unsheltered(Feet(0.0)), Fraction::ZERO);
    }

    #[test]
    fn user_supplied_waf_bypasses_derivation() {
        let waf = derive(Some(Fraction(0.9)), Fraction::ZERO, Feet(0.0), Fraction::ZERO, Feet(1.0));
        assert_eq!(waf, Fraction(0.9));
    }

    #[test]
    fn canopy_present_uses_sheltered_formula() {
        let waf = derive(None, Fraction(0.6), Feet(40.0), Fraction(0.5), Feet(1.0));
        let direct = sheltered(Fraction(0.6), Feet(40.0), Fraction(0.5));
        assert_eq!(waf, direct);
    }
}
