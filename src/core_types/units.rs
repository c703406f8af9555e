//! Semantic unit types for the surface fire spread calculation chain.
//!
//! The Rothermel model chains roughly a dozen sub-formulas that each read and
//! write a different unit (feet, chains/hr, ft/min, mi/h, degrees, radians,
//! Btu variants). Mixing these up silently is the single easiest way to get a
//! "plausible but wrong" fire-behavior vector. Each type here wraps an `f64`
//! (not `f32` — the seed scenarios in the spec are checked to 1e-9 relative
//! tolerance after a dozen chained transcendental calls, which single
//! precision cannot reliably carry) and only exposes the conversions the
//! model actually performs.
//!
//! # Usage
//! ```
//! use surface_fire_spread::core_types::units::{FeetPerMinute, MilesPerHour};
//!
//! let mph = MilesPerHour(5.0);
//! let fpm: FeetPerMinute = mph.into();
//! assert!((fpm.0 - 440.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A feet-per-minute rate of spread (the model's native internal unit).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FeetPerMinute(pub f64);

impl FeetPerMinute {
    #[inline]
    pub fn to_chains_per_hour(self) -> ChainsPerHour {
        // 1 chain = 66 ft; ft/min * 60 min/hr / 66 ft/chain = ft/min * 10/11
        ChainsPerHour(self.0 * (10.0 / 11.0))
    }

    #[inline]
    pub fn to_miles_per_hour(self) -> MilesPerHour {
        MilesPerHour(self.0 / 88.0)
    }
}

impl fmt::Display for FeetPerMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} ft/min", self.0)
    }
}

/// Rate of spread in chains per hour — the spec's output unit for spread rate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ChainsPerHour(pub f64);

impl fmt::Display for ChainsPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} ch/hr", self.0)
    }
}

/// Wind/effective-wind speed in miles per hour.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct MilesPerHour(pub f64);

impl MilesPerHour {
    #[inline]
    pub fn to_feet_per_minute(self) -> FeetPerMinute {
        FeetPerMinute(self.0 * 88.0)
    }
}

impl From<MilesPerHour> for FeetPerMinute {
    fn from(v: MilesPerHour) -> FeetPerMinute {
        v.to_feet_per_minute()
    }
}

impl fmt::Display for MilesPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mi/h", self.0)
    }
}

/// An angle in degrees. Fire-spread azimuths and wind directions are always
/// carried in degrees at the API boundary; radians only appear transiently
/// inside a trig call.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    /// Normalize into `[0, 360)`.
    #[inline]
    pub fn normalized(self) -> Degrees {
        Degrees(self.0.rem_euclid(360.0))
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Radians {
        d.to_radians()
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// An angle in radians, used only at trig call sites.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl Radians {
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.0.tan()
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Degrees {
        r.to_degrees()
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} rad", self.0)
    }
}

/// A fraction in `[0, 1]` — moisture content, coverage, packing ratio, etc.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Fraction(pub f64);

impl Fraction {
    pub const ZERO: Fraction = Fraction(0.0);
    pub const ONE: Fraction = Fraction(1.0);

    #[inline]
    pub fn new_clamped(value: f64) -> Self {
        Fraction(value.clamp(0.0, 1.0))
    }
}

impl Add for Fraction {
    type Output = Fraction;
    fn add(self, rhs: Fraction) -> Fraction {
        Fraction(self.0 + rhs.0)
    }
}

impl Mul<f64> for Fraction {
    type Output = f64;
    fn mul(self, rhs: f64) -> f64 {
        self.0 * rhs
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// Heat content / heat of combustion, Btu per pound.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BtuPerLb(pub f64);

impl fmt::Display for BtuPerLb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} Btu/lb", self.0)
    }
}

/// Reaction intensity, Btu per square foot per minute.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BtuPerSqFtPerMin(pub f64);

impl Mul<Minutes> for BtuPerSqFtPerMin {
    type Output = BtuPerSqFt;
    fn mul(self, rhs: Minutes) -> BtuPerSqFt {
        BtuPerSqFt(self.0 * rhs.0)
    }
}

impl fmt::Display for BtuPerSqFtPerMin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} Btu/ft²/min", self.0)
    }
}

/// Heat per unit area, Btu per square foot.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BtuPerSqFt(pub f64);

impl fmt::Display for BtuPerSqFt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} Btu/ft²", self.0)
    }
}

/// Fireline intensity, Btu per foot of fireline per second (Byram's I).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BtuPerFtPerSec(pub f64);

impl fmt::Display for BtuPerFtPerSec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} Btu/ft/s", self.0)
    }
}

/// Residence time, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Minutes(pub f64);

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} min", self.0)
    }
}

/// Oven-dry fuel loading, pounds per square foot.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PoundsPerSqFt(pub f64);

impl Add for PoundsPerSqFt {
    type Output = PoundsPerSqFt;
    fn add(self, rhs: PoundsPerSqFt) -> PoundsPerSqFt {
        PoundsPerSqFt(self.0 + rhs.0)
    }
}

impl Div<Feet> for PoundsPerSqFt {
    type Output = PoundsPerCubicFt;
    fn div(self, rhs: Feet) -> PoundsPerCubicFt {
        PoundsPerCubicFt(self.0 / rhs.0)
    }
}

impl fmt::Display for PoundsPerSqFt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} lb/ft²", self.0)
    }
}

/// Fuelbed bulk density, pounds per cubic foot.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct PoundsPerCubicFt(pub f64);

impl PoundsPerCubicFt {
    /// Oven-dry cellulose particle density, the Rothermel model's fixed constant.
    pub const PARTICLE_DENSITY: PoundsPerCubicFt = PoundsPerCubicFt(32.0);
}

impl fmt::Display for PoundsPerCubicFt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} lb/ft³", self.0)
    }
}

/// Surface-area-to-volume ratio, square feet per cubic foot (σ).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct SquareFeetPerCubicFoot(pub f64);

impl fmt::Display for SquareFeetPerCubicFoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} ft²/ft³", self.0)
    }
}

/// A length in feet (fuelbed depth, canopy height).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Feet(pub f64);

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ft", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mph_to_fpm() {
        let mph = MilesPerHour(5.0);
        let fpm: FeetPerMinute = mph.into();
        assert!((fpm.0 - 440.0).abs() < 1e-9);
    }

    #[test]
    fn fpm_to_chains_per_hour() {
        // 66 ft/min == 1 chain/min == 60 chains/hr
        let fpm = FeetPerMinute(66.0);
        let cph = fpm.to_chains_per_hour();
        assert!((cph.0 - 60.0).abs() < 1e-9);
    }

    #[test]
    fn degrees_normalize_wraps_negative_and_over() {
        assert!((Degrees(-10.0).normalized().0 - 350.0).abs() < 1e-9);
        assert!((Degrees(370.0).normalized().0 - 10.0).abs() < 1e-9);
        assert!((Degrees(10.0).normalized().0 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn fraction_clamps() {
        assert_eq!(Fraction::new_clamped(1.5).0, 1.0);
        assert_eq!(Fraction::new_clamped(-0.5).0, 0.0);
    }
}
