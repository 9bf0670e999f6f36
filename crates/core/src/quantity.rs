//! Mass quantities used for stock levels and recipe lines.

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A mass in kilograms.
///
/// Stock levels are plain floating point values and may be negative: nothing
/// in the domain clamps them.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl ValueObject for Kilograms {}

impl Kilograms {
    pub const ZERO: Kilograms = Kilograms(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Scale a per-unit quantity by a (possibly zero or negative) unit count.
    pub fn times(self, units: i64) -> Self {
        Self(self.0 * units as f64)
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Compare within an absolute tolerance.
    pub fn approx_eq(self, other: Kilograms, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl core::fmt::Display for Kilograms {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} kg", self.0)
    }
}

impl Add for Kilograms {
    type Output = Kilograms;

    fn add(self, rhs: Kilograms) -> Kilograms {
        Kilograms(self.0 + rhs.0)
    }
}

impl AddAssign for Kilograms {
    fn add_assign(&mut self, rhs: Kilograms) {
        self.0 += rhs.0;
    }
}

impl Sub for Kilograms {
    type Output = Kilograms;

    fn sub(self, rhs: Kilograms) -> Kilograms {
        Kilograms(self.0 - rhs.0)
    }
}

impl SubAssign for Kilograms {
    fn sub_assign(&mut self, rhs: Kilograms) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Kilograms {
    type Output = Kilograms;

    fn mul(self, units: i64) -> Kilograms {
        self.times(units)
    }
}
