//! Fixed-point quantities with two fractional digits.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// A non-negative quantity counted in hundredths (`53.38` is stored as `5338`).
///
/// Weights, costs and capacities are all written with at most two
/// fractional digits, so storing them as integer hundredths makes sums and
/// comparisons exact.
///
/// # Examples
///
/// ```
/// use packer_core::Hundredths;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let weight = Hundredths::from_decimal(Decimal::from_str("53.38").unwrap()).unwrap();
/// assert_eq!(weight.raw(), 5338);
/// assert_eq!(weight.to_string(), "53.38");
///
/// // Three fractional digits cannot be represented.
/// assert!(Hundredths::from_decimal(Decimal::from_str("1.005").unwrap()).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hundredths(u64);

impl Hundredths {
    /// The zero quantity.
    pub const ZERO: Hundredths = Hundredths(0);

    /// Number of hundredths in one whole unit.
    pub const SCALE: u64 = 100;

    /// Creates a quantity from a raw count of hundredths.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Hundredths(raw)
    }

    /// Creates a quantity from a whole number of units.
    #[inline]
    pub const fn from_units(units: u64) -> Self {
        Hundredths(units * Self::SCALE)
    }

    /// Converts a decimal into hundredths.
    ///
    /// Returns `None` for negative values, values with more than two
    /// significant fractional digits, and values too large to represent.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return None;
        }
        let scaled = value.checked_mul(Decimal::ONE_HUNDRED)?;
        if !scaled.fract().is_zero() {
            return None;
        }
        scaled.to_u64().map(Hundredths)
    }

    /// Returns the raw count of hundredths.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns this quantity as a decimal with scale 2.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }

    #[inline]
    pub fn checked_sub(self, other: Hundredths) -> Option<Hundredths> {
        self.0.checked_sub(other.0).map(Hundredths)
    }
}

impl Add for Hundredths {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Hundredths(self.0 + other.0)
    }
}

impl AddAssign for Hundredths {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Hundredths {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Hundredths::ZERO, Add::add)
    }
}

impl fmt::Debug for Hundredths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hundredths({})", self)
    }
}

impl fmt::Display for Hundredths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / Self::SCALE, self.0 % Self::SCALE)
    }
}
