//! Double-double arithmetic for Julian Day bookkeeping.
//!
//! A [`DoubleDouble`] is the unevaluated sum `hi + lo` of two `f64` values
//! with `|lo| <= ulp(hi) / 2`, giving roughly 106 bits of significand.
//! That is enough to carry a Julian Day of magnitude ~10^6–10^9 together
//! with a sub-microsecond fraction, and to multiply a day count by the
//! sidereal rate without the product swallowing the fractional turn.
//!
//! Built from the classic error-free transforms:
//! - two-sum (Knuth, *TAOCP* vol. 2, §4.2.2)
//! - fast two-sum (Dekker 1971), valid when `|a| >= |b|`
//! - two-product via fused multiply-add
//!
//! This type is deliberately small: it exists only inside the
//! time/sidereal boundary and is not a general-purpose numeric type.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Exact `a + b` as `(sum, error)`.
#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

/// Exact `a + b` as `(sum, error)`, assuming `|a| >= |b|`.
#[inline]
fn fast_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let err = b - (s - a);
    (s, err)
}

/// Exact `a * b` as `(product, error)`.
#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let err = a.mul_add(b, -p);
    (p, err)
}

/// Extended-precision real: `hi + lo`, normalized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoubleDouble {
    hi: f64,
    lo: f64,
}

impl DoubleDouble {
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };

    /// Build from an arbitrary pair, renormalizing.
    pub fn new(hi: f64, lo: f64) -> Self {
        let (hi, lo) = two_sum(hi, lo);
        Self { hi, lo }
    }

    /// Leading component (the value rounded to `f64`).
    pub fn hi(self) -> f64 {
        self.hi
    }

    /// Trailing correction term.
    pub fn lo(self) -> f64 {
        self.lo
    }

    /// Round to the nearest `f64`.
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// Largest integer not greater than `self`.
    pub fn floor(self) -> Self {
        let hi = self.hi.floor();
        if hi == self.hi {
            // hi is already integral; the fractional part lives in lo.
            let (hi, lo) = fast_two_sum(hi, self.lo.floor());
            Self { hi, lo }
        } else {
            Self { hi, lo: 0.0 }
        }
    }

    /// Euclidean remainder, result in `[0, modulus)` for positive `modulus`.
    pub fn rem_euclid(self, modulus: f64) -> Self {
        let turns = (self / modulus).floor();
        let mut r = self - turns * modulus;
        if r.hi < 0.0 {
            r = r + modulus;
        } else if r.hi >= modulus {
            r = r - modulus;
        }
        r
    }

    pub fn is_finite(self) -> bool {
        self.hi.is_finite()
    }
}

impl From<f64> for DoubleDouble {
    fn from(value: f64) -> Self {
        Self { hi: value, lo: 0.0 }
    }
}

impl From<i64> for DoubleDouble {
    fn from(value: i64) -> Self {
        // i64 does not fit f64 exactly above 2^53; keep the remainder in lo.
        let hi = value as f64;
        let lo = value.wrapping_sub(hi as i64) as f64;
        Self::new(hi, lo)
    }
}

impl fmt::Display for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.to_f64()),
            None => write!(f, "{}", self.to_f64()),
        }
    }
}

impl PartialOrd for DoubleDouble {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi) {
            Some(Ordering::Equal) => self.lo.partial_cmp(&other.lo),
            ord => ord,
        }
    }
}

impl Neg for DoubleDouble {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            hi: -self.hi,
            lo: -self.lo,
        }
    }
}

impl Add for DoubleDouble {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (s, e) = two_sum(self.hi, rhs.hi);
        let (t, f) = two_sum(self.lo, rhs.lo);
        let (s, e) = fast_two_sum(s, e + t);
        let (hi, lo) = fast_two_sum(s, e + f);
        Self { hi, lo }
    }
}

impl Add<f64> for DoubleDouble {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        let (s, e) = two_sum(self.hi, rhs);
        let (hi, lo) = fast_two_sum(s, e + self.lo);
        Self { hi, lo }
    }
}

impl Sub for DoubleDouble {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Sub<f64> for DoubleDouble {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        self + (-rhs)
    }
}

impl Mul<f64> for DoubleDouble {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        let (p, e) = two_prod(self.hi, rhs);
        let (hi, lo) = fast_two_sum(p, e + self.lo * rhs);
        Self { hi, lo }
    }
}

impl Mul for DoubleDouble {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (p, e) = two_prod(self.hi, rhs.hi);
        let e = e + (self.hi * rhs.lo + self.lo * rhs.hi);
        let (hi, lo) = fast_two_sum(p, e);
        Self { hi, lo }
    }
}

impl Div<f64> for DoubleDouble {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        let q1 = self.hi / rhs;
        let r = self - DoubleDouble::from(q1) * rhs;
        let q2 = r.hi / rhs;
        let r = r - DoubleDouble::from(q2) * rhs;
        let q3 = r.hi / rhs;
        let (hi, lo) = fast_two_sum(q1, q2);
        Self { hi, lo } + q3
    }
}

impl Div for DoubleDouble {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let q1 = self.hi / rhs.hi;
        let r = self - rhs * q1;
        let q2 = r.hi / rhs.hi;
        let r = r - rhs * q2;
        let q3 = r.hi / rhs.hi;
        let (hi, lo) = fast_two_sum(q1, q2);
        Self { hi, lo } + q3
    }
}
