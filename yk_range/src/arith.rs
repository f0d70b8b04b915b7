/**
 * Endpoint-wise arithmetic over ranges of numbers and durations.
 *
 * The element kinds are a closed set, picked statically through the
 * `Additive` and `Multiplicative` traits. Every result is re-validated, so
 * combining two ranges can fail when the endpoints cross over.
 */

use std::fmt::Debug;
use std::time::{Duration, Instant, SystemTime};
use crate::endpoint::Endpoint;
use crate::error::{RangeError, Result};
use crate::range::Range;

pub trait Additive : Endpoint + Debug {
    fn checked_sum(&self, other: &Self) -> Result<Self>;
    fn checked_difference(&self, other: &Self) -> Result<Self>;
}

pub trait Multiplicative : Additive {
    fn checked_product(&self, other: &Self) -> Result<Self>;
    fn checked_quotient(&self, other: &Self) -> Result<Self>;
}

fn overflow<T>(lhs: &T, op: &str, rhs: &T) -> RangeError where T : Debug {
    RangeError::invalid(format!("{:?} {} {:?} is out of range", lhs, op, rhs))
}

macro_rules! impl_checked_arith {
    ($($t:ty),*) => {
        $(
            impl Additive for $t {
                fn checked_sum(&self, other: &Self) -> Result<Self> {
                    self.checked_add(*other).ok_or_else(|| overflow(self, "+", other))
                }

                fn checked_difference(&self, other: &Self) -> Result<Self> {
                    self.checked_sub(*other).ok_or_else(|| overflow(self, "-", other))
                }
            }
        )*
    };
}

macro_rules! impl_integer_arith {
    ($($t:ty),*) => {
        impl_checked_arith!($($t),*);
        $(
            impl Multiplicative for $t {
                fn checked_product(&self, other: &Self) -> Result<Self> {
                    self.checked_mul(*other).ok_or_else(|| overflow(self, "*", other))
                }

                fn checked_quotient(&self, other: &Self) -> Result<Self> {
                    self.checked_div(*other).ok_or_else(|| overflow(self, "/", other))
                }
            }
        )*
    };
}

// Floats saturate to infinities instead of overflowing. Only a zero divisor is
// refused, anything producing NaN is caught when the range is rebuilt.
macro_rules! impl_float_arith {
    ($($t:ty),*) => {
        $(
            impl Additive for $t {
                fn checked_sum(&self, other: &Self) -> Result<Self> {
                    Ok(self + other)
                }

                fn checked_difference(&self, other: &Self) -> Result<Self> {
                    Ok(self - other)
                }
            }

            impl Multiplicative for $t {
                fn checked_product(&self, other: &Self) -> Result<Self> {
                    Ok(self * other)
                }

                fn checked_quotient(&self, other: &Self) -> Result<Self> {
                    if *other == 0.0 {
                        return Err(RangeError::invalid(format!("{:?} / 0 is undefined", self)));
                    }
                    Ok(self / other)
                }
            }
        )*
    };
}

impl_integer_arith!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize
);

impl_float_arith!(f32, f64);

impl_checked_arith!(Duration);

/**
 * Range operations.
 */

impl <T> Range<T> where T : Additive {
    /// `[a.low + b.low, a.high + b.high]`
    pub fn sum_with(&self, other: &Self) -> Result<Self> {
        Range::new(self.low().checked_sum(other.low())?, self.high().checked_sum(other.high())?)
    }

    /// `[a.low - b.low, a.high - b.high]`
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        Range::new(
            self.low().checked_difference(other.low())?,
            self.high().checked_difference(other.high())?)
    }

    /// The width of the range, `high - low`.
    pub fn delta(&self) -> Result<T> {
        self.high().checked_difference(self.low())
    }
}

impl <T> Range<T> where T : Multiplicative {
    pub fn multiply_by(&self, other: &Self) -> Result<Self> {
        Range::new(self.low().checked_product(other.low())?, self.high().checked_product(other.high())?)
    }

    pub fn divide_by(&self, other: &Self) -> Result<Self> {
        Range::new(
            self.low().checked_quotient(other.low())?,
            self.high().checked_quotient(other.high())?)
    }
}

impl Range<Instant> {
    pub fn span(&self) -> Duration {
        self.high().duration_since(*self.low())
    }
}

impl Range<SystemTime> {
    pub fn span(&self) -> Result<Duration> {
        self.high().duration_since(*self.low())
            .map_err(|e| RangeError::invalid(format!("clock went backwards by {:?}", e.duration())))
    }
}

/// Maps `value` from its position in `source` to the same relative position
/// in `target`. NaN when `source` is a single point.
pub fn transpose(value: f64, source: &Range<f64>, target: &Range<f64>) -> f64 {
    let (min, max) = (*source.low(), *source.high());
    if min == max {
        return f64::NAN;
    }
    let ratio = (target.high() - target.low()) / (max - min);
    target.low() + (value - min) * ratio
}

// Tests ///////////////////////////////////////////////////////////////////////
