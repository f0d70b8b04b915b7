/**
 * The ordering protocol that range elements provide.
 *
 * A plain value behaves like an always-inclusive boundary, so the defaults
 * below collapse the low, high and value contexts into one total order. Only
 * `Boundary` overrides them.
 */

use std::cmp::Ordering;
use std::time::{Duration, Instant, SystemTime};
use crate::error::{RangeError, Result};

pub trait Endpoint : Clone {
    /// Context-free total order. Returning `InvalidArgument` or
    /// `Incomparable` signals that the two values can't be ordered; any other
    /// error is a fault.
    fn try_cmp(&self, other: &Self) -> Result<Ordering>;

    /// Order of the underlying values, ignoring inclusivity.
    fn cmp_value(&self, other: &Self) -> Result<Ordering> {
        self.try_cmp(other)
    }

    /// Order when both are treated as the start of an interval.
    fn cmp_low(&self, other: &Self) -> Result<Ordering> {
        self.try_cmp(other)
    }

    /// Order when both are treated as the end of an interval.
    fn cmp_high(&self, other: &Self) -> Result<Ordering> {
        self.try_cmp(other)
    }

    fn is_inclusive(&self) -> bool {
        true
    }

    fn is_nan(&self) -> bool {
        false
    }

    /// `None` when the type has no opinion and the plain order decides.
    fn can_range_with(&self, _other: &Self) -> Option<bool> {
        None
    }
}

macro_rules! impl_endpoint_for_ord {
    ($($t:ty),*) => {
        $(
            impl Endpoint for $t {
                fn try_cmp(&self, other: &Self) -> Result<Ordering> {
                    Ok(Ord::cmp(self, other))
                }
            }
        )*
    };
}

macro_rules! impl_endpoint_for_float {
    ($($t:ty),*) => {
        $(
            impl Endpoint for $t {
                fn try_cmp(&self, other: &Self) -> Result<Ordering> {
                    self.partial_cmp(other)
                        .ok_or_else(|| RangeError::invalid("NaN is not comparable"))
                }

                fn is_nan(&self) -> bool {
                    <$t>::is_nan(*self)
                }
            }
        )*
    };
}

impl_endpoint_for_ord!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    char, bool, String,
    Duration, Instant, SystemTime
);

impl_endpoint_for_float!(f32, f64);

impl <'a> Endpoint for &'a str {
    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        Ok(Ord::cmp(*self, *other))
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
