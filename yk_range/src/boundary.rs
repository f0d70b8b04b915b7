/**
 * A range endpoint that is either included in or excluded from the range.
 */

use std::cmp::Ordering;
use std::fmt;
use std::ops::Bound;
use crate::endpoint::Endpoint;
use crate::error::{RangeError, Result};
use crate::range::Range;

/// A value plus an inclusive/exclusive tag. Never holds NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Boundary<T> {
    value: T,
    inclusive: bool,
}

/**
 * Construction.
 */

impl <T> Boundary<T> where T : Endpoint {
    pub fn new(value: T, inclusive: bool) -> Result<Self> {
        if value.is_nan() {
            return Err(RangeError::invalid("a boundary value must not be NaN"));
        }
        Ok(Self{ value, inclusive })
    }

    pub fn included(value: T) -> Result<Self> {
        Self::new(value, true)
    }

    pub fn excluded(value: T) -> Result<Self> {
        Self::new(value, false)
    }
}

/**
 * Observers.
 */

impl <T> Boundary<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn inclusive(&self) -> bool {
        self.inclusive
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.inclusive)
    }
}

/**
 * Ordering. Equal values with differing tags only have an order once we know
 * whether the boundaries start or end an interval.
 */

// An included start admits its own value, so it comes before an excluded one
fn low_tie_break(lhs_inclusive: bool, rhs_inclusive: bool) -> Ordering {
    match (lhs_inclusive, rhs_inclusive) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

impl <T> Boundary<T> where T : Endpoint {
    /// Compares two boundaries as the starts of intervals.
    pub fn compare_low(&self, other: &Self) -> Result<Ordering> {
        Ok(match self.value.try_cmp(&other.value)? {
            Ordering::Equal => low_tie_break(self.inclusive, other.inclusive),
            o => o,
        })
    }

    /// Compares two boundaries as the ends of intervals.
    pub fn compare_high(&self, other: &Self) -> Result<Ordering> {
        Ok(match self.value.try_cmp(&other.value)? {
            Ordering::Equal => low_tie_break(self.inclusive, other.inclusive).reverse(),
            o => o,
        })
    }

    /// Context-free comparison. Fails with `Incomparable` for equal values
    /// with differing tags.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        match self.value.try_cmp(&other.value)? {
            Ordering::Equal if self.inclusive != other.inclusive => Err(RangeError::Incomparable),
            o => Ok(o),
        }
    }

    /// Checks if a range could start at this boundary and end at `other`.
    /// Only `[v, v]` is a legal single-value range.
    pub fn can_range_with(&self, other: &Self) -> Result<bool> {
        let cmp = self.value.try_cmp(&other.value)?;
        Ok(cmp != Ordering::Equal || (self.inclusive && other.inclusive))
    }
}

impl <T> Endpoint for Boundary<T> where T : Endpoint {
    fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.compare(other)
    }

    fn cmp_value(&self, other: &Self) -> Result<Ordering> {
        self.value.try_cmp(&other.value)
    }

    fn cmp_low(&self, other: &Self) -> Result<Ordering> {
        self.compare_low(other)
    }

    fn cmp_high(&self, other: &Self) -> Result<Ordering> {
        self.compare_high(other)
    }

    fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    // A failing value comparison defers to `try_cmp`, which reports it
    fn can_range_with(&self, other: &Self) -> Option<bool> {
        Boundary::can_range_with(self, other).ok()
    }
}

/**
 * Closing a boundary into a range.
 */

impl <T> Boundary<T> where T : Endpoint + fmt::Debug {
    /// A range from this boundary up to and including `high`.
    pub fn to(self, high: T) -> Result<Range<Boundary<T>>> {
        Range::new(self, Boundary::new(high, true)?)
    }

    /// A range from this boundary up to but excluding `high`.
    pub fn below(self, high: T) -> Result<Range<Boundary<T>>> {
        Range::new(self, Boundary::new(high, false)?)
    }
}

/**
 * Conversions and printing.
 */

impl <T> From<Boundary<T>> for Bound<T> {
    fn from(boundary: Boundary<T>) -> Self {
        if boundary.inclusive {
            Bound::Included(boundary.value)
        }
        else {
            Bound::Excluded(boundary.value)
        }
    }
}

impl <T> Boundary<T> {
    pub fn as_bound(&self) -> Bound<&T> {
        if self.inclusive {
            Bound::Included(&self.value)
        }
        else {
            Bound::Excluded(&self.value)
        }
    }
}

impl <T> fmt::Display for Boundary<T> where T : fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Boundary<{}>({}, {})", std::any::type_name::<T>(), self.value, self.inclusive)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
