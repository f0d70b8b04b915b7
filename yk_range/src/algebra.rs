/**
 * Interval algebra on valid ranges: growing, merging, intersecting and
 * membership tests. Everything goes through the `Endpoint` order, so plain
 * ranges and ranges of boundaries share one implementation.
 */

use std::cmp::Ordering;
use std::fmt::Debug;
use crate::boundary::Boundary;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::range::{Range, RangeWithValue};

/**
 * Expanding and combining.
 */

impl <T> Range<T> where T : Endpoint + Debug {
    /// Returns a range covering both this range and `value`. The range comes
    /// back unchanged when it already covers the value, or when the value is
    /// NaN.
    pub fn expand(&self, value: T) -> Result<Self> {
        if value.is_nan() {
            return Ok(self.clone());
        }

        let (low, high) = (self.low(), self.high());

        if low.cmp_value(high)? == Ordering::Equal && value.cmp_value(low)? == Ordering::Equal {
            // Touching a single-value range. An exclusive touch can't coexist
            // with a point that isn't inclusive on both ends.
            let point_inclusive = low.is_inclusive() && high.is_inclusive();
            return if !value.is_inclusive() && !point_inclusive {
                Range::point(value)
            }
            else {
                Ok(self.clone())
            };
        }

        let c_low = value.cmp_low(low)?;
        let c_high = value.cmp_high(high)?;
        let low_change = c_low == Ordering::Less
            || (c_low == Ordering::Equal && !low.is_inclusive());
        let high_change = c_high == Ordering::Greater
            || (c_high == Ordering::Equal && !high.is_inclusive());

        if !low_change && !high_change {
            return Ok(self.clone());
        }
        // Moving both edges at once would take a value below the low and above
        // the high, which a valid range rules out. Each edge is still only
        // replaced when it moved.
        let new_low = if low_change { value.clone() } else { low.clone() };
        let new_high = if high_change { value } else { high.clone() };
        Range::new(new_low, new_high)
    }

    /// The smallest range covering both ranges.
    pub fn combine(&self, other: &Self) -> Result<Self> {
        self.expand(other.low().clone())?.expand(other.high().clone())
    }
}

impl <T> Range<Boundary<T>> where T : Endpoint + Debug {
    /// Expands by a plain value, tagged as given. A NaN value leaves the range
    /// unchanged.
    pub fn expand_value(&self, value: T, inclusive: bool) -> Result<Self> {
        if value.is_nan() {
            return Ok(self.clone());
        }
        self.expand(Boundary::new(value, inclusive)?)
    }
}

impl <T, V> RangeWithValue<T, V> where T : Endpoint + Debug, V : Clone {
    pub fn expand(&self, value: T) -> Result<Self> {
        Ok(RangeWithValue::with_range(self.range().expand(value)?, self.value().clone()))
    }

    pub fn combine(&self, other: &Range<T>) -> Result<Self> {
        Ok(RangeWithValue::with_range(self.range().combine(other)?, self.value().clone()))
    }
}

/**
 * Intersection.
 */

impl <T> Range<T> where T : Endpoint + Debug {
    /// The overlap of two ranges, `None` if they don't share a single value.
    pub fn try_intersect(&self, other: &Self) -> Result<Option<Self>> {
        // This range ends where the other starts
        match self.high().cmp_value(other.low())? {
            Ordering::Less => return Ok(None),
            Ordering::Equal => return touching_point(other.low(), self.high()),
            Ordering::Greater => (),
        }

        // This range starts where the other ends
        match self.low().cmp_value(other.high())? {
            Ordering::Greater => return Ok(None),
            Ordering::Equal => return touching_point(self.low(), other.high()),
            Ordering::Less => (),
        }

        let c_low = self.low().cmp_low(other.low())?;
        let c_high = self.high().cmp_high(other.high())?;

        if c_low != Ordering::Less && c_high != Ordering::Greater {
            Ok(Some(self.clone()))
        }
        else if c_low == Ordering::Less && c_high == Ordering::Greater {
            Ok(Some(other.clone()))
        }
        else {
            let low = if c_low == Ordering::Less { other.low() } else { self.low() };
            let high = if c_high == Ordering::Greater { other.high() } else { self.high() };
            Range::new(low.clone(), high.clone()).map(Some)
        }
    }
}

// Two ranges meeting at one value overlap only if both keep that value
fn touching_point<T>(low: &T, high: &T) -> Result<Option<Range<T>>> where T : Endpoint + Debug {
    if low.is_inclusive() && high.is_inclusive() {
        Range::new(low.clone(), high.clone()).map(Some)
    }
    else {
        Ok(None)
    }
}

/**
 * Membership.
 */

impl <T> Range<Boundary<T>> where T : Endpoint {
    /// Checks if the value lies inside, honoring the inclusivity of both ends.
    pub fn contains(&self, value: &T) -> Result<bool> {
        if value.is_nan() {
            return Ok(false);
        }
        match value.try_cmp(self.low().value())? {
            Ordering::Less => return Ok(false),
            Ordering::Equal => return Ok(self.low().inclusive()),
            Ordering::Greater => (),
        }
        Ok(match value.try_cmp(self.high().value())? {
            Ordering::Less => true,
            Ordering::Equal => self.high().inclusive(),
            Ordering::Greater => false,
        })
    }
}

impl <T> Range<T> where T : Endpoint {
    /// Checks if a plain value lies inside, either counting the limits as
    /// inside or not.
    pub fn contains_value(&self, value: &T, include_limits: bool) -> Result<bool> {
        if include_limits {
            is_in_range(value, self.low(), self.high())
        }
        else {
            is_in_bounds(value, self.low(), self.high())
        }
    }
}

/// `minimum <= value <= maximum`. NaN is never in range.
pub fn is_in_range<T>(value: &T, minimum: &T, maximum: &T) -> Result<bool> where T : Endpoint {
    if value.is_nan() {
        return Ok(false);
    }
    Ok(value.try_cmp(minimum)? != Ordering::Less && value.try_cmp(maximum)? != Ordering::Greater)
}

/// `minimum < value < maximum`. NaN is never in bounds.
pub fn is_in_bounds<T>(value: &T, minimum: &T, maximum: &T) -> Result<bool> where T : Endpoint {
    if value.is_nan() {
        return Ok(false);
    }
    Ok(value.try_cmp(minimum)? == Ordering::Greater && value.try_cmp(maximum)? == Ordering::Less)
}

// Tests ///////////////////////////////////////////////////////////////////////
