/**
 * The range value types and the validity rule guarding their construction.
 */

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Bound, RangeBounds};
use std::time::SystemTime;
use chrono::{DateTime, Utc};
use crate::boundary::Boundary;
use crate::endpoint::Endpoint;
use crate::error::{RangeError, Result};

/// A low and a high value where the low is at most the high. Instances are
/// always valid; every operation producing a range goes through `Range::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T> {
    low: T,
    high: T,
}

/**
 * Validity.
 */

/// Checks if `low` and `high` form a legal range.
///
/// An ordering that signals the values can't be compared makes the pair
/// invalid. Any other error coming out of the ordering is returned as is.
pub fn is_valid<T>(low: &T, high: &T) -> Result<bool> where T : Endpoint {
    if low.is_nan() || high.is_nan() {
        return Ok(false);
    }
    if low.can_range_with(high) == Some(false) {
        return Ok(false);
    }
    match low.try_cmp(high) {
        Ok(o) => Ok(o != Ordering::Greater),
        Err(e) if e.is_incomparable() => Ok(false),
        Err(e) => Err(e),
    }
}

/// Like `is_valid`, but an invalid pair is an error.
pub fn assert_valid<T>(low: &T, high: &T) -> Result<()> where T : Endpoint + fmt::Debug {
    if is_valid(low, high)? {
        Ok(())
    }
    else {
        log::debug!("rejected range: low {:?}, high {:?}", low, high);
        Err(RangeError::invalid(format!("Range is not valid. Low: {:?}, High: {:?}", low, high)))
    }
}

/**
 * Construction and observers.
 */

impl <T> Range<T> where T : Endpoint + fmt::Debug {
    pub fn new(low: T, high: T) -> Result<Self> {
        assert_valid(&low, &high)?;
        Ok(Self{ low, high })
    }

    /// The single-value range `[value, value]`.
    pub fn point(value: T) -> Result<Self> {
        Self::new(value.clone(), value)
    }

    pub fn is_valid_range(&self) -> Result<bool> {
        is_valid(&self.low, &self.high)
    }
}

impl <T> Range<T> {
    pub fn low(&self) -> &T {
        &self.low
    }

    pub fn high(&self) -> &T {
        &self.high
    }

    pub fn into_parts(self) -> (T, T) {
        (self.low, self.high)
    }
}

impl <T> fmt::Display for Range<T> where T : fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Range<{}>[{} - {}]", std::any::type_name::<T>(), self.low, self.high)
    }
}

/**
 * Interop with the standard range traits.
 */

impl <T> Range<T> where T : Clone {
    pub fn to_inclusive(&self) -> std::ops::RangeInclusive<T> {
        self.low.clone()..=self.high.clone()
    }
}

impl <T> RangeBounds<T> for Range<Boundary<T>> {
    fn start_bound(&self) -> Bound<&T> {
        self.low.as_bound()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.high.as_bound()
    }
}

/**
 * A range carrying a passenger value.
 */

/// A valid range plus a payload that takes no part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeWithValue<T, V> {
    range: Range<T>,
    value: V,
}

impl <T, V> RangeWithValue<T, V> where T : Endpoint + fmt::Debug {
    pub fn new(low: T, high: T, value: V) -> Result<Self> {
        Ok(Self::with_range(Range::new(low, high)?, value))
    }
}

impl <T, V> RangeWithValue<T, V> {
    pub fn with_range(range: Range<T>, value: V) -> Self {
        Self{ range, value }
    }

    pub fn range(&self) -> &Range<T> {
        &self.range
    }

    pub fn low(&self) -> &T {
        self.range.low()
    }

    pub fn high(&self) -> &T {
        self.range.high()
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (T, T, V) {
        let (low, high) = self.range.into_parts();
        (low, high, self.value)
    }
}

impl <T, V> fmt::Display for RangeWithValue<T, V> where T : fmt::Display, V : fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} - {}]({})", self.range.low, self.range.high, self.value)
    }
}

/**
 * Ranges stamped with a point in time.
 */

/// Anything carrying the instant it was recorded at.
pub trait TimeIndexed {
    fn time(&self) -> SystemTime;
}

fn fmt_time(time: SystemTime) -> impl fmt::Display {
    DateTime::<Utc>::from(time).format("%Y-%m-%d %H:%M:%S")
}

/// A valid range recorded at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeTimeIndexed<T> {
    time: SystemTime,
    range: Range<T>,
}

impl <T> RangeTimeIndexed<T> where T : Endpoint + fmt::Debug {
    pub fn new(time: SystemTime, low: T, high: T) -> Result<Self> {
        Ok(Self::with_range(time, Range::new(low, high)?))
    }

    pub fn point(time: SystemTime, value: T) -> Result<Self> {
        Ok(Self::with_range(time, Range::point(value)?))
    }
}

impl <T> RangeTimeIndexed<T> {
    pub fn with_range(time: SystemTime, range: Range<T>) -> Self {
        Self{ time, range }
    }

    pub fn range(&self) -> &Range<T> {
        &self.range
    }

    pub fn low(&self) -> &T {
        self.range.low()
    }

    pub fn high(&self) -> &T {
        self.range.high()
    }

    pub fn into_parts(self) -> (SystemTime, T, T) {
        let (low, high) = self.range.into_parts();
        (self.time, low, high)
    }
}

impl <T> TimeIndexed for RangeTimeIndexed<T> {
    fn time(&self) -> SystemTime {
        self.time
    }
}

impl <T> fmt::Display for RangeTimeIndexed<T> where T : fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", fmt_time(self.time), self.range.low, self.range.high)
    }
}

/// A time-stamped range with a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeTimeIndexedWithValue<T, V> {
    time: SystemTime,
    range: RangeWithValue<T, V>,
}

impl <T, V> RangeTimeIndexedWithValue<T, V> where T : Endpoint + fmt::Debug {
    pub fn new(time: SystemTime, low: T, high: T, value: V) -> Result<Self> {
        Ok(Self{ time, range: RangeWithValue::new(low, high, value)? })
    }
}

impl <T, V> RangeTimeIndexedWithValue<T, V> {
    pub fn range(&self) -> &Range<T> {
        self.range.range()
    }

    pub fn low(&self) -> &T {
        self.range.low()
    }

    pub fn high(&self) -> &T {
        self.range.high()
    }

    pub fn value(&self) -> &V {
        self.range.value()
    }

    pub fn into_parts(self) -> (SystemTime, T, T, V) {
        let (low, high, value) = self.range.into_parts();
        (self.time, low, high, value)
    }
}

impl <T, V> TimeIndexed for RangeTimeIndexedWithValue<T, V> {
    fn time(&self) -> SystemTime {
        self.time
    }
}

impl <T, V> fmt::Display for RangeTimeIndexedWithValue<T, V> where T : fmt::Display, V : fmt::Display {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", fmt_time(self.time), self.range)
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod range_tests {
    use super::*;

    fn b<T>(value: T, inclusive: bool) -> Boundary<T> where T : Endpoint {
        Boundary::new(value, inclusive).unwrap()
    }

    #[derive(Debug, Clone)]
    struct NotComparable;

    impl Endpoint for NotComparable {
        fn try_cmp(&self, _: &Self) -> Result<Ordering> {
            Err(RangeError::invalid("Expected"))
        }
    }

    #[derive(Debug, Clone)]
    struct Faulty;

    impl Endpoint for Faulty {
        fn try_cmp(&self, _: &Self) -> Result<Ordering> {
            Err(RangeError::Fault("broken ordering".into()))
        }
    }

    #[test]
    fn valid_pairs() {
        for &(low, high) in &[(1.0, 2.0), (-100.0, -6.0), (-50.0, 40.0)] {
            assert_eq!(is_valid(&low, &high), Ok(true));

            let a = b(low, true);
            assert_eq!(is_valid(&a, &a), Ok(true));

            let hi = b(high, true);
            assert_eq!(assert_valid(&a, &hi), Ok(()));

            let c = b(low, false);
            assert_eq!(is_valid(&c, &hi), Ok(true));
            assert_eq!(is_valid(&c, &a), Ok(false));
            assert_eq!(is_valid(&c, &c), Ok(false));
            assert!(assert_valid(&a, &c).is_err());

            let d = b(high, false);
            assert_eq!(is_valid(&hi, &d), Ok(false));
        }
    }

    #[test]
    fn invalid_pairs() {
        for &(low, high) in &[(5.0, 2.0), (-100.0, -600.0), (50.0, 40.0)] {
            assert_eq!(is_valid(&low, &high), Ok(false));
            assert_eq!(is_valid(&b(low, false), &b(high, false)), Ok(false));
            assert_eq!(is_valid(&b(low, true), &b(high, false)), Ok(false));
            assert_eq!(is_valid(&b(low, true), &b(high, true)), Ok(false));
        }
        assert_eq!(is_valid(&f64::NAN, &40.0), Ok(false));
        assert_eq!(is_valid(&50.0, &f64::NAN), Ok(false));
    }

    #[test]
    fn ordering_signals() {
        assert_eq!(is_valid(&NotComparable, &NotComparable), Ok(false));
        assert_eq!(
            is_valid(&Faulty, &Faulty),
            Err(RangeError::Fault("broken ordering".into()))
        );
        assert!(Range::new(NotComparable, NotComparable).is_err());
    }

    #[test]
    fn construction() {
        for &(low, high) in &[(5.0, -1.0), (15.0, 2.0), (f64::NAN, 2.0), (15.0, f64::NAN)] {
            assert!(Range::new(low, high).is_err());
        }
        assert!(Range::new(b(5.0, true), b(-1.0, true)).is_err());
        assert!(Range::point(3).is_ok());
        assert!(Range::new(b(3, true), b(3, false)).is_err());
    }

    #[test]
    fn deconstruction() {
        let (low, high) = Range::new(10.0, 20.0).unwrap().into_parts();
        assert_eq!(low, 10.0);
        assert_eq!(high, 20.0);
    }

    #[test]
    fn display() {
        assert_eq!(Range::new(10.0, 20.0).unwrap().to_string(), "Range<f64>[10 - 20]");
        let r = Range::new(b(1, true), b(2, false)).unwrap();
        assert!(r.to_string().ends_with("[Boundary<i32>(1, true) - Boundary<i32>(2, false)]"));
        let v = RangeWithValue::new(1, 3, "x").unwrap();
        assert_eq!(v.to_string(), "[1 - 3](x)");
    }

    #[test]
    fn equality_with_value() {
        let a = RangeWithValue::new(1.0, 5.0, 1).unwrap();
        let c = RangeWithValue::new(1.0, 5.0, 2).unwrap();
        assert_eq!(a, RangeWithValue::new(1.0, 5.0, 1).unwrap());
        assert_ne!(a, c);
        assert_eq!(a.range(), c.range());
        assert!(RangeWithValue::new(5.0, 1.0, 1).is_err());
    }

    #[test]
    fn std_range_bounds() {
        let set: std::collections::BTreeSet<i32> = (0..10).collect();
        let r = Range::new(b(2, false), b(5, true)).unwrap();
        assert_eq!(set.range::<i32, _>(r).cloned().collect::<Vec<_>>(), vec![3, 4, 5]);
        let r = Range::new(2, 4).unwrap();
        assert_eq!(set.range(r.to_inclusive()).cloned().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    fn at(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(secs)
    }

    #[test]
    fn time_indexed() {
        let a = RangeTimeIndexed::new(at(90061), 1, 4).unwrap();
        assert_eq!(a.time(), at(90061));
        assert_eq!(a.range(), &Range::new(1, 4).unwrap());
        assert_eq!(a.to_string(), "1970-01-02 01:01:01:1-4");
        assert_eq!(a.into_parts(), (at(90061), 1, 4));

        assert_eq!(a, RangeTimeIndexed::new(at(90061), 1, 4).unwrap());
        assert_ne!(a, RangeTimeIndexed::new(at(90062), 1, 4).unwrap());
        assert_ne!(a, RangeTimeIndexed::new(at(90061), 1, 5).unwrap());

        let p = RangeTimeIndexed::point(at(0), 2.5).unwrap();
        assert_eq!((p.low(), p.high()), (&2.5, &2.5));
        assert!(RangeTimeIndexed::new(at(0), 4, 1).is_err());
        assert!(RangeTimeIndexed::point(at(0), f64::NAN).is_err());
    }

    #[test]
    fn time_indexed_with_value() {
        let a = RangeTimeIndexedWithValue::new(at(0), 1.0, 2.0, "x").unwrap();
        assert_eq!(a.to_string(), "1970-01-01 00:00:00:[1 - 2](x)");
        assert_eq!(*a.value(), "x");
        assert_ne!(a, RangeTimeIndexedWithValue::new(at(0), 1.0, 2.0, "y").unwrap());
        assert_ne!(a, RangeTimeIndexedWithValue::new(at(1), 1.0, 2.0, "x").unwrap());
        assert_eq!(a.into_parts(), (at(0), 1.0, 2.0, "x"));
        assert!(RangeTimeIndexedWithValue::new(at(0), 2, 1, ()).is_err());
    }

    #[test]
    fn time_indexed_hashing() {
        let mut seen = std::collections::HashSet::new();
        seen.insert(RangeTimeIndexed::new(at(5), 1, 2).unwrap());
        seen.insert(RangeTimeIndexed::new(at(5), 1, 2).unwrap());
        seen.insert(RangeTimeIndexed::new(at(6), 1, 2).unwrap());
        assert_eq!(seen.len(), 2);
    }
}
