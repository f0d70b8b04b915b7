
mod error;
mod endpoint;
mod boundary;
mod range;
mod algebra;
mod aggregate;
mod arith;

use std::fmt::Debug;

pub use error::{RangeError, Result};
pub use endpoint::Endpoint;
pub use boundary::Boundary;
pub use range::{
    Range, RangeWithValue, RangeTimeIndexed, RangeTimeIndexedWithValue, TimeIndexed,
    is_valid, assert_valid,
};
pub use algebra::{is_in_range, is_in_bounds};
pub use aggregate::{
    MinMax,
    range_of, range_of_or, range_of_by, range_of_by_or,
    par_range_of_by, par_range_of_by_with,
};
pub use arith::{Additive, Multiplicative, transpose};

/**
 * Shorthands for building boundaries and ranges.
 */

pub fn boundary<T>(value: T, inclusive: bool) -> Result<Boundary<T>> where T : Endpoint {
    Boundary::new(value, inclusive)
}

pub fn range<T>(low: T, high: T) -> Result<Range<T>> where T : Endpoint + Debug {
    Range::new(low, high)
}

/// An inclusive starting boundary, to be closed with `to` or `below`.
pub fn from<T>(low: T) -> Result<Boundary<T>> where T : Endpoint {
    Boundary::included(low)
}

/// An exclusive starting boundary, to be closed with `to` or `below`.
pub fn above<T>(low: T) -> Result<Boundary<T>> where T : Endpoint {
    Boundary::excluded(low)
}

/// `(low, high)`
pub fn between<T>(low: T, high: T) -> Result<Range<Boundary<T>>> where T : Endpoint + Debug {
    Range::new(Boundary::excluded(low)?, Boundary::excluded(high)?)
}

/// `[low, high]`
pub fn include<T>(low: T, high: T) -> Result<Range<Boundary<T>>> where T : Endpoint + Debug {
    Range::new(Boundary::included(low)?, Boundary::included(high)?)
}

pub fn with_value<T, V>(low: T, high: T, value: V) -> Result<RangeWithValue<T, V>>
    where T : Endpoint + Debug {

    RangeWithValue::new(low, high, value)
}
