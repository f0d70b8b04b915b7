
use std::fmt::Debug;
use yk_range::{Boundary, Endpoint, Range};

pub fn r<T>(low: T, high: T) -> Range<T> where T : Endpoint + Debug {
    Range::new(low, high).unwrap()
}

pub fn rb<T>(low: T, low_inc: bool, high: T, high_inc: bool) -> Range<Boundary<T>>
    where T : Endpoint + Debug {
    r(Boundary::new(low, low_inc).unwrap(), Boundary::new(high, high_inc).unwrap())
}

/// The integers of `domain` the range contains.
pub fn members(range: &Range<Boundary<i32>>, domain: std::ops::Range<i32>) -> Vec<i32> {
    domain.filter(|v| range.contains(v).unwrap()).collect()
}
