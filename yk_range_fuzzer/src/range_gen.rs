/**
 * Range generation strategies.
 *
 * Endpoints are always even, so two ranges overlapping anywhere on the real
 * line also share an integer. That lets the checks use integer membership as
 * the oracle.
 */

use yk_range::{Boundary, Range, RangeError, Result};
use crate::rnd::*;

pub type IntRange = Range<Boundary<i32>>;

pub trait RangeGenStrategy {
    fn generate(&self) -> Result<IntRange>;
}

/// An even value from `0..2 * domain`.
pub fn rand_endpoint(domain: i32) -> i32 {
    rand_range(&(0..domain)) * 2
}

/**
 * Any valid range over the domain, with random tags.
 */

pub struct RandomRange {
    domain: i32,
}

impl RandomRange {
    pub fn with_domain(domain: i32) -> Self {
        Self{ domain }
    }
}

impl RangeGenStrategy for RandomRange {
    fn generate(&self) -> Result<IntRange> {
        let a = rand_endpoint(self.domain);
        let b = rand_endpoint(self.domain);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        if low == high {
            // Only the fully inclusive point is legal
            return Range::point(Boundary::included(low)?);
        }
        Range::new(Boundary::new(low, rand_bool())?, Boundary::new(high, rand_bool())?)
    }
}

/**
 * Single-value ranges.
 */

pub struct PointRange {
    domain: i32,
}

impl PointRange {
    pub fn with_domain(domain: i32) -> Self {
        Self{ domain }
    }
}

impl RangeGenStrategy for PointRange {
    fn generate(&self) -> Result<IntRange> {
        Range::point(Boundary::included(rand_endpoint(self.domain))?)
    }
}

/**
 * Chooses from a collection of strategies and uses that.
 */

pub struct AnyRange {
    strats: Vec<Box<dyn RangeGenStrategy>>,
}

impl AnyRange {
    pub fn new() -> Self {
        Self{ strats: Vec::new() }
    }

    pub fn add<G>(&mut self, g: G) where G : RangeGenStrategy + 'static {
        self.strats.push(Box::new(g));
    }
}

impl RangeGenStrategy for AnyRange {
    fn generate(&self) -> Result<IntRange> {
        match sample(&self.strats) {
            Some(strat) => strat.generate(),
            None => Err(RangeError::invalid("no range strategy to choose from")),
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod range_gen_tests {
    use super::*;

    #[test]
    fn generated_ranges_are_valid() {
        set_seed(7);
        let mut strat = AnyRange::new();
        strat.add(RandomRange::with_domain(5));
        strat.add(PointRange::with_domain(5));
        for _ in 0..500 {
            let r = strat.generate().unwrap();
            assert_eq!(r.is_valid_range(), Ok(true));
            assert_eq!(r.low().value() % 2, 0);
            assert!(*r.high().value() < 10);
        }
    }

    #[test]
    fn empty_chooser_fails() {
        assert!(AnyRange::new().generate().is_err());
    }
}
