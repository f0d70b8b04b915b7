/**
 * Property checks of the range algebra against a brute-force membership
 * oracle over a window of integers.
 */

use thiserror::Error;
use yk_range::{Boundary, RangeError};
use crate::range_gen::IntRange;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{property} does not hold: {detail}")]
    Violation{ property: &'static str, detail: String },

    #[error(transparent)]
    Range(#[from] RangeError),
}

pub type CheckResult = Result<(), CheckError>;

fn ensure<F>(holds: bool, property: &'static str, detail: F) -> CheckResult where F : FnOnce() -> String {
    if holds {
        Ok(())
    }
    else {
        Err(CheckError::Violation{ property, detail: detail() })
    }
}

/// Membership computed straight from the endpoints, without the library.
pub fn covers(range: &IntRange, v: i32) -> bool {
    let (low, high) = (range.low(), range.high());
    let above_low = v > *low.value() || (v == *low.value() && low.inclusive());
    let below_high = v < *high.value() || (v == *high.value() && high.inclusive());
    above_low && below_high
}

pub struct Oracle {
    window: std::ops::Range<i32>,
}

impl Oracle {
    /// Sees a little past both ends of the generated endpoints.
    pub fn with_domain(domain: i32) -> Self {
        Self{ window: -2..(2 * domain + 2) }
    }

    pub fn members(&self, range: Option<&IntRange>) -> Vec<i32> {
        match range {
            Some(r) => self.window.clone().filter(|v| covers(r, *v)).collect(),
            None => Vec::new(),
        }
    }

    pub fn expand_never_shrinks(&self, range: &IntRange, value: i32, inclusive: bool) -> CheckResult {
        let grown = range.expand_value(value, inclusive)?;
        let after = self.members(Some(&grown));
        ensure(
            self.members(Some(range)).iter().all(|v| after.contains(v)),
            "expand never shrinks",
            || format!("{:?} expanded by {} gave {:?}", range, value, grown))?;
        ensure(
            !inclusive || covers(&grown, value),
            "expand covers an included value",
            || format!("{:?} expanded by {} gave {:?}", range, value, grown))
    }

    pub fn combine_is_hull(&self, a: &IntRange, b: &IntRange) -> CheckResult {
        let hull = a.combine(b)?;
        let members = self.members(Some(&hull));
        let mut inputs = self.members(Some(a));
        inputs.extend(self.members(Some(b)));
        ensure(
            inputs.iter().all(|v| members.contains(v)),
            "combine covers both inputs",
            || format!("{:?} + {:?} gave {:?}", a, b, hull))?;

        let low = smaller_low(a.low(), b.low())?;
        let high = larger_high(a.high(), b.high())?;
        let smallest = IntRange::new(low.clone(), high.clone())?;
        ensure(
            hull == smallest,
            "combine is the smallest covering range",
            || format!("{:?} + {:?} gave {:?}, expected {:?}", a, b, hull, smallest))
    }

    pub fn intersect_matches(&self, a: &IntRange, b: &IntRange) -> CheckResult {
        let ab = a.try_intersect(b)?;
        let ba = b.try_intersect(a)?;
        ensure(
            ab == ba,
            "intersection is symmetric",
            || format!("{:?} and {:?} gave {:?} and {:?}", a, b, ab, ba))?;

        let shared: Vec<i32> = self.members(Some(a)).into_iter()
            .filter(|v| covers(b, *v))
            .collect();
        ensure(
            self.members(ab.as_ref()) == shared,
            "intersection holds exactly the shared values",
            || format!("{:?} and {:?} gave {:?}", a, b, ab))
    }

    pub fn contains_matches(&self, range: &IntRange, value: i32) -> CheckResult {
        let contained = range.contains(&value)?;
        ensure(
            contained == covers(range, value),
            "contains agrees with the endpoints",
            || format!("{:?} contains {} reported {}", range, value, contained))
    }

    pub fn plain_membership(&self, low: i32, high: i32, value: i32) -> CheckResult {
        let plain = yk_range::range(low, high)?;
        let closed = plain.contains_value(&value, true)?;
        let open = plain.contains_value(&value, false)?;
        ensure(
            closed == (low <= value && value <= high) && open == (low < value && value < high),
            "plain membership agrees with the endpoints",
            || format!("[{}, {}] with {} reported closed {}, open {}", low, high, value, closed, open))
    }
}

fn smaller_low<'a>(a: &'a Boundary<i32>, b: &'a Boundary<i32>) -> Result<&'a Boundary<i32>, RangeError> {
    Ok(if a.compare_low(b)? == std::cmp::Ordering::Greater { b } else { a })
}

fn larger_high<'a>(a: &'a Boundary<i32>, b: &'a Boundary<i32>) -> Result<&'a Boundary<i32>, RangeError> {
    Ok(if a.compare_high(b)? == std::cmp::Ordering::Less { b } else { a })
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod check_tests {
    use super::*;
    use crate::rnd::*;
    use crate::range_gen::*;

    fn rb(low: i32, low_inc: bool, high: i32, high_inc: bool) -> IntRange {
        yk_range::range(Boundary::new(low, low_inc).unwrap(), Boundary::new(high, high_inc).unwrap()).unwrap()
    }

    #[test]
    fn oracle_membership() {
        let oracle = Oracle::with_domain(3);
        assert_eq!(oracle.members(Some(&rb(0, false, 4, true))), vec![1, 2, 3, 4]);
        assert_eq!(oracle.members(Some(&rb(2, true, 2, true))), vec![2]);
        assert!(oracle.members(None).is_empty());
    }

    #[test]
    fn hand_picked_cases() {
        let oracle = Oracle::with_domain(4);
        let a = rb(0, true, 4, false);
        let b = rb(4, true, 6, true);
        oracle.expand_never_shrinks(&a, 4, false).unwrap();
        oracle.combine_is_hull(&a, &b).unwrap();
        oracle.intersect_matches(&a, &b).unwrap();
        oracle.contains_matches(&a, 4).unwrap();
        oracle.plain_membership(0, 4, 4).unwrap();
    }

    #[test]
    fn random_cases() {
        set_seed(1234);
        let oracle = Oracle::with_domain(6);
        let mut strat = AnyRange::new();
        strat.add(RandomRange::with_domain(6));
        strat.add(PointRange::with_domain(6));
        for _ in 0..2000 {
            let a = strat.generate().unwrap();
            let b = strat.generate().unwrap();
            let v = rand_range(&(-1..13));
            oracle.expand_never_shrinks(&a, v, rand_bool()).unwrap();
            oracle.combine_is_hull(&a, &b).unwrap();
            oracle.intersect_matches(&a, &b).unwrap();
            oracle.contains_matches(&b, v).unwrap();
        }
    }
}
