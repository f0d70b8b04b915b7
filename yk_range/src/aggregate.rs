/**
 * Folding sequences of values into the smallest range covering them. NaN
 * values never take part in a fold.
 */

use std::cmp::Ordering;
use std::fmt::Debug;
use std::sync::Mutex;
use crate::endpoint::Endpoint;
use crate::error::{RangeError, Result};
use crate::range::Range;

/// Running minimum and maximum of the values seen so far.
#[derive(Debug, Clone, PartialEq)]
pub struct MinMax<T> {
    bounds: Option<(T, T)>,
}

impl <T> MinMax<T> {
    pub fn new() -> Self {
        Self{ bounds: None }
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    pub fn min(&self) -> Option<&T> {
        self.bounds.as_ref().map(|(min, _)| min)
    }

    pub fn max(&self) -> Option<&T> {
        self.bounds.as_ref().map(|(_, max)| max)
    }
}

impl <T> Default for MinMax<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl <T> MinMax<T> where T : Endpoint {
    pub fn update(&mut self, value: T) -> Result<()> {
        if value.is_nan() {
            return Ok(());
        }
        if let Some((min, max)) = self.bounds.as_mut() {
            if value.try_cmp(min)? == Ordering::Less {
                *min = value;
            }
            else if value.try_cmp(max)? == Ordering::Greater {
                *max = value;
            }
            return Ok(());
        }
        self.bounds = Some((value.clone(), value));
        Ok(())
    }

    /// Folds in the extremes seen by another accumulator.
    pub fn merge(&mut self, other: MinMax<T>) -> Result<()> {
        if let Some((min, max)) = other.bounds {
            self.update(min)?;
            self.update(max)?;
        }
        Ok(())
    }
}

impl <T> MinMax<T> where T : Endpoint + Debug {
    /// `None` if no value was folded in.
    pub fn into_range(self) -> Result<Option<Range<T>>> {
        match self.bounds {
            Some((min, max)) => Range::new(min, max).map(Some),
            None => Ok(None),
        }
    }
}

/**
 * Sequential folds.
 */

fn fold<I, T>(values: I) -> Result<Option<Range<T>>>
    where I : IntoIterator<Item = T>, T : Endpoint + Debug {

    let mut acc = MinMax::new();
    for value in values {
        acc.update(value)?;
    }
    acc.into_range()
}

/// The minimum and maximum of the values. Fails with `EmptyAggregate` when
/// there is no non-NaN value.
pub fn range_of<I, T>(values: I) -> Result<Range<T>>
    where I : IntoIterator<Item = T>, T : Endpoint + Debug {

    fold(values)?.ok_or(RangeError::EmptyAggregate)
}

/// Like `range_of`, but an empty (or all-NaN) input gives `[default, default]`.
pub fn range_of_or<I, T>(values: I, default: T) -> Result<Range<T>>
    where I : IntoIterator<Item = T>, T : Endpoint + Debug {

    match fold(values)? {
        Some(range) => Ok(range),
        None => Range::point(default),
    }
}

pub fn range_of_by<I, T, F>(items: I, selector: F) -> Result<Range<T>>
    where I : IntoIterator, F : FnMut(I::Item) -> T, T : Endpoint + Debug {

    range_of(items.into_iter().map(selector))
}

pub fn range_of_by_or<I, T, F>(items: I, default: T, selector: F) -> Result<Range<T>>
    where I : IntoIterator, F : FnMut(I::Item) -> T, T : Endpoint + Debug {

    range_of_or(items.into_iter().map(selector), default)
}

/**
 * Concurrent fold.
 *
 * Every worker folds its own chunk, then publishes the chunk's minimum and
 * maximum into two separately locked accumulators, so publishing a minimum
 * never waits on a maximum.
 */

/// `range_of_by` spread over one worker per available core. Meant for
/// selectors that are expensive to evaluate.
pub fn par_range_of_by<T, S, F>(items: &[T], selector: F) -> Result<Range<S>>
    where T : Sync, S : Endpoint + Debug + Send, F : Fn(&T) -> S + Sync {

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    par_range_of_by_with(items, workers, selector)
}

pub fn par_range_of_by_with<T, S, F>(items: &[T], workers: usize, selector: F) -> Result<Range<S>>
    where T : Sync, S : Endpoint + Debug + Send, F : Fn(&T) -> S + Sync {

    if workers == 0 {
        return Err(RangeError::invalid("at least one worker is required"));
    }

    let chunk_len = items.len().div_ceil(workers).max(1);
    let min: Mutex<Option<S>> = Mutex::new(None);
    let max: Mutex<Option<S>> = Mutex::new(None);

    std::thread::scope(|scope| {
        let handles: Vec<_> = items.chunks(chunk_len).enumerate().map(|(idx, chunk)| {
            let (min, max, selector) = (&min, &max, &selector);
            scope.spawn(move || fold_chunk(idx, chunk, selector, min, max))
        }).collect();

        // Every worker is joined, the first failure wins
        let mut result = Ok(());
        for handle in handles {
            let outcome = handle.join()
                .unwrap_or_else(|_| Err(RangeError::Fault("aggregation worker panicked".into())));
            if result.is_ok() {
                result = outcome;
            }
        }
        result
    })?;

    let min = min.into_inner().map_err(|_| poisoned())?;
    let max = max.into_inner().map_err(|_| poisoned())?;
    match (min, max) {
        (Some(min), Some(max)) => Range::new(min, max),
        _ => Err(RangeError::EmptyAggregate),
    }
}

fn poisoned() -> RangeError {
    RangeError::Fault("aggregation accumulator poisoned".into())
}

fn fold_chunk<T, S, F>(
    idx: usize, chunk: &[T], selector: &F, min: &Mutex<Option<S>>, max: &Mutex<Option<S>>) -> Result<()>
    where S : Endpoint, F : Fn(&T) -> S {

    let mut local = MinMax::new();
    for item in chunk {
        local.update(selector(item))?;
    }

    // Nothing but NaN, leave both accumulators alone
    let (lo, hi) = match local.bounds {
        Some(bounds) => bounds,
        None => {
            log::trace!("aggregation worker {} found no comparable value", idx);
            return Ok(());
        },
    };
    log::trace!("aggregation worker {} folded {} items", idx, chunk.len());

    {
        let mut current = min.lock().map_err(|_| poisoned())?;
        let replace = match current.as_ref() {
            Some(existing) => lo.try_cmp(existing)? == Ordering::Less,
            None => true,
        };
        if replace {
            *current = Some(lo);
        }
    }

    let mut current = max.lock().map_err(|_| poisoned())?;
    let replace = match current.as_ref() {
        Some(existing) => hi.try_cmp(existing)? == Ordering::Greater,
        None => true,
    };
    if replace {
        *current = Some(hi);
    }
    Ok(())
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    fn r<T>(low: T, high: T) -> Range<T> where T : Endpoint + Debug {
        Range::new(low, high).unwrap()
    }

    fn with_nans(from: i32, count: i32) -> Vec<f64> {
        let mut values = vec![f64::NAN, f64::NAN];
        values.extend((from..from + count).map(f64::from));
        values.push(f64::NAN);
        values
    }

    #[test]
    fn min_max_skips_nan() {
        let mut acc = MinMax::new();
        assert!(acc.is_empty());
        for &v in &[f64::NAN, 5.0, 1.0, 9.0, f64::NAN] {
            acc.update(v).unwrap();
        }
        assert_eq!(acc.min(), Some(&1.0));
        assert_eq!(acc.max(), Some(&9.0));
    }

    #[test]
    fn min_max_merge() {
        let mut a = MinMax::new();
        a.update(4).unwrap();
        let mut other = MinMax::new();
        other.update(-2).unwrap();
        other.update(11).unwrap();
        a.merge(other).unwrap();
        assert_eq!(a.into_range().unwrap(), Some(r(-2, 11)));
    }

    #[test]
    fn sequential_folds() {
        assert_eq!(range_of(vec![f64::NAN, 5.0, 1.0, 9.0, f64::NAN]), Ok(r(1.0, 9.0)));
        assert_eq!(range_of(with_nans(5, 20)), Ok(r(5.0, 24.0)));
        assert_eq!(range_of_by(5..25, f64::from), Ok(r(5.0, 24.0)));
        assert_eq!(range_of_by_or(5..25, 0.0, f64::from), Ok(r(5.0, 24.0)));
        assert_eq!(range_of_or(5..25, 0), Ok(r(5, 24)));
    }

    #[test]
    fn empty_folds() {
        assert_eq!(range_of(Vec::<i32>::new()), Err(RangeError::EmptyAggregate));
        assert_eq!(range_of(vec![f64::NAN, f64::NAN]), Err(RangeError::EmptyAggregate));
        assert_eq!(range_of_or(Vec::<i32>::new(), 0), Ok(r(0, 0)));
        assert_eq!(range_of_or(vec![f32::NAN], 1.5), Ok(r(1.5, 1.5)));
    }

    #[test]
    fn concurrent_fold() {
        let values = with_nans(5, 20000);
        assert_eq!(par_range_of_by(&values, |v| *v), Ok(r(5.0, 20004.0)));
        assert_eq!(par_range_of_by_with(&values, 7, |v| *v), Ok(r(5.0, 20004.0)));
        assert_eq!(par_range_of_by_with(&values, 1, |v| *v), Ok(r(5.0, 20004.0)));
    }

    #[test]
    fn concurrent_fold_more_workers_than_items() {
        let values = [3, -8, 12];
        assert_eq!(par_range_of_by_with(&values, 16, |v| *v), Ok(r(-8, 12)));
    }

    #[test]
    fn concurrent_fold_huge_worker_count() {
        assert_eq!(par_range_of_by_with(&[1, 2, 3], usize::MAX, |v| *v), Ok(r(1, 3)));
        let empty: [i32; 0] = [];
        assert_eq!(
            par_range_of_by_with(&empty, usize::MAX, |v| *v),
            Err(RangeError::EmptyAggregate)
        );
    }

    #[test]
    fn concurrent_fold_edge_cases() {
        let empty: [f64; 0] = [];
        assert_eq!(par_range_of_by(&empty, |v| *v), Err(RangeError::EmptyAggregate));
        assert_eq!(
            par_range_of_by_with(&[f64::NAN; 8], 3, |v| *v),
            Err(RangeError::EmptyAggregate)
        );
        assert!(par_range_of_by_with(&[1, 2], 0, |v| *v).is_err());
    }
}
