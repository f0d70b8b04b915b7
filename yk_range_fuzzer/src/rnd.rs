/**
 * Random utilities.
 */

use std::cell::RefCell;
use std::ops::Range;
use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand::distributions::uniform::SampleUniform;
use rand::seq::SliceRandom;
use rand_pcg::Mcg128Xsl64;

/// A generator that remembers the seed it was started from, so a failing run
/// can be reported and replayed.
struct SeededRng {
    seed: u64,
    rng: Mcg128Xsl64,
}

impl SeededRng {
    fn new(seed: u64) -> Self {
        Self{ seed, rng: Mcg128Xsl64::seed_from_u64(seed) }
    }
}

thread_local! {
    static STATE: RefCell<SeededRng> = RefCell::new(SeededRng::new(0));
}

fn with_rng<R, F>(f: F) -> R where F : FnOnce(&mut Mcg128Xsl64) -> R {
    STATE.with(|state| f(&mut state.borrow_mut().rng))
}

pub fn seed_from_system_time() -> u64 {
    SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn current_seed() -> u64 {
    STATE.with(|state| state.borrow().seed)
}

pub fn set_seed(seed: u64) {
    STATE.with(|state| *state.borrow_mut() = SeededRng::new(seed));
}

/// A uniform value from the half-open range `r`.
pub fn rand_range<T>(r: &Range<T>) -> T where T : SampleUniform {
    with_rng(|rng| rng.gen_range(&r.start, &r.end))
}

pub fn rand_bool() -> bool {
    with_rng(|rng| rng.gen_bool(0.5))
}

/// `None` for an empty slice.
pub fn sample<T>(s: &[T]) -> Option<&T> {
    with_rng(|rng| s.choose(rng))
}

// Tests ///////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod rnd_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        set_seed(42);
        let first: Vec<i32> = (0..16).map(|_| rand_range(&(0..100))).collect();
        set_seed(42);
        let second: Vec<i32> = (0..16).map(|_| rand_range(&(0..100))).collect();
        assert_eq!(first, second);
        assert_eq!(current_seed(), 42);
        assert!(first.iter().all(|v| (0..100).contains(v)));
    }

    #[test]
    fn sampling() {
        set_seed(3);
        let empty: [u8; 0] = [];
        assert_eq!(sample(&empty), None);
        let picked = sample(&[4, 8, 15]).cloned();
        assert!(matches!(picked, Some(4) | Some(8) | Some(15)));
        let x = rand_range(&(0.25..0.5));
        assert!(x >= 0.25 && x < 0.5);
    }
}
