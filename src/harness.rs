//! Wall-clock comparison of [`fibonacci_lru`] and [`fibonacci_splay`].
//!
//! The two variants do not start from the same memo state. One unbounded [`LRUCache`] serves the
//! whole run, so after the first repetition of an `n` (and for every `n` smaller than one already
//! measured) the LRU variant is timing lookups of memoized results. The splay variant gets a fresh
//! [`SplayTree`] for each `n`, shared only by that `n`'s repetitions. Read the two columns with
//! that in mind; they are not a like-for-like comparison.

use crate::cache::lru::LRUCache;
use crate::cache::splay::SplayTree;
use crate::error::HarnessError;
use crate::fibonacci::{fibonacci_lru, fibonacci_splay};
use log::debug;
use num_bigint::BigUint;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Which `n` values to measure and how many timed calls to average for each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    n_values: Vec<u64>,
    repetitions: u32,
}

impl HarnessConfig {
    pub fn new(n_values: Vec<u64>, repetitions: u32) -> Result<Self, HarnessError> {
        if n_values.is_empty() {
            return Err(HarnessError::EmptyRange);
        }
        if repetitions == 0 {
            return Err(HarnessError::ZeroRepetitions);
        }
        Ok(HarnessConfig {
            n_values,
            repetitions,
        })
    }

    pub fn n_values(&self) -> &[u64] {
        &self.n_values
    }

    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }
}

impl Default for HarnessConfig {
    /// n = 0, 50, ..., 950 with 3 repetitions each.
    fn default() -> Self {
        HarnessConfig {
            n_values: (0..1000).step_by(50).collect(),
            repetitions: 3,
        }
    }
}

/// Mean times for one `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub n: u64,
    pub lru: Duration,
    pub splay: Duration,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub measurements: Vec<Measurement>,
}

impl Report {
    /// `(n, seconds)` pairs for the LRU variant, in measurement order.
    pub fn lru_series(&self) -> Vec<(u64, f64)> {
        self.measurements
            .iter()
            .map(|m| (m.n, m.lru.as_secs_f64()))
            .collect()
    }

    /// `(n, seconds)` pairs for the splay variant, in measurement order.
    pub fn splay_series(&self) -> Vec<(u64, f64)> {
        self.measurements
            .iter()
            .map(|m| (m.n, m.splay.as_secs_f64()))
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<10}{:<20}{}",
            "n", "LRU Cache Time (s)", "Splay Tree Time (s)"
        )?;
        writeln!(f, "{}", "-".repeat(50))?;
        for m in &self.measurements {
            writeln!(
                f,
                "{:<10}{:<20.8}{:.8}",
                m.n,
                m.lru.as_secs_f64(),
                m.splay.as_secs_f64()
            )?;
        }
        Ok(())
    }
}

/// Mean wall-clock time of `repetitions` calls to `f`.
fn mean_time<F: FnMut() -> BigUint>(repetitions: u32, mut f: F) -> Duration {
    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(f());
    }
    start.elapsed() / repetitions
}

/// Time both Fibonacci variants for every configured `n`.
pub fn run(config: &HarnessConfig) -> Report {
    debug!(
        "run(n_values = {:?}, repetitions = {})",
        config.n_values, config.repetitions
    );
    let mut memo = LRUCache::unbounded();
    let mut measurements = Vec::with_capacity(config.n_values.len());

    for &n in &config.n_values {
        let lru = mean_time(config.repetitions, || fibonacci_lru(black_box(n), &mut memo));

        let mut tree = SplayTree::new();
        let splay = mean_time(config.repetitions, || {
            fibonacci_splay(black_box(n), &mut tree)
        });

        debug!("n = {}: lru = {:?}, splay = {:?}", n, lru, splay);
        measurements.push(Measurement { n, lru, splay });
    }

    Report { measurements }
}
