use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The two kinds of draws the generator and the inserter need.
pub trait RandomSource {
    /// Uniform index in `[0, n)`. `n` must be positive.
    fn choose_index(&mut self, n: usize) -> usize;

    /// Uniform integer in `[low, high]`.
    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        RngSource(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        RngSource(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn choose_index(&mut self, n: usize) -> usize {
        self.0.random_range(0..n)
    }

    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.0.random_range(low..=high)
    }
}

/// Replays a fixed list of draws, in order.
///
/// Every draw must lie inside the range requested at that point, and the
/// script must not run out; both are programming errors and panic.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    draws: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = usize>>(draws: I) -> Self {
        Self { draws: draws.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    fn next_draw(&mut self, low: usize, high: usize) -> usize {
        let d = self.draws.pop_front()
            .unwrap_or_else(|| panic!("ScriptedSource exhausted"));
        assert!(low <= d && d <= high, "scripted draw {d} outside [{low}, {high}]");
        d
    }
}

impl RandomSource for ScriptedSource {
    fn choose_index(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot choose from an empty range");
        self.next_draw(0, n - 1)
    }

    fn uniform_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.next_draw(low, high)
    }
}
