//! Random sampling for the simulated hiccup and heartbeat.

use std::collections::VecDeque;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn sample(&mut self) -> f64;
}

/// Thread-local RNG from `rand`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn sample(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Replays a fixed sequence of samples, then returns `fallback` forever.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: VecDeque<f64>,
    fallback: f64,
}

impl SequenceRandom {
    /// A fallback of `1.0` never triggers any probability.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self::with_fallback(values, 1.0)
    }

    pub fn with_fallback(values: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback,
        }
    }

    /// Source that never triggers anything.
    pub fn never() -> Self {
        Self::new([])
    }
}

impl RandomSource for SequenceRandom {
    fn sample(&mut self) -> f64 {
        self.values.pop_front().unwrap_or(self.fallback)
    }
}
