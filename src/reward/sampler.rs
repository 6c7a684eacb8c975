use rand::Rng;

/// Order-dependent cumulative-distribution sampler.
///
/// Entries are `(value, cumulative_threshold)` pairs checked in order; a roll
/// in [0,100) lands on the first entry whose threshold it falls under, and
/// falls through to `fallback` when no threshold matches. The tie-break
/// semantics of the entry order are part of the contract, so tables must list
/// tiers in their fixed draw order.
#[derive(Debug)]
pub struct WeightTable<T: Copy + 'static> {
    entries: &'static [(T, f64)],
    fallback: T,
}

impl<T: Copy + 'static> WeightTable<T> {
    pub const fn new(entries: &'static [(T, f64)], fallback: T) -> Self {
        Self { entries, fallback }
    }

    /// Resolves a roll in [0,100) against the cumulative thresholds.
    /// Pure, so tests can exercise exact boundaries with fixed rolls.
    pub fn pick(&self, roll: f64) -> T {
        for (value, threshold) in self.entries {
            if roll < *threshold {
                return *value;
            }
        }
        self.fallback
    }

    /// Consumes one random draw and resolves it
    pub fn draw(&self) -> T {
        self.pick(rand::rng().random_range(0.0..100.0))
    }
}
