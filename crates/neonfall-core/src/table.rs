//! Weighted random selection over a fixed candidate list.

use rand::Rng;

/// A weighted table; sampling cost is linear in the entry count.
#[derive(Debug, Clone)]
pub struct WeightedTable<T> {
    entries: Vec<(T, f32)>,
    total: f32,
}

impl<T> WeightedTable<T> {
    /// Builds a table from `(candidate, weight)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty or any weight is non-positive.
    pub fn new(entries: Vec<(T, f32)>) -> Self {
        assert!(!entries.is_empty(), "weighted table needs at least one entry");
        assert!(
            entries.iter().all(|(_, w)| *w > 0.0),
            "weighted table weights must be positive"
        );
        let total = entries.iter().map(|(_, w)| w).sum();
        Self { entries, total }
    }

    /// Draws one candidate with probability proportional to its weight.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> &T {
        let mut roll = rng.gen_range(0.0..self.total);
        for (candidate, weight) in &self.entries {
            if roll < *weight {
                return candidate;
            }
            roll -= weight;
        }
        // Float accumulation can leave a sliver past the last band.
        &self.entries[self.entries.len() - 1].0
    }

    /// Number of candidates in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(candidate, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(T, f32)> {
        self.entries.iter()
    }
}
