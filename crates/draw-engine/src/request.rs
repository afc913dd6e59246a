//! Draw request parameters

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Largest `max - min + 1` a single draw may cover.
///
/// The pool is materialized in memory, so the span is bounded up front.
pub const MAX_POOL_SPAN: u64 = 10_000_000;

/// Everything a single draw needs
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawRequest {
    /// How many values to draw (must be at least 1)
    #[serde(deserialize_with = "count_from_signed")]
    pub count: usize,
    /// Inclusive lower bound
    pub min: i64,
    /// Inclusive upper bound
    pub max: i64,
    /// Draw without replacement
    pub unique: bool,
    /// Sort the result ascending before returning it
    pub sort_ascending: bool,
    /// Values removed from [min, max] before drawing
    pub exclude: BTreeSet<i64>,
    /// Seed text for a reproducible draw; blank means non-reproducible
    pub seed: Option<String>,
}

impl Default for DrawRequest {
    fn default() -> Self {
        Self {
            count: 6,
            min: 1,
            max: 60,
            unique: true,
            sort_ascending: true,
            exclude: BTreeSet::new(),
            seed: None,
        }
    }
}

impl DrawRequest {
    /// Create a request for `count` values in `[min, max]` with default flags
    pub fn new(count: usize, min: i64, max: i64) -> Self {
        Self { count, min, max, ..Self::default() }
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_sort_ascending(mut self, sort_ascending: bool) -> Self {
        self.sort_ascending = sort_ascending;
        self
    }

    pub fn with_exclude(mut self, exclude: impl IntoIterator<Item = i64>) -> Self {
        self.exclude = exclude.into_iter().collect();
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Seed text after trimming, `None` when blank
    pub fn effective_seed(&self) -> Option<&str> {
        self.seed.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Number of integers in `[min, max]`, zero when `min > max`
    pub fn span(&self) -> u64 {
        if self.min > self.max {
            return 0;
        }
        (i128::from(self.max) - i128::from(self.min) + 1)
            .try_into()
            .unwrap_or(u64::MAX)
    }

    /// Ascending values of `[min, max]` not in `exclude`
    pub fn pool(&self) -> Vec<i64> {
        (self.min..=self.max)
            .filter(|v| !self.exclude.contains(v))
            .collect()
    }
}

/// Read `count` as a signed number so that a negative count reaches
/// validation as `0` and fails with `InvalidCount`, not as a parse error.
fn count_from_signed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    let count = i64::deserialize(deserializer)?;
    Ok(usize::try_from(count).unwrap_or(0))
}
