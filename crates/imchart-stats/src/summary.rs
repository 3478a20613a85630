//! Quantiles and five-number summaries
//!
//! Non-finite values are dropped before sorting.

use serde::{Deserialize, Serialize};

/// Finite values sorted ascending
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SortedSample {
    values: Vec<f64>,
}

impl SortedSample {
    /// Build a sample from unsorted data
    pub fn from_data(data: &[f64]) -> Self {
        let mut values: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
        values.sort_by(|a, b| a.total_cmp(b));
        Self { values }
    }

    /// Quantile `p` in [0, 1] by linear interpolation between order statistics
    ///
    /// Returns `None` for an empty sample or a NaN `p`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        quantile_sorted(&self.values, p)
    }

    /// Min, quartiles and max; `None` for an empty sample
    pub fn five_number_summary(&self) -> Option<FiveNumberSummary> {
        let min = *self.values.first()?;
        let max = *self.values.last()?;

        Some(FiveNumberSummary {
            min,
            q1: self.quantile(0.25)?,
            median: self.quantile(0.5)?,
            q3: self.quantile(0.75)?,
            max,
        })
    }

    pub fn median(&self) -> Option<f64> {
        self.quantile(0.5)
    }

    pub fn min(&self) -> Option<f64> {
        self.values.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Number of finite values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Linear-interpolation quantile of an ascending slice
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 || p.is_nan() {
        return None;
    }
    if p <= 0.0 || n < 2 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }

    let h = (n - 1) as f64 * p;
    let i0 = (h.floor() as usize).min(n - 2);
    let lo = sorted[i0];
    let hi = sorted[i0 + 1];
    // Rounding must not carry the result past the bracketing values
    Some((lo + (hi - lo) * (h - i0 as f64)).min(hi).max(lo))
}

/// Quantile of unsorted data
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    SortedSample::from_data(data).quantile(p)
}

/// Five number summary statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Summarize unsorted data; `None` when no finite value is present
    pub fn from_data(data: &[f64]) -> Option<Self> {
        SortedSample::from_data(data).five_number_summary()
    }

    /// Interquartile range (q3 - q1)
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Range (max - min)
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check min <= q1 <= median <= q3 <= max
    pub fn is_ordered(&self) -> bool {
        self.min <= self.q1
            && self.q1 <= self.median
            && self.median <= self.q3
            && self.q3 <= self.max
    }
}
