//! Scales mapping data domains to pixel ranges
//!
//! - `BandScale`: categories onto equal, padded bands
//! - `PointScale`: categories onto evenly spaced points (a band scale with zero-width bands)
//! - `LinearScale`: numbers onto a continuous range, which may be inverted
//! - `OrdinalScale`: categories onto a cyclic list of output values
//!
//! Every scale is an immutable value built once from the full dataset.

use std::collections::HashMap;

/// Categorical scale dividing a range into equal bands
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    step: f64,
    bandwidth: f64,
    start: f64,
}

impl BandScale {
    /// Build a band scale; duplicate domain entries keep their first position
    pub fn new<S: Into<String>>(domain: impl IntoIterator<Item = S>, range: (f64, f64)) -> Self {
        let mut keys = Vec::new();
        let mut index = HashMap::new();
        for key in domain {
            let key = key.into();
            if !index.contains_key(&key) {
                index.insert(key.clone(), keys.len());
                keys.push(key);
            }
        }

        let mut scale = Self {
            domain: keys,
            index,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            step: 0.0,
            bandwidth: 0.0,
            start: range.0,
        };
        scale.rescale();
        scale
    }

    /// Set inner and outer padding to the same fraction of the step
    pub fn with_padding(self, padding: f64) -> Self {
        self.with_paddings(padding, padding)
    }

    /// Set inner and outer padding separately
    pub fn with_paddings(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.clamp(0.0, 1.0);
        self.padding_outer = outer.max(0.0);
        self.rescale();
        self
    }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let (r0, r1) = self.range;
        let (lo, hi) = if r1 < r0 { (r1, r0) } else { (r0, r1) };

        let step = (hi - lo) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        self.start = lo + (hi - lo - step * (n - self.padding_inner)) * self.align;
        self.step = step;
        self.bandwidth = step * (1.0 - self.padding_inner);
    }

    /// Start of the band for `key`, or `None` for an unknown category
    pub fn position(&self, key: &str) -> Option<f64> {
        let i = *self.index.get(key)?;
        let (r0, r1) = self.range;
        // Reversed ranges lay bands out from the high end
        let slot = if r1 < r0 { self.domain.len() - 1 - i } else { i };
        Some(self.start + self.step * slot as f64)
    }

    /// Center of the band for `key`
    pub fn center(&self, key: &str) -> Option<f64> {
        self.position(key).map(|x| x + self.bandwidth / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Categorical scale placing each category at a point
#[derive(Clone, Debug)]
pub struct PointScale {
    band: BandScale,
}

impl PointScale {
    pub fn new<S: Into<String>>(domain: impl IntoIterator<Item = S>, range: (f64, f64)) -> Self {
        Self {
            band: BandScale::new(domain, range).with_paddings(1.0, 0.0),
        }
    }

    /// Outer padding, in multiples of the step between points
    pub fn with_padding(self, padding: f64) -> Self {
        Self {
            band: self.band.with_paddings(1.0, padding),
        }
    }

    pub fn position(&self, key: &str) -> Option<f64> {
        self.band.position(key)
    }

    /// Distance between adjacent points
    pub fn step(&self) -> f64 {
        self.band.step()
    }

    pub fn domain(&self) -> &[String] {
        self.band.domain()
    }

    pub fn range(&self) -> (f64, f64) {
        self.band.range()
    }
}

/// Continuous scale with a linear mapping
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Domain `[0, max]` over an inverted range, so zero sits at `bottom`
    pub fn from_zero(max: f64, bottom: f64, top: f64) -> Self {
        Self::new((0.0, max), (bottom, top))
    }

    /// Map a domain value to the range
    ///
    /// A degenerate domain maps every value to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 {
            0.5
        } else {
            (value - d0) / span
        };
        r0 + (r1 - r0) * t
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Categorical scale onto a cyclic list of outputs
#[derive(Clone, Debug)]
pub struct OrdinalScale<T> {
    index: HashMap<String, usize>,
    outputs: Vec<T>,
}

impl<T> OrdinalScale<T> {
    pub fn new<S: Into<String>>(domain: impl IntoIterator<Item = S>, outputs: Vec<T>) -> Self {
        let mut index = HashMap::new();
        for key in domain {
            let next = index.len();
            index.entry(key.into()).or_insert(next);
        }
        Self { index, outputs }
    }

    /// Output for `key`; outputs repeat when the domain is longer than the list
    pub fn get(&self, key: &str) -> Option<&T> {
        if self.outputs.is_empty() {
            return None;
        }
        let i = *self.index.get(key)?;
        self.outputs.get(i % self.outputs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_band_domain_dedup_first_occurrence() {
        let scale = BandScale::new(["Teen", "Adult", "Teen", "Senior"], (0.0, 500.0));
        assert_eq!(scale.domain(), &["Teen", "Adult", "Senior"]);
    }

    #[test]
    fn test_band_padding_layout() {
        // 3 bands over 500px with padding 0.2: step = 500 / 3.2
        let scale = BandScale::new(["a", "b", "c"], (0.0, 500.0)).with_padding(0.2);
        let step = 500.0 / 3.2;
        assert!(approx(scale.step(), step));
        assert!(approx(scale.bandwidth(), step * 0.8));
        assert!(approx(scale.position("a").unwrap(), step * 0.2));
        assert!(approx(scale.position("c").unwrap(), step * 2.2));
        // Outer padding is symmetric
        let right_gap = 500.0 - (scale.position("c").unwrap() + scale.bandwidth());
        assert!(approx(right_gap, scale.position("a").unwrap()));
        assert_eq!(scale.position("missing"), None);
    }

    #[test]
    fn test_band_no_padding_fills_range() {
        let scale = BandScale::new(["a", "b"], (0.0, 100.0));
        assert_eq!(scale.position("a"), Some(0.0));
        assert_eq!(scale.position("b"), Some(50.0));
        assert_eq!(scale.bandwidth(), 50.0);
        assert_eq!(scale.center("b"), Some(75.0));
    }

    #[test]
    fn test_band_empty_domain() {
        let scale = BandScale::new(Vec::<String>::new(), (0.0, 100.0));
        assert!(scale.domain().is_empty());
        assert_eq!(scale.position("a"), None);
    }

    #[test]
    fn test_band_reversed_range() {
        let scale = BandScale::new(["a", "b"], (100.0, 0.0));
        assert_eq!(scale.position("a"), Some(50.0));
        assert_eq!(scale.position("b"), Some(0.0));
    }

    #[test]
    fn test_point_scale_half_padding() {
        // 4 points over 400px with padding 0.5: step = 100, first at 50
        let scale = PointScale::new(["d1", "d2", "d3", "d4"], (0.0, 400.0)).with_padding(0.5);
        assert!(approx(scale.step(), 100.0));
        assert!(approx(scale.position("d1").unwrap(), 50.0));
        assert!(approx(scale.position("d4").unwrap(), 350.0));
    }

    #[test]
    fn test_point_scale_single_point_centered() {
        let scale = PointScale::new(["only"], (0.0, 400.0)).with_padding(0.5);
        assert!(approx(scale.position("only").unwrap(), 200.0));
    }

    #[test]
    fn test_linear_inverted_range() {
        let scale = LinearScale::from_zero(80.0, 300.0, 0.0);
        assert_eq!(scale.map(0.0), 300.0);
        assert_eq!(scale.map(80.0), 0.0);
        assert_eq!(scale.map(40.0), 150.0);
    }

    #[test]
    fn test_linear_degenerate_domain() {
        let scale = LinearScale::from_zero(0.0, 300.0, 0.0);
        assert_eq!(scale.map(0.0), 150.0);
    }

    #[test]
    fn test_ordinal_cycles() {
        let scale = OrdinalScale::new(["a", "b", "c", "d"], vec!["red", "green", "blue"]);
        assert_eq!(scale.get("a"), Some(&"red"));
        assert_eq!(scale.get("c"), Some(&"blue"));
        assert_eq!(scale.get("d"), Some(&"red"));
        assert_eq!(scale.get("z"), None);
    }

    #[test]
    fn test_ordinal_empty_outputs() {
        let scale: OrdinalScale<&str> = OrdinalScale::new(["a"], vec![]);
        assert_eq!(scale.get("a"), None);
    }
}
