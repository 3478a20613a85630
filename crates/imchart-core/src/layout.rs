//! Drawing surface geometry

use serde::{Deserialize, Serialize};

use crate::error::{validation, ChartError, ChartResult};

/// Space reserved around the plot area for axes, captions and legends
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// The same margin on every side
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn with_right(mut self, right: f64) -> Self {
        self.right = right;
        self
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(50.0)
    }
}

/// A fixed-size canvas and its margins
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Frame {
    /// Outer width in logical units
    pub width: f64,
    /// Outer height in logical units
    pub height: f64,
    pub margin: Margin,
}

impl Frame {
    pub fn new(width: f64, height: f64, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Width of the plot area inside the margins
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area inside the margins
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Check that the canvas is drawable and leaves a non-empty plot area
    pub fn validate(&self) -> ChartResult<()> {
        validation::validate_dimensions(self.width, self.height)?;
        let m = &self.margin;
        if ![m.top, m.right, m.bottom, m.left].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidConfig(format!(
                "margins must be finite, got {:?}",
                m
            )));
        }
        if !(self.inner_width() > 0.0 && self.inner_height() > 0.0) {
            return Err(ChartError::InvalidConfig(format!(
                "margins leave no plot area in a {}x{} frame",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(600.0, 400.0, Margin::default())
    }
}
