//! Chart builders
//!
//! Each builder turns loaded records and a chart config into a `Scene`:
//! - `boxplot`: five-number summary per category
//! - `bar`: grouped bars with a legend
//! - `line`: smoothed line over ordered labels

pub mod bar;
pub mod boxplot;
pub mod line;

pub use bar::build_barplot;
pub use boxplot::build_boxplot;
pub use line::build_lineplot;

use crate::error::{ChartError, ChartResult};
use crate::layout::Frame;
use crate::scale::LinearScale;

/// Reject a dataset with no rows
fn require_rows<T>(chart: &str, records: &[T]) -> ChartResult<()> {
    if records.is_empty() {
        return Err(ChartError::EmptyDataset {
            chart: chart.to_string(),
        });
    }
    Ok(())
}

/// Value scale from zero to the largest value, zero at the bottom of the plot
fn value_scale(frame: &Frame, values: impl IntoIterator<Item = f64>) -> LinearScale {
    let max = values.into_iter().fold(f64::NEG_INFINITY, f64::max);
    let max = if max.is_finite() { max } else { 0.0 };
    LinearScale::from_zero(max, frame.inner_height(), 0.0)
}

/// Error for a category the scale has no position for
fn unplaced(scale: &str, key: &str) -> ChartError {
    ChartError::Render(format!("{} scale has no position for {:?}", scale, key))
}
