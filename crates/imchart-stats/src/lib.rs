//! imchart-stats - Descriptive statistics for chart summaries
//!
//! This crate provides the small statistical core behind the charts:
//!
//! - **SortedSample**: finite values in ascending order with linear-interpolation quantiles
//! - **FiveNumberSummary**: min, q1, median, q3, max for boxplots
//! - **Groups**: order-preserving partition of records by a categorical key
//!
//! # Quantile definition
//!
//! Quantiles use the fractional rank `h = (n - 1) * p` and interpolate linearly
//! between the two bracketing order statistics. For `[1, 2, ..., 10]` this gives
//! q1 = 3.25, median = 5.5 and q3 = 7.75.

pub mod group;
pub mod summary;

pub use group::*;
pub use summary::*;
