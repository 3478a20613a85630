//! imchart-core - Chart engine for CSV datasets
//!
//! This crate turns typed records into static charts:
//!
//! # Key Components
//!
//! - **Scales**: band, point, linear and ordinal mappings from data to pixels
//! - **Axis**: tick generation and axis layout for any scale
//! - **DrawContext**: immutable frame plus scales shared by every drawing step
//! - **Charts**: boxplot, grouped bar chart and smoothed line chart builders
//! - **Scene**: a tree of marks, serialized to SVG and assembled into an HTML page
//! - **Pipeline**: one async task per chart, joined into a page
//!
//! # Failure model
//!
//! A chart that fails to load or build leaves its page container empty; the
//! other charts still render. Only an invalid page configuration fails the
//! whole page.

pub mod axis;
pub mod charts;
pub mod colormap;
pub mod config;
pub mod context;
pub mod curve;
pub mod error;
pub mod export;
pub mod layout;
pub mod pipeline;
pub mod scale;
pub mod scene;

pub use axis::*;
pub use charts::{build_barplot, build_boxplot, build_lineplot};
pub use colormap::*;
pub use config::*;
pub use context::DrawContext;
pub use curve::natural_path;
pub use error::*;
pub use export::*;
pub use layout::*;
pub use pipeline::*;
pub use scale::*;
pub use scene::{Group, Mark, Scene};
