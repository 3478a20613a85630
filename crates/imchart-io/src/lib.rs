//! imchart-io - Data loading for chart datasets
//!
//! This crate turns CSV resources into strongly-typed records:
//!
//! - **CsvTable**: header plus raw string rows, with line numbers kept for errors
//! - **DataSchema**: per-column type inference for inspection
//! - **FromRow**: explicit coercion of a row into a typed record
//!
//! # Design
//!
//! Numeric fields are coerced once at load time. A value that does not parse
//! as a finite number is an error naming its line and column; it never turns
//! into a NaN that would leak into scales or statistics downstream.

pub mod csv_reader;
pub mod reader;
pub mod record;
pub mod schema;

pub use csv_reader::*;
pub use reader::*;
pub use record::*;
pub use schema::*;
