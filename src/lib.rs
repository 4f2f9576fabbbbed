//! Turns benchmark result files into comparative performance charts.
//!
//! The pipeline is linear: load a JSON results file ([`schema`]), group the
//! records by test and data structure ([`group`]), select filtered and sorted
//! series out of the table ([`select`]), and render one figure per report
//! into a single multi-page document ([`render`]). Report definitions are
//! inlined in the binaries; there is no reusable plotting API here.

pub mod error;
pub mod group;
pub mod parse;
pub mod render;
pub mod schema;
pub mod select;

pub use error::{ChartError, NameError};
