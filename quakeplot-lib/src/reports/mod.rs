//! Chart rendering and per-year summary reports
//!
//! # Implementation Model
//!
//! The chart generator turns a year-keyed series into a PNG line chart using
//! `plotters` with its bitmap backend. The pipeline calls it twice: once for the
//! number of events per year and once for the average magnitude per year.
//!
//! Three text generators render the same per-year summary ([`YearStats`]):
//! - **Console**: aligned table with an optionally colored header
//! - **CSV**: `year,count,average_magnitude` rows
//! - **JSON**: pretty-printed object holding a `years` array
//!
//! Text generators write into any [`core::fmt::Write`] so callers decide whether
//! the output goes to a terminal or a file.
//!
//! [`YearStats`]: crate::analysis::YearStats

mod chart;
mod console;
mod csv;
mod json;

pub use chart::{LineChart, render_line_chart};
pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use json::generate as generate_json;
