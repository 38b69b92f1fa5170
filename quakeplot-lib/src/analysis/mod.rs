//! Grouping of event magnitudes by calendar year
//!
//! # Implementation Model
//!
//! [`group_magnitudes_by_year`] makes one pass over the fetched records and builds
//! a [`YearlyMagnitudes`] map. Records without a magnitude are skipped, so a year
//! only appears as a key once it holds at least one magnitude. The map is ordered
//! by year, which is the order every downstream consumer wants.
//!
//! The calendar year of an event depends on the time zone used to read its
//! timestamp. [`YearBasis`] makes that choice explicit: `Utc` (the default) is
//! stable across machines, `Local` follows the zone of the running process.
//!
//! [`count_series`], [`average_series`], and [`yearly_stats`] derive the per-year
//! numbers the reports draw and print.

mod year_basis;
mod yearly_magnitudes;
mod yearly_stats;

pub use year_basis::YearBasis;
pub use yearly_magnitudes::{YearlyMagnitudes, group_magnitudes_by_year};
pub use yearly_stats::{YearStats, average_series, count_series, mean, yearly_stats};
