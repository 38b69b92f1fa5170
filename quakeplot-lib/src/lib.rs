#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for quakeplot
//!
//! This library holds all functionality of the quakeplot tool, which fetches
//! earthquake events from a seismic catalog and charts how many occurred, and how
//! strong they were on average, in each calendar year.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`catalog`]: Event catalog query and response decoding
//! - [`analysis`]: Grouping of magnitudes by year and per-year statistics
//! - [`reports`]: PNG charts and per-year summary reports

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod analysis;
pub mod catalog;
pub mod commands;
pub mod reports;

pub use crate::commands::{Host, run};
