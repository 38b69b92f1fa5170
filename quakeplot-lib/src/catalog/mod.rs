//! Retrieval of earthquake event records from a seismic event catalog
//!
//! This module issues the single outbound query the tool performs and turns the
//! geoJSON response into a flat list of [`EventRecord`] values.
//!
//! # Implementation Model
//!
//! - [`EventQuery`] carries the query parameters. The deployment uses one fixed
//!   query ([`EventQuery::default`]): events from 2000-01-01 to 2018-10-11 inside
//!   a bounding box around the British Isles, magnitude 1.0 and up, oldest first.
//! - [`Provider`] owns the HTTP client and sends the query to the catalog
//!   service, failing on transport errors, non-success statuses, and malformed
//!   bodies. There is no caching and no retry.
//! - [`EventRecord`] is the decoded form of one geoJSON feature: an event time
//!   and an optional magnitude.

mod event_query;
mod event_record;
mod provider;

pub use event_query::{BoundingBox, EventQuery};
pub use event_record::{EventRecord, parse_feature_collection};
pub use provider::{CATALOG_BASE_URL, Provider};
