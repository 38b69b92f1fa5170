use crate::Result;
use chrono::{DateTime, Utc};
use ohno::{EnrichableExt, IntoAppError, app_err};
use serde::Deserialize;

/// One earthquake occurrence as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventRecord {
    time: DateTime<Utc>,
    magnitude: Option<f64>,
}

impl EventRecord {
    /// Create a record from an epoch-milliseconds timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamp lies outside the representable calendar range.
    pub fn from_epoch_millis(time_millis: i64, magnitude: Option<f64>) -> Result<Self> {
        let time = DateTime::from_timestamp_millis(time_millis).ok_or_else(|| app_err!("event time {time_millis} ms is out of range"))?;
        Ok(Self { time, magnitude })
    }

    #[must_use]
    pub const fn time(&self) -> DateTime<Utc> {
        self.time
    }

    #[must_use]
    pub fn time_millis(&self) -> i64 {
        self.time.timestamp_millis()
    }

    /// The event magnitude, absent when the catalog has not assigned one.
    #[must_use]
    pub const fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    properties: FeatureProperties,
}

#[derive(Debug, Deserialize)]
struct FeatureProperties {
    time: i64,
    #[serde(default)]
    mag: Option<f64>,
}

/// Decode a geoJSON feature collection into event records, preserving feature order.
///
/// # Errors
///
/// Returns an error if the document is not JSON, lacks the `features` list, has a
/// feature without `properties.time`, or carries an out-of-range event time.
pub fn parse_feature_collection(text: &str) -> Result<Vec<EventRecord>> {
    let collection: FeatureCollection = serde_json::from_str(text).into_app_err("parsing event catalog response")?;

    let mut records = Vec::with_capacity(collection.features.len());
    for (index, feature) in collection.features.into_iter().enumerate() {
        let FeatureProperties { time, mag } = feature.properties;
        let record = EventRecord::from_epoch_millis(time, mag).map_err(|e| e.enrich_with(|| format!("decoding feature #{index}")))?;
        records.push(record);
    }

    Ok(records)
}
