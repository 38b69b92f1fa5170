use chrono::NaiveDate;

/// Geographic limits of a catalog query, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

/// Region covering Great Britain and Ireland.
const BRITISH_ISLES: BoundingBox = BoundingBox {
    min_latitude: 50.008,
    max_latitude: 58.723,
    min_longitude: -9.756,
    max_longitude: 1.67,
};

const MIN_MAGNITUDE: f64 = 1.0;

/// Parameters of an event search against the catalog service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub region: BoundingBox,
    pub min_magnitude: f64,
}

impl EventQuery {
    /// Render the query as URL parameters, always ordered oldest event first.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("starttime", self.start.format("%Y-%m-%d").to_string()),
            ("endtime", self.end.format("%Y-%m-%d").to_string()),
            ("minlatitude", self.region.min_latitude.to_string()),
            ("maxlatitude", self.region.max_latitude.to_string()),
            ("minlongitude", self.region.min_longitude.to_string()),
            ("maxlongitude", self.region.max_longitude.to_string()),
            ("minmagnitude", self.min_magnitude.to_string()),
            ("orderby", "time-asc".to_string()),
        ]
    }
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid start date"),
            end: NaiveDate::from_ymd_opt(2018, 10, 11).expect("valid end date"),
            region: BRITISH_ISLES,
            min_magnitude: MIN_MAGNITUDE,
        }
    }
}
