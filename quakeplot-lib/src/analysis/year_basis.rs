use chrono::{DateTime, Datelike, Local, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Time zone used to decide which calendar year an event belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum YearBasis {
    /// Read event times in UTC
    #[default]
    Utc,

    /// Read event times in the time zone of the running process
    Local,
}

impl YearBasis {
    #[must_use]
    pub fn year_of(self, time: DateTime<Utc>) -> i32 {
        match self {
            Self::Utc => time.year(),
            Self::Local => time.with_timezone(&Local).year(),
        }
    }
}
