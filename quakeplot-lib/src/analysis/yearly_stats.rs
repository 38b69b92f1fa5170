use super::YearlyMagnitudes;
use serde::Serialize;

/// Summary numbers for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearStats {
    pub year: i32,
    pub count: usize,
    pub average_magnitude: f64,
}

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
#[expect(clippy::cast_precision_loss, reason = "magnitude counts are far below 2^52")]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Number of magnitudes per year, in ascending year order.
#[must_use]
pub fn count_series(magnitudes: &YearlyMagnitudes) -> Vec<(i32, usize)> {
    magnitudes.iter().map(|(year, values)| (year, values.len())).collect()
}

/// Mean magnitude per year, in ascending year order.
#[must_use]
pub fn average_series(magnitudes: &YearlyMagnitudes) -> Vec<(i32, f64)> {
    magnitudes
        .iter()
        .filter_map(|(year, values)| mean(values).map(|average| (year, average)))
        .collect()
}

/// Count and mean magnitude per year, in ascending year order.
#[must_use]
pub fn yearly_stats(magnitudes: &YearlyMagnitudes) -> Vec<YearStats> {
    magnitudes
        .iter()
        .filter_map(|(year, values)| {
            mean(values).map(|average_magnitude| YearStats {
                year,
                count: values.len(),
                average_magnitude,
            })
        })
        .collect()
}
