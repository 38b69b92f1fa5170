use super::YearBasis;
use crate::catalog::EventRecord;
use std::collections::BTreeMap;

const LOG_TARGET: &str = "  analysis";

/// Magnitudes observed in each calendar year, keyed in ascending year order.
///
/// Every year present holds at least one magnitude, in the order the records were seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearlyMagnitudes {
    by_year: BTreeMap<i32, Vec<f64>>,
}

impl YearlyMagnitudes {
    #[must_use]
    pub const fn new() -> Self {
        Self { by_year: BTreeMap::new() }
    }

    /// Append a magnitude to a year's sequence, creating the sequence on first use.
    pub fn push(&mut self, year: i32, magnitude: f64) {
        self.by_year.entry(year).or_default().push(magnitude);
    }

    #[must_use]
    pub fn get(&self, year: i32) -> Option<&[f64]> {
        self.by_year.get(&year).map(Vec::as_slice)
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.by_year.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &[f64])> {
        self.by_year.iter().map(|(year, magnitudes)| (*year, magnitudes.as_slice()))
    }

    /// Number of distinct years.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    /// Number of magnitudes across all years.
    #[must_use]
    pub fn total_magnitudes(&self) -> usize {
        self.by_year.values().map(Vec::len).sum()
    }
}

/// Group the magnitudes of `records` by the calendar year of each event.
///
/// Records without a magnitude contribute nothing.
pub fn group_magnitudes_by_year<'a>(records: impl IntoIterator<Item = &'a EventRecord>, basis: YearBasis) -> YearlyMagnitudes {
    let mut magnitudes = YearlyMagnitudes::new();
    let mut skipped = 0usize;

    for record in records {
        match record.magnitude() {
            Some(magnitude) => magnitudes.push(basis.year_of(record.time()), magnitude),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        log::debug!(target: LOG_TARGET, "Skipped {skipped} event(s) without a magnitude");
    }

    magnitudes
}
