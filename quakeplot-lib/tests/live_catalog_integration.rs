//! Live test against the public USGS catalog.
//!
//! Only built with the `network_tests` feature since it needs internet access.

#![cfg(feature = "network_tests")]

use core::time::Duration;
use quakeplot_lib::analysis::{YearBasis, group_magnitudes_by_year};
use quakeplot_lib::catalog::{EventQuery, Provider};

#[tokio::test]
async fn test_fetch_british_isles_catalog() {
    let provider = Provider::new(None, Duration::from_secs(120)).expect("Failed to create provider");
    let records = provider.fetch_events(&EventQuery::default()).await.expect("live catalog request should succeed");

    assert!(!records.is_empty(), "the fixed query should return events");
    assert!(
        records.windows(2).all(|pair| pair[0].time() <= pair[1].time()),
        "events should arrive oldest first"
    );

    let magnitudes = group_magnitudes_by_year(&records, YearBasis::Utc);
    let years: Vec<_> = magnitudes.years().collect();
    assert!(years.iter().all(|year| (2000..=2018).contains(year)), "unexpected years: {years:?}");
}
