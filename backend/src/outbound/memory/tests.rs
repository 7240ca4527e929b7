//! Tests for the in-memory adapters.

use std::sync::Arc;

use chrono::{Duration, TimeZone};
use rstest::{fixture, rstest};
use uuid::Uuid;

use super::*;
use crate::domain::{
    CorrelationId, CountryCode, CountryRole, CustomerName, CustomerSlug, GenerationInput,
    TrackingNumber, Weight,
};

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn record(number: &str, recorded_at: DateTime<Utc>) -> TrackingRecord {
    TrackingRecord {
        tracking_number: TrackingNumber::new(number).expect("valid number"),
        input: GenerationInput {
            origin: CountryCode::parse("MY", CountryRole::Origin).expect("origin"),
            destination: CountryCode::parse("ID", CountryRole::Destination).expect("destination"),
            weight: Weight::parse("1.234").expect("weight"),
            created_at: recorded_at.fixed_offset(),
            customer_id: Uuid::nil(),
            customer_name: CustomerName::new("RedBox Logistics").expect("name"),
            customer_slug: CustomerSlug::new("redbox-logistics").expect("slug"),
        },
        correlation_id: CorrelationId::generate(),
        recorded_at,
    }
}

fn metric(status_code: u16, response_time_ms: u64, recorded_at: DateTime<Utc>) -> ApiMetric {
    ApiMetric {
        endpoint: "/next-tracking-number".to_owned(),
        method: "GET".to_owned(),
        status_code,
        response_time_ms,
        correlation_id: CorrelationId::generate(),
        recorded_at,
    }
}

#[fixture]
fn store() -> InMemoryTrackingStore {
    InMemoryTrackingStore::default()
}

#[rstest]
#[tokio::test]
async fn duplicate_numbers_are_rejected(store: InMemoryTrackingStore) {
    store
        .insert_if_absent(&record("MYIDF50EDWNIQ", at(0)))
        .await
        .expect("first insert");

    let err = store
        .insert_if_absent(&record("MYIDF50EDWNIQ", at(1)))
        .await
        .expect_err("duplicate insert");

    assert_eq!(
        err,
        TrackingNumberRepositoryError::duplicate_tracking_number("MYIDF50EDWNIQ")
    );
    assert_eq!(store.issued_count(), 1);
}

#[rstest]
#[tokio::test]
async fn concurrent_claims_admit_exactly_one() {
    let store = Arc::new(InMemoryTrackingStore::default());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .insert_if_absent(&record("MYIDS9JHONEUY", at(0)))
                    .await
                    .is_ok()
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.expect("task completes") {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(store.issued_count(), 1);
}

#[rstest]
#[tokio::test]
async fn audit_count_honours_cutoff(store: InMemoryTrackingStore) {
    for (number, hour) in [("MYID1", 1), ("MYID2", 5), ("MYID3", 9)] {
        store.append(&record(number, at(hour))).await.expect("append");
    }

    assert_eq!(store.count_since(at(5)).await.expect("count"), 2);
    assert_eq!(store.count_since(at(10)).await.expect("count"), 0);
    assert_eq!(store.audit_entries().len(), 3);
}

#[rstest]
#[tokio::test]
async fn audit_log_does_not_enforce_uniqueness(store: InMemoryTrackingStore) {
    let entry = record("MYIDF50EDWNIQ", at(0));
    store.append(&entry).await.expect("append");
    store.append(&entry).await.expect("append again");
    assert_eq!(store.audit_entries(), vec![entry.clone(), entry]);
}

#[rstest]
#[tokio::test]
async fn api_metrics_summarise_window() {
    let metrics = InMemoryApiMetrics::default();
    let now = at(12);
    for entry in [
        metric(200, 10, now - Duration::hours(25)),
        metric(200, 20, now - Duration::hours(2)),
        metric(400, 30, now - Duration::hours(1)),
        metric(302, 40, now),
    ] {
        metrics.record(&entry).await.expect("record");
    }

    let summary = metrics
        .summarize_since(now - Duration::hours(24))
        .await
        .expect("summary");

    assert_eq!(
        summary,
        ApiCallSummary {
            total_calls: 3,
            successful_calls: 2,
            total_response_time_ms: 90,
        }
    );
    assert_eq!(metrics.entries().len(), 4);
}

#[rstest]
#[tokio::test]
async fn empty_metrics_summarise_to_zero() {
    let summary = InMemoryApiMetrics::default()
        .summarize_since(at(0))
        .await
        .expect("summary");
    assert_eq!(summary, ApiCallSummary::default());
}
