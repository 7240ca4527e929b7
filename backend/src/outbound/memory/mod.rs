//! In-memory adapters for running without a database.
//!
//! Used when no `database_url` is configured and by integration tests. The
//! tracking store enforces uniqueness with a mutex-guarded map, so exactly one
//! of several concurrent claims of the same number succeeds.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::{
    ApiMetricsRepository, ApiMetricsRepositoryError, TrackingAuditLog, TrackingAuditLogError,
    TrackingNumberRepository, TrackingNumberRepositoryError,
};
use crate::domain::{ApiCallSummary, ApiMetric, TrackingRecord};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, String> {
    mutex
        .lock()
        .map_err(|_| "in-memory store lock poisoned".to_owned())
}

/// Tracking number store and audit log backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryTrackingStore {
    issued: Mutex<HashMap<String, TrackingRecord>>,
    audit: Mutex<Vec<TrackingRecord>>,
}

impl InMemoryTrackingStore {
    /// Number of claimed tracking numbers.
    pub fn issued_count(&self) -> usize {
        lock(&self.issued).map_or(0, |issued| issued.len())
    }

    /// Snapshot of the audit trail in append order.
    pub fn audit_entries(&self) -> Vec<TrackingRecord> {
        lock(&self.audit).map_or_else(|_| Vec::new(), |audit| audit.clone())
    }
}

#[async_trait]
impl TrackingNumberRepository for InMemoryTrackingStore {
    async fn insert_if_absent(
        &self,
        record: &TrackingRecord,
    ) -> Result<(), TrackingNumberRepositoryError> {
        let mut issued = lock(&self.issued).map_err(TrackingNumberRepositoryError::query)?;
        let key = record.tracking_number.as_ref();
        if issued.contains_key(key) {
            return Err(TrackingNumberRepositoryError::duplicate_tracking_number(key));
        }
        issued.insert(key.to_owned(), record.clone());
        Ok(())
    }
}

#[async_trait]
impl TrackingAuditLog for InMemoryTrackingStore {
    async fn append(&self, record: &TrackingRecord) -> Result<(), TrackingAuditLogError> {
        lock(&self.audit)
            .map_err(TrackingAuditLogError::query)?
            .push(record.clone());
        Ok(())
    }

    async fn count_since(&self, cutoff: DateTime<Utc>) -> Result<u64, TrackingAuditLogError> {
        let audit = lock(&self.audit).map_err(TrackingAuditLogError::query)?;
        let count = audit
            .iter()
            .filter(|record| record.recorded_at >= cutoff)
            .count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }
}

/// API call measurements backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryApiMetrics {
    metrics: Mutex<Vec<ApiMetric>>,
}

impl InMemoryApiMetrics {
    /// Snapshot of recorded measurements in arrival order.
    pub fn entries(&self) -> Vec<ApiMetric> {
        lock(&self.metrics).map_or_else(|_| Vec::new(), |metrics| metrics.clone())
    }
}

#[async_trait]
impl ApiMetricsRepository for InMemoryApiMetrics {
    async fn record(&self, metric: &ApiMetric) -> Result<(), ApiMetricsRepositoryError> {
        lock(&self.metrics)
            .map_err(ApiMetricsRepositoryError::query)?
            .push(metric.clone());
        Ok(())
    }

    async fn summarize_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<ApiCallSummary, ApiMetricsRepositoryError> {
        let metrics = lock(&self.metrics).map_err(ApiMetricsRepositoryError::query)?;
        Ok(metrics
            .iter()
            .filter(|metric| metric.recorded_at >= cutoff)
            .fold(ApiCallSummary::default(), |mut summary, metric| {
                summary.record(metric);
                summary
            }))
    }
}

#[cfg(test)]
mod tests;
