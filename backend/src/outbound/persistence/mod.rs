//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module. Connections come from a `bb8` pool driven by
//! `diesel-async`.
//!
//! ```ignore
//! use tracking_backend::outbound::persistence::{DbPool, DieselTrackingNumberRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tracking")).await?;
//! let numbers = DieselTrackingNumberRepository::new(pool);
//! ```

mod diesel_api_metrics_repository;
mod diesel_error_mapping;
mod diesel_tracking_audit_log;
mod diesel_tracking_number_repository;
mod models;
mod pool;
mod schema;

pub use diesel_api_metrics_repository::DieselApiMetricsRepository;
pub use diesel_tracking_audit_log::DieselTrackingAuditLog;
pub use diesel_tracking_number_repository::DieselTrackingNumberRepository;
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
