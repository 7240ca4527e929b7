//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, namely
//! correlation identifiers and request logging with API metrics.

pub mod correlation;
pub mod request_log;

pub use correlation::Correlation;
pub use request_log::RequestLog;
