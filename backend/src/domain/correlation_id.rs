//! Request-scoped correlation identifier threaded through logs and envelopes.
//!
//! `CorrelationId` identifies one logical request. The correlation middleware
//! places the request-level identifier in task-local storage so errors and log
//! events can pick it up without explicit parameter threading. The tracking
//! service rotates to a fresh identifier for every retry attempt, so the
//! identifier of the successful attempt may differ from the request-level one.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`CorrelationId::scope`] when moving work onto another task.

use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// HTTP header carrying the request-level correlation identifier.
pub const CORRELATION_ID_HEADER: &str = "correlation-id";

task_local! {
    static CORRELATION_ID: CorrelationId;
}

/// Opaque UUID identifying one request or one generation attempt.
///
/// # Examples
/// ```
/// use tracking_backend::domain::CorrelationId;
///
/// let id: CorrelationId = "4f9e6b3a-1c2d-4e5f-8a7b-9c0d1e2f3a4b".parse().expect("uuid");
/// assert_eq!(id.simple(), "4f9e6b3a1c2d4e5f8a7b9c0d1e2f3a4b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    /// Generate a new random correlation identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn generate() -> Self { Self(Uuid::new_v4()) }

    /// Returns the request-level identifier if one is in scope.
    #[must_use]
    #[rustfmt::skip]
    pub fn current() -> Option<Self> { CORRELATION_ID.try_with(|id| *id).ok() }

    /// Returns the identifier in scope, or a fresh one outside a request.
    #[must_use]
    pub fn current_or_generate() -> Self {
        Self::current().unwrap_or_else(Self::generate)
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Lowercase hexadecimal rendering with the hyphens stripped.
    #[must_use]
    pub fn simple(&self) -> String {
        self.0.simple().to_string()
    }

    /// Execute the provided future with the supplied identifier in scope.
    pub async fn scope<Fut>(correlation_id: CorrelationId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CORRELATION_ID.scope(correlation_id, fut).await
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for CorrelationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}
