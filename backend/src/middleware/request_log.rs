//! Request logging and per-call API metrics.
//!
//! Logs every request and response and records one [`ApiMetric`] per call.
//! Recording is best effort: a store failure is logged and the response is
//! returned untouched. Wrap this inside [`crate::Correlation`] so the
//! correlation identifier is in scope when the response completes.

use std::rc::Rc;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::USER_AGENT;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::ApiMetricsRepository;
use crate::domain::{ApiMetric, CorrelationId};

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Request logging middleware.
#[derive(Clone)]
pub struct RequestLog {
    metrics: Arc<dyn ApiMetricsRepository>,
    clock: Arc<dyn Clock>,
}

impl RequestLog {
    /// Record API metrics into `metrics`, timestamped by `clock`.
    pub fn new(metrics: Arc<dyn ApiMetricsRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { metrics, clock }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequestLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLogMiddleware {
            service: Rc::new(service),
            metrics: Arc::clone(&self.metrics),
            clock: Arc::clone(&self.clock),
        }))
    }
}

/// Service wrapper produced by [`RequestLog`].
pub struct RequestLogMiddleware<S> {
    service: Rc<S>,
    metrics: Arc<dyn ApiMetricsRepository>,
    clock: Arc<dyn Clock>,
}

/// First address in `X-Forwarded-For`, else the socket peer.
fn client_addr(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|addr| addr.trim().to_owned())
        .filter(|addr| !addr.is_empty())
        .or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()))
}

impl<S, B> Service<ServiceRequest> for RequestLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().to_string();
        let path = req.path().to_owned();
        let user_agent = req
            .headers()
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        let remote_addr = client_addr(&req).unwrap_or_default();
        let service = Rc::clone(&self.service);
        let metrics = Arc::clone(&self.metrics);
        let clock = Arc::clone(&self.clock);

        Box::pin(async move {
            let correlation_id = CorrelationId::current_or_generate();
            info!(
                %correlation_id,
                %method,
                %path,
                %user_agent,
                %remote_addr,
                "incoming request"
            );

            let res = service.call(req).await?;

            let status_code = res.status().as_u16();
            let response_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            info!(
                %correlation_id,
                status_code,
                response_time_ms,
                %method,
                %path,
                "response sent"
            );

            let metric = ApiMetric {
                endpoint: path,
                method,
                status_code,
                response_time_ms,
                correlation_id,
                recorded_at: clock.utc(),
            };
            if let Err(err) = metrics.record(&metric).await {
                warn!(%correlation_id, error = %err, "failed to store api metric");
            }
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use actix_web::{App, HttpResponse, test, web};
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use mockable::DefaultClock;

    use super::*;
    use crate::Correlation;
    use crate::domain::ApiCallSummary;
    use crate::domain::ports::ApiMetricsRepositoryError;

    #[derive(Default)]
    struct RecordingMetrics {
        recorded: Mutex<Vec<ApiMetric>>,
        fail: bool,
    }

    #[async_trait]
    impl ApiMetricsRepository for RecordingMetrics {
        async fn record(&self, metric: &ApiMetric) -> Result<(), ApiMetricsRepositoryError> {
            if self.fail {
                return Err(ApiMetricsRepositoryError::query("insert failed"));
            }
            self.recorded
                .lock()
                .expect("metrics lock")
                .push(metric.clone());
            Ok(())
        }

        async fn summarize_since(
            &self,
            _cutoff: DateTime<Utc>,
        ) -> Result<ApiCallSummary, ApiMetricsRepositoryError> {
            Ok(ApiCallSummary::default())
        }
    }

    #[actix_web::test]
    async fn records_one_metric_per_request() {
        let metrics = Arc::new(RecordingMetrics::default());
        let app = test::init_service(
            App::new()
                .wrap(RequestLog::new(metrics.clone(), Arc::new(DefaultClock)))
                .wrap(Correlation)
                .route("/ok", web::get().to(|| async { HttpResponse::Ok().finish() }))
                .route(
                    "/bad",
                    web::get().to(|| async { HttpResponse::BadRequest().finish() }),
                ),
        )
        .await;

        let ok = test::call_service(&app, test::TestRequest::get().uri("/ok").to_request()).await;
        test::call_service(&app, test::TestRequest::get().uri("/bad").to_request()).await;

        let recorded = metrics.recorded.lock().expect("metrics lock");
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0].endpoint, "/ok");
        assert_eq!(recorded[0].method, "GET");
        assert_eq!(recorded[0].status_code, 200);
        assert!(recorded[0].is_success());
        assert_eq!(recorded[1].status_code, 400);
        assert!(!recorded[1].is_success());

        let header = ok
            .headers()
            .get(crate::domain::CORRELATION_ID_HEADER)
            .expect("correlation header")
            .to_str()
            .expect("ascii header");
        assert_eq!(recorded[0].correlation_id.to_string(), header);
    }

    #[actix_web::test]
    async fn metric_store_failure_keeps_response() {
        let metrics = Arc::new(RecordingMetrics {
            fail: true,
            ..RecordingMetrics::default()
        });
        let app = test::init_service(
            App::new()
                .wrap(RequestLog::new(metrics, Arc::new(DefaultClock)))
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(res.status().is_success());
    }

    #[actix_web::test]
    async fn client_addr_prefers_forwarded_for() {
        let req = test::TestRequest::get()
            .insert_header((FORWARDED_FOR, "203.0.113.7, 10.0.0.1"))
            .peer_addr("192.0.2.1:4000".parse().expect("socket addr"))
            .to_srv_request();
        assert_eq!(client_addr(&req).as_deref(), Some("203.0.113.7"));
    }

    #[actix_web::test]
    async fn client_addr_falls_back_to_peer() {
        let req = test::TestRequest::get()
            .peer_addr("192.0.2.1:4000".parse().expect("socket addr"))
            .to_srv_request();
        assert_eq!(client_addr(&req).as_deref(), Some("192.0.2.1"));
    }
}
