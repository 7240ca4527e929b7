//! Middleware attaching a request-scoped correlation identifier.
//!
//! Each incoming request receives a fresh UUID held in task-local storage for
//! the lifetime of the request, so handlers, errors, and log events can read
//! it through [`CorrelationId::current`]. The identifier is echoed in the
//! `correlation-id` response header.

use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::error;

use crate::domain::{CORRELATION_ID_HEADER, CorrelationId};

/// Correlation middleware.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use tracking_backend::Correlation;
///
/// let app = App::new().wrap(Correlation);
/// ```
#[derive(Clone)]
pub struct Correlation;

impl<S, B> Transform<S, ServiceRequest> for Correlation
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = CorrelationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorrelationMiddleware { service }))
    }
}

/// Service wrapper produced by [`Correlation`].
pub struct CorrelationMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CorrelationMiddleware<S>
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
        let correlation_id = CorrelationId::generate();
        let header_value = correlation_id.to_string();
        let fut = self.service.call(req);
        Box::pin(CorrelationId::scope(correlation_id, async move {
            let mut res = fut.await?;
            match HeaderValue::from_str(&header_value) {
                Ok(value) => {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static(CORRELATION_ID_HEADER), value);
                }
                Err(error) => {
                    error!(
                        %error,
                        %correlation_id,
                        "failed to encode correlation identifier header"
                    );
                }
            }
            Ok(res)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error as DomainError;
    use actix_web::{App, HttpResponse, test, web};
    use uuid::Uuid;

    async fn call_with_handler<F, Fut, Res>(
        handler: F,
    ) -> (
        actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
        String,
    )
    where
        F: Fn() -> Fut + Clone + 'static,
        Fut: std::future::Future<Output = Res> + 'static,
        Res: actix_web::Responder + 'static,
    {
        let app =
            test::init_service(App::new().wrap(Correlation).route("/", web::get().to(handler)))
                .await;
        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;
        let correlation_id = res
            .headers()
            .get(CORRELATION_ID_HEADER)
            .expect("correlation id header")
            .to_str()
            .expect("header is ascii")
            .to_owned();
        (res, correlation_id)
    }

    #[actix_web::test]
    async fn adds_uuid_header() {
        let (_, correlation_id) =
            call_with_handler(|| async { HttpResponse::Ok().finish() }).await;
        Uuid::parse_str(&correlation_id).expect("header is a UUID");
    }

    #[actix_web::test]
    async fn exposes_correlation_id_in_handler() {
        let (res, correlation_id) = call_with_handler(|| async move {
            let id = CorrelationId::current().expect("correlation id in scope");
            HttpResponse::Ok().body(id.to_string())
        })
        .await;
        let body = test::read_body(res).await;
        let body = std::str::from_utf8(&body).expect("utf8 body");
        assert_eq!(correlation_id, body);
    }

    #[actix_web::test]
    async fn propagates_correlation_id_into_errors() {
        let (res, correlation_id) = call_with_handler(|| async move {
            Result::<HttpResponse, DomainError>::Err(DomainError::invalid_request("bad"))
        })
        .await;
        let body: DomainError = test::read_body_json(res).await;
        assert_eq!(body.correlation_id(), Some(correlation_id.as_str()));
    }

    #[actix_web::test]
    async fn each_request_gets_a_distinct_id() {
        let app = test::init_service(
            App::new()
                .wrap(Correlation)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let second =
            test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_ne!(
            first.headers().get(CORRELATION_ID_HEADER),
            second.headers().get(CORRELATION_ID_HEADER)
        );
    }
}
