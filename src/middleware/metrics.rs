use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::sync::atomic::{AtomicU64, Ordering};

static REQUEST_COUNT: AtomicU64 = AtomicU64::new(0);
static ERROR_COUNT: AtomicU64 = AtomicU64::new(0);

pub fn request_count() -> u64 {
    REQUEST_COUNT.load(Ordering::Relaxed)
}

pub fn error_count() -> u64 {
    ERROR_COUNT.load(Ordering::Relaxed)
}

/// Counts every request, and every response with a 4xx/5xx status or a
/// middleware rejection, for the /metrics endpoint.
pub struct RequestMetrics;

impl<S, B> Transform<S, ServiceRequest> for RequestMetrics
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestMetricsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestMetricsService { service }))
    }
}

pub struct RequestMetricsService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestMetricsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);

        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    if res.status().is_client_error() || res.status().is_server_error() {
                        ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
                    }
                    Ok(res)
                }
                Err(e) => {
                    ERROR_COUNT.fetch_add(1, Ordering::Relaxed);
                    Err(e)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_reachable() {
        let before = request_count();
        REQUEST_COUNT.fetch_add(1, Ordering::Relaxed);
        assert!(request_count() > before);
        assert!(error_count() <= request_count());
    }
}
