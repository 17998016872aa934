use actix_web::HttpResponse;

use crate::middleware::metrics::{error_count, request_count};

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Request counters in Prometheus text format")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    let body = format!(
        "# HELP http_requests_total Total number of HTTP requests\n\
         # TYPE http_requests_total counter\n\
         http_requests_total {}\n\
         \n\
         # HELP http_errors_total Total number of HTTP error responses\n\
         # TYPE http_errors_total counter\n\
         http_errors_total {}\n",
        request_count(),
        error_count()
    );

    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body)
}
