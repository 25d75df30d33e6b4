use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::metrics::{HTTP_REQUESTS_TOTAL, HTTP_REQUEST_DURATION_SECONDS};

/// Middleware collecting HTTP metrics (latency, request count)
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    // Execute the request
    let response = next.run(req).await;

    // Record metrics
    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &path, &status])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &path])
        .observe(duration);

    response
}

/// Collapse dynamic route segments (subject and chapter names, test and
/// result ids) so label cardinality stays bounded.
fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["api", "chapters", _] => "/api/chapters/{subject}".to_string(),
        ["api", "topics", _, _] => "/api/topics/{subject}/{chapter}".to_string(),
        ["api", "tests", _] => "/api/tests/{id}".to_string(),
        ["api", "results", _] => "/api/results/{id}".to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/api/chapters/physics"), "/api/chapters/{subject}");
        assert_eq!(
            normalize_path("/api/topics/physics/mechanics"),
            "/api/topics/{subject}/{chapter}"
        );
        assert_eq!(
            normalize_path("/api/tests/550e8400-e29b-41d4-a716-446655440000"),
            "/api/tests/{id}"
        );
        assert_eq!(
            normalize_path("/api/results/550e8400-e29b-41d4-a716-446655440000"),
            "/api/results/{id}"
        );
        assert_eq!(normalize_path("/api/subjects"), "/api/subjects");
        assert_eq!(normalize_path("/health"), "/health");
        assert_eq!(normalize_path("/metrics"), "/metrics");
    }
}
