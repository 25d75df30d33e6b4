#![allow(dead_code)]

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middlewares;
pub mod models;
pub mod services;

pub use config::Config;
pub use services::AppState;

/// CSP middleware adds Content-Security-Policy header to all responses
async fn csp_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response.headers_mut().insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(
            "default-src 'self'; \
             script-src 'self' 'unsafe-inline'; \
             style-src 'self' 'unsafe-inline'; \
             img-src 'self' data: https:; \
             connect-src 'self'",
        ),
    );
    response
}

pub fn create_router(app_state: std::sync::Arc<services::AppState>) -> Router {
    // CORS configuration for the browser frontend
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(tower_http::cors::Any); // TODO: restrict to specific origins in production

    Router::new()
        // Public endpoints (no auth required)
        .route("/health", get(handlers::health_check))
        // Metrics endpoint with Basic Auth protection
        .route(
            "/metrics",
            get(handlers::metrics_handler)
                .layer(middleware::from_fn(handlers::metrics_auth_middleware)),
        )
        .nest("/api", api_routes().layer(cors))
        .with_state(app_state)
        .layer(middleware::from_fn(csp_middleware)) // Apply CSP to all responses
        .layer(middleware::from_fn(
            middlewares::metrics::metrics_middleware,
        ))
        .layer(middleware::from_fn(
            middlewares::trace::trace_context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

fn api_routes() -> Router<std::sync::Arc<services::AppState>> {
    Router::new()
        // Catalog
        .route("/subjects", get(handlers::catalog::list_subjects))
        .route("/chapters/{subject}", get(handlers::catalog::list_chapters))
        .route(
            "/topics/{subject}/{chapter}",
            get(handlers::catalog::list_topics),
        )
        // Paper generation and handoff
        .route(
            "/generate-questions",
            post(handlers::papers::generate_questions),
        )
        .route("/tests/{id}", get(handlers::papers::get_test))
        .route(
            "/generate-neet-paper",
            post(handlers::papers::generate_neet_paper).get(handlers::papers::test_neet_paper),
        )
        // Grading and analysis handoff
        .route("/evaluate-test", post(handlers::results::evaluate_test))
        .route("/results/{id}", get(handlers::results::get_results))
        // Used-question history
        .route(
            "/used-questions",
            get(handlers::papers::used_questions)
                .delete(handlers::papers::reset_used_questions),
        )
}
