//! ocat-api
//!
//! HTTP service layer over the assessment store. Exposes list, create and
//! soft-delete for assessments plus read-only instrument metadata.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{delete, get};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the service router with its middleware stack.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{instrument_type}",
            get(routes::instruments::get_instrument_detail),
        )
        .route(
            "/assessments",
            get(routes::assessments::list_assessments).post(routes::assessments::create_assessment),
        )
        .route(
            "/assessments/{id}",
            delete(routes::assessments::delete_assessment),
        )
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}
