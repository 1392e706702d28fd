//! ocat-web
//!
//! Server-rendered pages: the assessment list and the new-assessment form.
//! All data goes through the service client; no page state outlives a
//! request.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;
pub mod view;

use axum::Router;
use axum::routing::get;

use state::WebState;

pub fn app(state: WebState) -> Router {
    Router::new()
        .route("/", get(routes::list_page))
        .route(
            "/assessments/new",
            get(routes::new_assessment_page).post(routes::submit_assessment),
        )
        .with_state(state)
}
