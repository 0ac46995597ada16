// src/routes.rs

use axum::{Router, http::Method, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers::student, state::AppState};

/// Assembles the main application router.
///
/// * Mounts the student endpoints under `/student`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool, Config).
pub fn create_router(state: AppState) -> Router {
    // The whole surface is read-style GETs consumed by the campus frontend.
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::GET]);

    let student_routes = Router::new()
        .route("/login", get(student::login))
        .route("/update/pwd", get(student::update_pwd))
        .route("/get/list", get(student::get_list));

    Router::new()
        .nest("/student", student_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
