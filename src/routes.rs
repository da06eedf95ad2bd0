use axum::{Router, routing::get};
use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};

use crate::handlers::{
    create_person, delete_person, get_person, health, list_people, update_person,
};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/people", get(list_people).post(create_person))
        .route(
            "/api/people/{id}",
            get(get_person).put(update_person).delete(delete_person),
        )
        .layer(OtelInResponseLayer)
        .layer(OtelAxumLayer::default())
        .route("/health", get(health))
        .with_state(state)
}
