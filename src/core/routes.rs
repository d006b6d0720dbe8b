// HTTP routes configuration

use crate::core::state::AppState;
use crate::handlers::{admin, catalog, fallback, health, occupancy, people, seats};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))

        // Stadium layout
        .route("/catalog", get(catalog::catalog_handler))
        .route("/catalog/{side}", get(catalog::side_catalog_handler))
        .route("/seat/validate", get(seats::validate_seat_handler))
        .route("/seat/row", get(seats::validate_row_handler))

        // Roster
        .route("/people", get(people::list_people_handler))
        .route("/people/{id}/seatmates", get(people::seatmates_handler))
        .route(
            "/people/{id}/seat",
            put(seats::update_seat_handler).delete(seats::clear_seat_handler),
        )

        // Occupancy
        .route("/occupancy/sides", get(occupancy::sides_handler))
        .route("/occupancy/sides/{side}", get(occupancy::side_handler))
        .route(
            "/occupancy/sides/{side}/sections/{section}",
            get(occupancy::section_handler),
        )
        .route("/occupancy/top", get(occupancy::top_groups_handler))

        // Admin endpoints (require API key)
        .route("/reload", post(admin::reload_handler))

        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)

        .with_state(state)
}
