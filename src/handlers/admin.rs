use crate::core::error::ApiError;
use crate::core::startup::refresh_roster;
use crate::core::state::AppState;
use crate::models::api::{ApiKeyQuery, ReloadResponse};
use crate::utils::auth::verify_api_key;
use axum::{
    extract::{Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Force a roster refresh from the source
///
/// POST /reload?api_key=<key>
pub async fn reload_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiKeyQuery>,
) -> Result<Json<ReloadResponse>, ApiError> {
    if !verify_api_key(&params.api_key, &state.config.admin.api_key) {
        warn!("Unauthorized reload attempt");
        return Err(ApiError::InvalidApiKey);
    }

    info!("Starting roster reload");

    // On failure the store keeps the previous snapshot
    let people = refresh_roster(&state)
        .await
        .map_err(|e| ApiError::Upstream(format!("{:#}", e)))?;

    info!(people = people, "Roster reload completed successfully");

    Ok(Json(ReloadResponse {
        success: true,
        message: "Roster reloaded successfully".to_string(),
        people,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::roster::RosterSource;
    use crate::testing::{fan, seeded_state, ADMIN_KEY};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn key(api_key: &str) -> Query<ApiKeyQuery> {
        Query(ApiKeyQuery {
            api_key: api_key.to_string(),
        })
    }

    #[tokio::test]
    async fn test_reload_requires_api_key() {
        let (state, _) = seeded_state(vec![fan("a", None)]);

        let err = reload_handler(State(state), key("wrong")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_reload_picks_up_source_changes() {
        let (state, source) = seeded_state(vec![fan("a", None)]);
        source
            .update_seat("a", Some("LESTE-422-A1"))
            .await
            .unwrap();

        let Json(response) = reload_handler(State(state.clone()), key(ADMIN_KEY))
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.people, 1);
        assert_eq!(
            state.roster.get("a").unwrap().seat.as_deref(),
            Some("LESTE-422-A1")
        );
    }

    #[tokio::test]
    async fn test_reload_source_down_keeps_snapshot() {
        let (state, source) = seeded_state(vec![fan("a", Some("SUL-410-A1"))]);
        source.set_failing(true);

        let err = reload_handler(State(state.clone()), key(ADMIN_KEY))
            .await
            .unwrap_err();

        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
        assert_eq!(state.roster.len(), 1);
    }
}
