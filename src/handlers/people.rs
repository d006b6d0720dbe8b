use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::{PeopleResponse, SeatmatesResponse};
use crate::models::person::Placement;
use crate::seating::{code, occupancy};
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

/// GET /people
pub async fn list_people_handler(State(state): State<Arc<AppState>>) -> Response {
    let roster = state.roster.snapshot();

    Json(PeopleResponse {
        count: roster.len(),
        last_refresh: state.roster.last_refresh(),
        people: &roster,
    })
    .into_response()
}

/// Fans sitting in the same row of the same section as `{id}`
///
/// GET /people/{id}/seatmates
pub async fn seatmates_handler(
    State(state): State<Arc<AppState>>,
    Path(person_id): Path<String>,
) -> Result<Response, ApiError> {
    let person = state
        .roster
        .get(&person_id)
        .ok_or_else(|| ApiError::NotFound(format!("Person {}", person_id)))?;

    let seat = match person.placement() {
        Placement::Seated(seat) => seat,
        Placement::Malformed(e) => return Err(e.into()),
        Placement::Unassigned => {
            return Err(ApiError::NotFound(format!("Seat for person {}", person_id)))
        }
    };

    let roster = state.roster.snapshot();
    let people: Vec<_> = occupancy::seatmates(&roster, &seat)
        .into_iter()
        .filter(|other| other.id != person_id)
        .collect();

    Ok(Json(SeatmatesResponse {
        seat: &seat,
        label: code::format(&seat),
        count: people.len(),
        people,
    })
    .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fan, seeded_state};
    use axum::body::Body;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_people_in_roster_order() {
        let (state, _) = seeded_state(vec![fan("z", None), fan("a", Some("SUL-410-A1"))]);

        let response = list_people_handler(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["count"], 2);
        assert_eq!(body["people"][0]["id"], "z");
        assert_eq!(body["people"][1]["seat"], "SUL-410-A1");
    }

    #[tokio::test]
    async fn test_seatmates_excludes_self() {
        let (state, _) = seeded_state(vec![
            fan("a", Some("NORTE-427-A1")),
            fan("b", Some("NORTE-427-A1")),
            fan("c", Some("NORTE-427-B1")),
        ]);

        let response = seatmates_handler(State(state), Path("a".to_string()))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["label"], "NORTE - 427 - A1");
        assert_eq!(body["count"], 1);
        assert_eq!(body["people"][0]["id"], "b");
    }

    #[tokio::test]
    async fn test_seatmates_without_seat() {
        let (state, _) = seeded_state(vec![fan("a", None)]);

        let err = seatmates_handler(State(state.clone()), Path("a".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = seatmates_handler(State(state), Path("nobody".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_seatmates_blank_seat_is_unassigned() {
        let (state, _) = seeded_state(vec![fan("a", Some("   "))]);

        let err = seatmates_handler(State(state), Path("a".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_seatmates_row_case_insensitive() {
        let (state, _) = seeded_state(vec![
            fan("a", Some("NORTE-427-A1")),
            fan("b", Some("NORTE-427-a1")),
        ]);

        let response = seatmates_handler(State(state), Path("a".to_string()))
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["count"], 1);
        assert_eq!(body["people"][0]["id"], "b");
    }

    #[tokio::test]
    async fn test_seatmates_with_malformed_seat() {
        let (state, _) = seeded_state(vec![fan("a", Some("NORTE-999-A1"))]);

        let err = seatmates_handler(State(state), Path("a".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
