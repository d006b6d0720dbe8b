use crate::catalog::sectors;
use crate::core::error::{ApiError, SeatCodeError};
use crate::core::state::AppState;
use crate::models::api::{RowQuery, RowValidation, SeatCodeQuery, SeatUpdateRequest, SeatValidation};
use crate::models::person::Person;
use crate::models::seat::{SeatCode, Side};
use crate::seating::code;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Check a seat code without storing it. Always answers 200 with a tagged result.
///
/// GET /seat/validate?code=<SIDE-SECTION-ROW>
pub async fn validate_seat_handler(Query(params): Query<SeatCodeQuery>) -> Json<SeatValidation> {
    let validation = match code::parse(&params.code) {
        Ok(seat) => SeatValidation {
            valid: true,
            label: Some(code::format(&seat)),
            section_label: sectors::find_section(seat.side, &seat.section)
                .map(|entry| entry.label.to_string()),
            seat: Some(seat.to_string()),
            error: None,
        },
        Err(e) => SeatValidation {
            label: Some(code::format_label(&params.code)),
            ..SeatValidation::from(e)
        },
    };

    Json(validation)
}

/// Inline check while a fan types a row
///
/// GET /seat/row?row=<candidate>
pub async fn validate_row_handler(Query(params): Query<RowQuery>) -> Json<RowValidation> {
    let valid = code::validate_row(&params.row);
    let normalized = if valid {
        code::normalize_row(&params.row).ok()
    } else {
        None
    };

    Json(RowValidation { valid, normalized })
}

async fn store_seat(
    state: &AppState,
    person_id: &str,
    seat: Option<&str>,
) -> Result<Person, ApiError> {
    let person = state
        .source
        .update_seat(person_id, seat)
        .await
        .map_err(|e| {
            warn!(person_id = %person_id, error = %e, "Failed to store seat");
            ApiError::Upstream(e.to_string())
        })?
        .ok_or_else(|| ApiError::NotFound(format!("Person {}", person_id)))?;

    state.roster.upsert(person.clone());
    Ok(person)
}

/// Pick or change a seat
///
/// PUT /people/{id}/seat  body: {"side": "NORTE", "section": "427", "row": "A1"}
pub async fn update_seat_handler(
    State(state): State<Arc<AppState>>,
    Path(person_id): Path<String>,
    Json(request): Json<SeatUpdateRequest>,
) -> Result<Json<Person>, ApiError> {
    let side: Side = request.side.parse::<Side>()?;
    let seat = SeatCode::new(side, &request.section, &request.row)?;
    let composed = code::compose(seat.side, &seat.section, &seat.row);

    let person = store_seat(&state, &person_id, Some(&composed)).await?;

    info!(person_id = %person_id, seat = %composed, "Seat updated");

    Ok(Json(person))
}

/// DELETE /people/{id}/seat
pub async fn clear_seat_handler(
    State(state): State<Arc<AppState>>,
    Path(person_id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let person = store_seat(&state, &person_id, None).await?;

    info!(person_id = %person_id, "Seat cleared");

    Ok(Json(person))
}

impl From<SeatCodeError> for SeatValidation {
    fn from(e: SeatCodeError) -> Self {
        SeatValidation {
            valid: false,
            error: Some(e.to_string()),
            ..Default::default()
        }
    }
}
