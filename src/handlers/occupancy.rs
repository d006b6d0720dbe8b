use crate::catalog::sectors;
use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::api::{
    SectionDetailResponse, SectionGroup, SideCount, SideDetailResponse, SidesResponse, TopGroup,
    TopGroupsQuery, TopGroupsResponse,
};
use crate::models::seat::Side;
use crate::seating::occupancy;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::debug;

fn parse_side(raw: String) -> Result<Side, ApiError> {
    raw.parse().map_err(|_| ApiError::UnknownSide(raw))
}

/// Fan count per side plus those without a usable seat
///
/// GET /occupancy/sides
pub async fn sides_handler(State(state): State<Arc<AppState>>) -> Json<SidesResponse> {
    let roster = state.roster.snapshot();
    let grouping = occupancy::group_by_side(&roster);

    Json(SidesResponse {
        total: roster.len(),
        sides: Side::ALL
            .into_iter()
            .map(|side| SideCount {
                side,
                count: grouping.people(side).len(),
            })
            .collect(),
        unassigned: grouping.unassigned.len(),
        malformed: grouping.malformed.len(),
    })
}

/// One side broken down by section
///
/// GET /occupancy/sides/{side}
pub async fn side_handler(
    State(state): State<Arc<AppState>>,
    Path(side): Path<String>,
) -> Result<Response, ApiError> {
    let side = parse_side(side)?;
    let roster = state.roster.snapshot();

    let sections: Vec<SectionGroup> = occupancy::group_by_section(&roster, side)
        .into_iter()
        .map(|group| SectionGroup {
            section: group.key.section.clone(),
            label: sectors::find_section(side, &group.key.section).map(|entry| entry.label),
            count: group.count(),
            key: group.key,
            people: group.people,
        })
        .collect();

    Ok(Json(SideDetailResponse {
        side,
        position: side.position(),
        count: occupancy::count_by_side(&roster, side),
        sections,
    })
    .into_response())
}

/// GET /occupancy/sides/{side}/sections/{section}
pub async fn section_handler(
    State(state): State<Arc<AppState>>,
    Path((side, section)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let side = parse_side(side)?;
    let entry = sectors::find_section(side, &section)
        .ok_or_else(|| ApiError::NotFound(format!("Section {} on side {}", section, side)))?;

    let roster = state.roster.snapshot();
    let people = occupancy::group_by_section(&roster, side)
        .into_iter()
        .find(|group| group.key.section == section)
        .map(|group| group.people)
        .unwrap_or_default();

    Ok(Json(SectionDetailResponse {
        side,
        label: entry.label,
        count: occupancy::count_by_section(&roster, side, &section),
        section,
        people,
    })
    .into_response())
}

/// Most populated sections
///
/// GET /occupancy/top?n=<count>
pub async fn top_groups_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopGroupsQuery>,
) -> Result<Json<TopGroupsResponse>, ApiError> {
    let limits = &state.config.occupancy;
    let n = match params.n {
        Some(0) => return Err(ApiError::InvalidParameter("n must be greater than 0".to_string())),
        Some(n) => n.min(limits.max_top_groups),
        None => limits.default_top_groups,
    };

    let roster = state.roster.snapshot();
    let groups: Vec<TopGroup> = occupancy::top_groups(&roster, n)
        .into_iter()
        .map(|(key, count)| TopGroup {
            key: key.to_string(),
            side: key.side,
            section: key.section,
            count,
        })
        .collect();

    debug!(requested = ?params.n, returned = groups.len(), "Top groups computed");

    Ok(Json(TopGroupsResponse { groups }))
}
