use crate::catalog::sectors::SectorEntry;
use crate::models::person::Person;
use crate::models::seat::{SeatCode, SectionKey, Side};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct ApiKeyQuery {
    pub api_key: String,
}

#[derive(Deserialize)]
pub struct SeatCodeQuery {
    pub code: String,
}

#[derive(Deserialize)]
pub struct RowQuery {
    #[serde(default)]
    pub row: String,
}

#[derive(Deserialize)]
pub struct TopGroupsQuery {
    pub n: Option<usize>,
}

/// Body of `PUT /people/{id}/seat`
#[derive(Debug, Deserialize, Serialize)]
pub struct SeatUpdateRequest {
    pub side: String,
    pub section: String,
    pub row: String,
}

#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub success: bool,
    pub message: String,
    pub people: usize,
}

#[derive(Debug, Serialize)]
pub struct CatalogSide {
    pub side: Side,
    pub position: &'static str,
    pub sections: &'static [SectorEntry],
}

/// Outcome of checking a seat code, valid or not
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SeatValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RowValidation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized: Option<String>,
}

#[derive(Serialize)]
pub struct PeopleResponse<'a> {
    pub count: usize,
    pub last_refresh: u64,
    pub people: &'a [Person],
}

#[derive(Serialize)]
pub struct SeatmatesResponse<'a> {
    pub seat: &'a SeatCode,
    pub label: String,
    pub count: usize,
    pub people: Vec<&'a Person>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SideCount {
    pub side: Side,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SidesResponse {
    pub total: usize,
    pub sides: Vec<SideCount>,
    pub unassigned: usize,
    pub malformed: usize,
}

#[derive(Serialize)]
pub struct SectionGroup<'a> {
    pub key: SectionKey,
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub count: usize,
    pub people: Vec<&'a Person>,
}

#[derive(Serialize)]
pub struct SideDetailResponse<'a> {
    pub side: Side,
    pub position: &'static str,
    pub count: usize,
    pub sections: Vec<SectionGroup<'a>>,
}

#[derive(Serialize)]
pub struct SectionDetailResponse<'a> {
    pub side: Side,
    pub section: String,
    pub label: &'static str,
    pub count: usize,
    pub people: Vec<&'a Person>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopGroup {
    pub key: String,
    pub side: Side,
    pub section: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TopGroupsResponse {
    pub groups: Vec<TopGroup>,
}
