use crate::catalog::sectors;
use crate::core::error::ApiError;
use crate::models::api::CatalogSide;
use crate::models::seat::Side;
use axum::{extract::Path, response::Json};

fn catalog_side(side: Side) -> CatalogSide {
    CatalogSide {
        side,
        position: side.position(),
        sections: sectors::sections_for_side(side),
    }
}

/// GET /catalog
pub async fn catalog_handler() -> Json<Vec<CatalogSide>> {
    Json(Side::ALL.into_iter().map(catalog_side).collect())
}

/// GET /catalog/{side}
pub async fn side_catalog_handler(Path(side): Path<String>) -> Result<Json<CatalogSide>, ApiError> {
    let side: Side = side.parse().map_err(|_| ApiError::UnknownSide(side))?;
    Ok(Json(catalog_side(side)))
}
