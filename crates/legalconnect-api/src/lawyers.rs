use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;

use legalconnect_db::Storage;
use legalconnect_types::api::LawyerQuery;
use legalconnect_types::models::{Lawyer, NewLawyer};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/lawyers — optionally filtered by `?specialization=`.
pub async fn list_lawyers(
    State(state): State<AppState>,
    Query(query): Query<LawyerQuery>,
) -> Result<Json<Vec<Lawyer>>, AppError> {
    let lawyers = match query.specialization.as_deref().map(str::trim) {
        Some(area) if !area.is_empty() => state.store.get_lawyers_by_specialization(area).await?,
        _ => state.store.get_lawyers().await?,
    };
    Ok(Json(lawyers))
}

/// POST /api/lawyers
pub async fn create_lawyer(
    State(state): State<AppState>,
    Json(req): Json<NewLawyer>,
) -> Result<impl IntoResponse, AppError> {
    for (field, value) in [
        ("name", &req.name),
        ("specialization", &req.specialization),
        ("region", &req.region),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} must not be empty", field)));
        }
    }

    let lawyer = state.store.create_lawyer(req).await?;
    info!(lawyer_id = lawyer.id, specialization = %lawyer.specialization, "Added lawyer");
    Ok((StatusCode::CREATED, Json(lawyer)))
}
