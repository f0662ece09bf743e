use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::CampRow;
use crate::services::camp_service;
use crate::state::AppState;

pub async fn list_camps_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CampRow>>, AppError> {
    Ok(Json(camp_service::list_camps(&state.pool).await?))
}

pub async fn popular_camps_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<CampRow>>, AppError> {
    Ok(Json(camp_service::popular_camps(&state.pool).await?))
}

pub async fn get_camp_handler(
    State(state): State<AppState>,
    Path(camp_id): Path<String>,
) -> Result<Json<CampRow>, AppError> {
    Ok(Json(camp_service::get_camp(&state.pool, &camp_id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampBody {
    pub camp_name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date_time: Option<String>,
    pub healthcare_professional: Option<String>,
    pub fees: Option<f64>,
}

pub async fn create_camp_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateCampBody>,
) -> Result<Json<Value>, AppError> {
    let camp_id = camp_service::create_camp(
        &state.pool,
        camp_service::NewCampInput {
            camp_name: body.camp_name,
            description: body.description,
            location: body.location,
            date_time: body.date_time,
            healthcare_professional: body.healthcare_professional,
            fees: body.fees,
        },
    )
    .await?;
    Ok(Json(serde_json::json!({ "insertedId": camp_id })))
}

pub async fn delete_camp_handler(
    State(state): State<AppState>,
    Path(camp_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = camp_service::delete_camp(&state.pool, &camp_id).await?;
    Ok(Json(serde_json::json!({ "deletedCount": deleted })))
}

pub async fn recount_camp_handler(
    State(state): State<AppState>,
    Path(camp_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let count = camp_service::recount_participants(&state.pool, &camp_id).await?;
    Ok(Json(serde_json::json!({ "participantCount": count })))
}
