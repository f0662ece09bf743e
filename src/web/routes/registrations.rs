use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::RegistrationRow;
use crate::services::registration_service;
use crate::state::AppState;

pub async fn list_all_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<RegistrationRow>>, AppError> {
    Ok(Json(registration_service::list_all(&state.pool).await?))
}

pub async fn list_by_participant_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<RegistrationRow>>, AppError> {
    Ok(Json(
        registration_service::list_by_participant(&state.pool, &email).await?,
    ))
}

pub async fn get_registration_handler(
    State(state): State<AppState>,
    Path(registration_id): Path<String>,
) -> Result<Json<RegistrationRow>, AppError> {
    Ok(Json(
        registration_service::fetch_registration(&state.pool, &registration_id).await?,
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRegistrationBody {
    pub camp_id: String,
    pub participant_name: Option<String>,
    pub participant_email: String,
    pub fees: Option<f64>,
}

pub async fn submit_registration_handler(
    State(state): State<AppState>,
    Json(body): Json<SubmitRegistrationBody>,
) -> Result<Json<Value>, AppError> {
    let registration_id = registration_service::submit_registration(
        &state.pool,
        registration_service::SubmitRegistrationInput {
            camp_id: body.camp_id,
            participant_name: body.participant_name,
            participant_email: body.participant_email,
            fees: body.fees,
        },
    )
    .await?;
    Ok(Json(serde_json::json!({ "insertedId": registration_id })))
}

pub async fn confirm_registration_handler(
    State(state): State<AppState>,
    Path(registration_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let modified =
        registration_service::confirm_registration(&state.pool, &registration_id).await?;
    Ok(Json(serde_json::json!({ "modifiedCount": modified })))
}

pub async fn cancel_registration_handler(
    State(state): State<AppState>,
    Path(registration_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted = registration_service::cancel_registration(&state.pool, &registration_id).await?;
    Ok(Json(serde_json::json!({ "deletedCount": deleted })))
}
