use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::services::user_service::{self, CreateUserOutcome};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    pub email: String,
    pub name: Option<String>,
}

pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(body): Json<CreateUserBody>,
) -> Result<Json<Value>, AppError> {
    let outcome = user_service::get_or_create_user(
        &state.pool,
        &state.config,
        user_service::NewUserInput {
            email: body.email,
            name: body.name,
        },
    )
    .await?;

    match outcome {
        CreateUserOutcome::Created { user_id } => {
            Ok(Json(serde_json::json!({ "insertedId": user_id })))
        }
        CreateUserOutcome::AlreadyExists => Ok(Json(serde_json::json!({
            "message": "User already exists",
            "insertedId": null
        }))),
    }
}

pub async fn user_role_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>, AppError> {
    let role = user_service::lookup_role(&state.pool, &email).await?;
    Ok(Json(serde_json::json!({ "role": role })))
}

pub async fn admin_check_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Value>, AppError> {
    let admin = user_service::is_admin(&state.pool, &email).await?;
    Ok(Json(serde_json::json!({ "admin": admin })))
}
