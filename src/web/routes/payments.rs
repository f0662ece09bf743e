use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::models::PaymentRow;
use crate::services::payment_service;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentBody {
    pub price: f64,
}

pub async fn create_payment_intent_handler(
    State(state): State<AppState>,
    Json(body): Json<CreatePaymentIntentBody>,
) -> Result<Json<Value>, AppError> {
    let client_secret = payment_service::create_payment_intent(&state.config, body.price).await?;
    Ok(Json(serde_json::json!({ "clientSecret": client_secret })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPaymentBody {
    pub registration_id: String,
    pub participant_email: String,
    pub amount: f64,
    pub transaction_id: String,
}

pub async fn record_payment_handler(
    State(state): State<AppState>,
    Json(body): Json<RecordPaymentBody>,
) -> Result<Json<Value>, AppError> {
    let payment_id = payment_service::record_payment(
        &state.pool,
        payment_service::RecordPaymentInput {
            registration_id: body.registration_id,
            participant_email: body.participant_email,
            amount: body.amount,
            transaction_id: body.transaction_id,
        },
    )
    .await?;
    Ok(Json(serde_json::json!({ "insertedId": payment_id })))
}

pub async fn payment_history_handler(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<PaymentRow>>, AppError> {
    Ok(Json(
        payment_service::payment_history(&state.pool, &email).await?,
    ))
}
