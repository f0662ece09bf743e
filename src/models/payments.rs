use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRow {
    pub payment_id: String,
    pub registration_id: String,
    pub participant_email: String,
    pub amount: f64,
    pub transaction_id: String,
    pub paid_at: String,
}
