use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRow {
    pub registration_id: String,
    pub camp_id: String,
    pub participant_name: Option<String>,
    pub participant_email: String,
    pub payment_status: String,
    pub confirmation_status: String,
    pub transaction_id: Option<String>,
    pub fees: Option<f64>,
}
