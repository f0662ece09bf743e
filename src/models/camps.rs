use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CampRow {
    pub camp_id: String,
    pub camp_name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date_time: Option<String>,
    pub healthcare_professional: Option<String>,
    pub fees: Option<f64>,
    pub participant_count: i64,
}
