use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub user_id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
}
