use sqlx::SqlitePool;

use crate::models::UserRow;

const SQL_FIND_USER_BY_EMAIL: &str = r#"
SELECT
  user_id,
  email,
  name,
  role
FROM users
WHERE email = ?
LIMIT 1
"#;

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> sqlx::Result<Option<UserRow>> {
    sqlx::query_as::<_, UserRow>(SQL_FIND_USER_BY_EMAIL)
        .bind(email)
        .fetch_optional(pool)
        .await
}

const SQL_INSERT_USER: &str = r#"
INSERT INTO users (
  user_id,
  email,
  name,
  role
) VALUES (?, ?, ?, ?)
"#;

pub struct NewUser<'a> {
    pub user_id: &'a str,
    pub email: &'a str,
    pub name: Option<&'a str>,
    pub role: &'a str,
}

pub async fn insert_user(pool: &SqlitePool, user: NewUser<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_USER)
        .bind(user.user_id)
        .bind(user.email)
        .bind(user.name)
        .bind(user.role)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_LOAD_ROLE: &str = r#"
SELECT role FROM users WHERE email = ? LIMIT 1
"#;

pub async fn load_role(pool: &SqlitePool, email: &str) -> sqlx::Result<Option<String>> {
    sqlx::query_scalar::<_, String>(SQL_LOAD_ROLE)
        .bind(email)
        .fetch_optional(pool)
        .await
}
