use sqlx::{SqliteConnection, SqlitePool};

use crate::models::RegistrationRow;

const SQL_INSERT_REGISTRATION: &str = r#"
INSERT INTO registrations (
  registration_id,
  camp_id,
  participant_name,
  participant_email,
  payment_status,
  confirmation_status,
  fees
) VALUES (?, ?, ?, ?, 'unpaid', 'pending', ?)
"#;

pub struct NewRegistration<'a> {
    pub registration_id: &'a str,
    pub camp_id: &'a str,
    pub participant_name: Option<&'a str>,
    pub participant_email: &'a str,
    pub fees: Option<f64>,
}

pub async fn insert_registration(
    conn: &mut SqliteConnection,
    reg: NewRegistration<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_REGISTRATION)
        .bind(reg.registration_id)
        .bind(reg.camp_id)
        .bind(reg.participant_name)
        .bind(reg.participant_email)
        .bind(reg.fees)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

const SQL_LIST_BY_EMAIL: &str = r#"
SELECT
  registration_id,
  camp_id,
  participant_name,
  participant_email,
  payment_status,
  confirmation_status,
  transaction_id,
  fees
FROM registrations
WHERE participant_email = ?
"#;

pub async fn list_by_email(
    pool: &SqlitePool,
    participant_email: &str,
) -> sqlx::Result<Vec<RegistrationRow>> {
    sqlx::query_as::<_, RegistrationRow>(SQL_LIST_BY_EMAIL)
        .bind(participant_email)
        .fetch_all(pool)
        .await
}

const SQL_LIST_ALL: &str = r#"
SELECT
  registration_id,
  camp_id,
  participant_name,
  participant_email,
  payment_status,
  confirmation_status,
  transaction_id,
  fees
FROM registrations
"#;

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<RegistrationRow>> {
    sqlx::query_as::<_, RegistrationRow>(SQL_LIST_ALL)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_BY_ID: &str = r#"
SELECT
  registration_id,
  camp_id,
  participant_name,
  participant_email,
  payment_status,
  confirmation_status,
  transaction_id,
  fees
FROM registrations
WHERE registration_id = ?
LIMIT 1
"#;

pub async fn load_by_id(
    pool: &SqlitePool,
    registration_id: &str,
) -> sqlx::Result<Option<RegistrationRow>> {
    sqlx::query_as::<_, RegistrationRow>(SQL_LOAD_BY_ID)
        .bind(registration_id)
        .fetch_optional(pool)
        .await
}

const SQL_DELETE_REGISTRATION: &str = r#"
DELETE FROM registrations
WHERE registration_id = ?
RETURNING camp_id
"#;

// Returns the camp id of the deleted row so the caller can settle the
// participant count in the same transaction.
pub async fn delete_registration(
    conn: &mut SqliteConnection,
    registration_id: &str,
) -> sqlx::Result<Option<String>> {
    sqlx::query_scalar::<_, String>(SQL_DELETE_REGISTRATION)
        .bind(registration_id)
        .fetch_optional(conn)
        .await
}

const SQL_CONFIRM_REGISTRATION: &str = r#"
UPDATE registrations
SET confirmation_status = 'confirmed'
WHERE registration_id = ?
"#;

pub async fn confirm_registration(
    pool: &SqlitePool,
    registration_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_CONFIRM_REGISTRATION)
        .bind(registration_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_MARK_PAID: &str = r#"
UPDATE registrations
SET payment_status = 'paid',
    confirmation_status = 'confirmed',
    transaction_id = ?2
WHERE registration_id = ?1
"#;

pub async fn mark_paid(
    conn: &mut SqliteConnection,
    registration_id: &str,
    transaction_id: &str,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_MARK_PAID)
        .bind(registration_id)
        .bind(transaction_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}
