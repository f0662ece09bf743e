use sqlx::{SqliteConnection, SqlitePool};

use crate::models::CampRow;

const SQL_INSERT_CAMP: &str = r#"
INSERT INTO camps (
  camp_id,
  camp_name,
  description,
  location,
  date_time,
  healthcare_professional,
  fees,
  participant_count
) VALUES (?, ?, ?, ?, ?, ?, ?, 0)
"#;

pub struct NewCamp<'a> {
    pub camp_id: &'a str,
    pub camp_name: &'a str,
    pub description: Option<&'a str>,
    pub location: Option<&'a str>,
    pub date_time: Option<&'a str>,
    pub healthcare_professional: Option<&'a str>,
    pub fees: Option<f64>,
}

pub async fn insert_camp(pool: &SqlitePool, camp: NewCamp<'_>) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_CAMP)
        .bind(camp.camp_id)
        .bind(camp.camp_name)
        .bind(camp.description)
        .bind(camp.location)
        .bind(camp.date_time)
        .bind(camp.healthcare_professional)
        .bind(camp.fees)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_LIST_CAMPS: &str = r#"
SELECT
  camp_id,
  camp_name,
  description,
  location,
  date_time,
  healthcare_professional,
  fees,
  participant_count
FROM camps
"#;

pub async fn list_camps(pool: &SqlitePool) -> sqlx::Result<Vec<CampRow>> {
    sqlx::query_as::<_, CampRow>(SQL_LIST_CAMPS)
        .fetch_all(pool)
        .await
}

const SQL_LIST_POPULAR: &str = r#"
SELECT
  camp_id,
  camp_name,
  description,
  location,
  date_time,
  healthcare_professional,
  fees,
  participant_count
FROM camps
ORDER BY participant_count DESC
LIMIT ?
"#;

pub async fn list_popular(pool: &SqlitePool, limit: i64) -> sqlx::Result<Vec<CampRow>> {
    sqlx::query_as::<_, CampRow>(SQL_LIST_POPULAR)
        .bind(limit)
        .fetch_all(pool)
        .await
}

const SQL_LOAD_CAMP_BY_ID: &str = r#"
SELECT
  camp_id,
  camp_name,
  description,
  location,
  date_time,
  healthcare_professional,
  fees,
  participant_count
FROM camps
WHERE camp_id = ?
LIMIT 1
"#;

pub async fn load_camp_by_id(pool: &SqlitePool, camp_id: &str) -> sqlx::Result<Option<CampRow>> {
    sqlx::query_as::<_, CampRow>(SQL_LOAD_CAMP_BY_ID)
        .bind(camp_id)
        .fetch_optional(pool)
        .await
}

const SQL_CAMP_EXISTS: &str = r#"
SELECT camp_id FROM camps WHERE camp_id = ? LIMIT 1
"#;

pub async fn camp_exists(conn: &mut SqliteConnection, camp_id: &str) -> sqlx::Result<bool> {
    let row = sqlx::query_scalar::<_, String>(SQL_CAMP_EXISTS)
        .bind(camp_id)
        .fetch_optional(conn)
        .await?;
    Ok(row.is_some())
}

const SQL_DELETE_CAMP: &str = r#"
DELETE FROM camps WHERE camp_id = ?
"#;

pub async fn delete_camp(pool: &SqlitePool, camp_id: &str) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_DELETE_CAMP)
        .bind(camp_id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected())
}

const SQL_ADJUST_PARTICIPANT_COUNT: &str = r#"
UPDATE camps
SET participant_count = participant_count + ?2
WHERE camp_id = ?1
"#;

// Only called inside the submit/cancel transaction; the count never moves
// through any other path.
pub async fn adjust_participant_count(
    conn: &mut SqliteConnection,
    camp_id: &str,
    delta: i64,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_ADJUST_PARTICIPANT_COUNT)
        .bind(camp_id)
        .bind(delta)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

const SQL_RECOUNT_PARTICIPANTS: &str = r#"
UPDATE camps
SET participant_count = (
  SELECT COUNT(*) FROM registrations WHERE registrations.camp_id = camps.camp_id
)
WHERE camp_id = ?
"#;

const SQL_LOAD_PARTICIPANT_COUNT: &str = r#"
SELECT participant_count FROM camps WHERE camp_id = ? LIMIT 1
"#;

pub async fn recount_participants(
    pool: &SqlitePool,
    camp_id: &str,
) -> sqlx::Result<Option<i64>> {
    let res = sqlx::query(SQL_RECOUNT_PARTICIPANTS)
        .bind(camp_id)
        .execute(pool)
        .await?;
    if res.rows_affected() == 0 {
        return Ok(None);
    }
    sqlx::query_scalar::<_, i64>(SQL_LOAD_PARTICIPANT_COUNT)
        .bind(camp_id)
        .fetch_optional(pool)
        .await
}
