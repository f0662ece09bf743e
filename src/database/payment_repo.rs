use sqlx::{SqliteConnection, SqlitePool};

use crate::models::PaymentRow;

const SQL_INSERT_PAYMENT: &str = r#"
INSERT INTO payments (
  payment_id,
  registration_id,
  participant_email,
  amount,
  transaction_id,
  paid_at
) VALUES (?, ?, ?, ?, ?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
"#;

pub struct NewPayment<'a> {
    pub payment_id: &'a str,
    pub registration_id: &'a str,
    pub participant_email: &'a str,
    pub amount: f64,
    pub transaction_id: &'a str,
}

pub async fn insert_payment(
    conn: &mut SqliteConnection,
    payment: NewPayment<'_>,
) -> sqlx::Result<u64> {
    let res = sqlx::query(SQL_INSERT_PAYMENT)
        .bind(payment.payment_id)
        .bind(payment.registration_id)
        .bind(payment.participant_email)
        .bind(payment.amount)
        .bind(payment.transaction_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

const SQL_LIST_PAYMENTS_BY_EMAIL: &str = r#"
SELECT
  payment_id,
  registration_id,
  participant_email,
  amount,
  transaction_id,
  paid_at
FROM payments
WHERE participant_email = ?
ORDER BY paid_at DESC
"#;

pub async fn list_by_email(
    pool: &SqlitePool,
    participant_email: &str,
) -> sqlx::Result<Vec<PaymentRow>> {
    sqlx::query_as::<_, PaymentRow>(SQL_LIST_PAYMENTS_BY_EMAIL)
        .bind(participant_email)
        .fetch_all(pool)
        .await
}
