use sqlx::SqlitePool;
use uuid::Uuid;

use crate::config::Config;
use crate::database::{payment_repo, registration_repo};
use crate::error::AppError;
use crate::models::PaymentRow;
use crate::services::{ensure_well_formed_id, payment_gateway};

pub const MINIMUM_PRICE: f64 = 1.0;

// Gateways charge in integer minor units; round to the nearest cent.
pub fn to_minor_units(price: f64) -> i64 {
    (price * 100.0).round() as i64
}

/// Validates the price and asks the gateway for an intent. Pure passthrough;
/// no local state is written.
pub async fn create_payment_intent(config: &Config, price: f64) -> Result<String, AppError> {
    if !(price >= MINIMUM_PRICE) {
        return Err(AppError::InvalidArgument(format!(
            "price must be at least {MINIMUM_PRICE}"
        )));
    }
    let amount = to_minor_units(price);
    Ok(payment_gateway::create_payment_intent(config, amount).await?)
}

pub struct RecordPaymentInput {
    pub registration_id: String,
    pub participant_email: String,
    pub amount: f64,
    pub transaction_id: String,
}

/// Appends the payment record and flips the registration to paid/confirmed in
/// one transaction; a payment row can never exist without the matching
/// registration update.
pub async fn record_payment(
    pool: &SqlitePool,
    input: RecordPaymentInput,
) -> Result<String, AppError> {
    ensure_well_formed_id(&input.registration_id, "registration")?;
    if input.transaction_id.trim().is_empty() {
        return Err(AppError::InvalidArgument(
            "transactionId is required".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let payment_id = Uuid::new_v4().to_string();
    payment_repo::insert_payment(
        &mut *tx,
        payment_repo::NewPayment {
            payment_id: &payment_id,
            registration_id: &input.registration_id,
            participant_email: &input.participant_email,
            amount: input.amount,
            transaction_id: &input.transaction_id,
        },
    )
    .await?;

    let updated =
        registration_repo::mark_paid(&mut *tx, &input.registration_id, &input.transaction_id)
            .await?;
    if updated == 0 {
        // Dropping the transaction rolls the payment insert back with it.
        return Err(AppError::NotFound("registration"));
    }

    tx.commit().await?;
    Ok(payment_id)
}

pub async fn payment_history(
    pool: &SqlitePool,
    participant_email: &str,
) -> Result<Vec<PaymentRow>, AppError> {
    Ok(payment_repo::list_by_email(pool, participant_email).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema;
    use crate::services::camp_service::{self, NewCampInput};
    use crate::services::registration_service::{self, SubmitRegistrationInput};

    async fn test_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        schema::init_schema(&pool).await.unwrap();
        pool
    }

    async fn seed_registration(pool: &SqlitePool) -> String {
        let camp_id = camp_service::create_camp(
            pool,
            NewCampInput {
                camp_name: "Cardiology Camp".to_string(),
                description: None,
                location: None,
                date_time: None,
                healthcare_professional: None,
                fees: Some(30.0),
            },
        )
        .await
        .unwrap();
        registration_service::submit_registration(
            pool,
            SubmitRegistrationInput {
                camp_id,
                participant_name: None,
                participant_email: "payer@example.com".to_string(),
                fees: Some(30.0),
            },
        )
        .await
        .unwrap()
    }

    #[test]
    fn prices_convert_to_rounded_minor_units() {
        assert_eq!(to_minor_units(12.345), 1235);
        assert_eq!(to_minor_units(1.0), 100);
        assert_eq!(to_minor_units(19.994), 1999);
    }

    #[tokio::test]
    async fn intent_below_minimum_price_is_rejected_before_the_gateway() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            organizer_emails: Vec::new(),
            // Unroutable on purpose; the guard must fire first.
            payment_api_url: "http://127.0.0.1:1".to_string(),
            payment_secret_key: "sk_test".to_string(),
            payment_currency: "usd".to_string(),
            allowed_origins: Vec::new(),
        };

        let err = create_payment_intent(&config, 0.0).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));

        let err = create_payment_intent(&config, 0.99).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn record_payment_flips_registration_to_paid_and_confirmed() {
        let pool = test_pool().await;
        let registration_id = seed_registration(&pool).await;

        record_payment(
            &pool,
            RecordPaymentInput {
                registration_id: registration_id.clone(),
                participant_email: "payer@example.com".to_string(),
                amount: 30.0,
                transaction_id: "txn_123".to_string(),
            },
        )
        .await
        .unwrap();

        let registration = registration_service::fetch_registration(&pool, &registration_id)
            .await
            .unwrap();
        assert_eq!(registration.payment_status, "paid");
        assert_eq!(registration.confirmation_status, "confirmed");
        assert_eq!(registration.transaction_id.as_deref(), Some("txn_123"));

        let history = payment_history(&pool, "payer@example.com").await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].transaction_id, "txn_123");
    }

    #[tokio::test]
    async fn record_payment_on_unknown_registration_leaves_no_payment_row() {
        let pool = test_pool().await;
        let missing = Uuid::new_v4().to_string();

        let err = record_payment(
            &pool,
            RecordPaymentInput {
                registration_id: missing,
                participant_email: "payer@example.com".to_string(),
                amount: 30.0,
                transaction_id: "txn_456".to_string(),
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let history = payment_history(&pool, "payer@example.com").await.unwrap();
        assert!(history.is_empty());
    }

    #[tokio::test]
    async fn payment_history_is_ordered_most_recent_first() {
        let pool = test_pool().await;
        let registration_id = seed_registration(&pool).await;

        // Insert out of order with explicit timestamps.
        for (txn, paid_at) in [
            ("txn_t2", "2025-03-02T10:00:00.000Z"),
            ("txn_t1", "2025-03-01T10:00:00.000Z"),
            ("txn_t3", "2025-03-03T10:00:00.000Z"),
        ] {
            sqlx::query(
                r#"
                INSERT INTO payments (
                  payment_id, registration_id, participant_email, amount, transaction_id, paid_at
                ) VALUES (?, ?, 'payer@example.com', 30.0, ?, ?)
                "#,
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&registration_id)
            .bind(txn)
            .bind(paid_at)
            .execute(&pool)
            .await
            .unwrap();
        }

        let history = payment_history(&pool, "payer@example.com").await.unwrap();
        let order: Vec<&str> = history.iter().map(|p| p.transaction_id.as_str()).collect();
        assert_eq!(order, vec!["txn_t3", "txn_t2", "txn_t1"]);
    }
}
