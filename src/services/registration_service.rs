use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::{camp_repo, registration_repo};
use crate::error::AppError;
use crate::models::RegistrationRow;
use crate::services::ensure_well_formed_id;

pub struct SubmitRegistrationInput {
    pub camp_id: String,
    pub participant_name: Option<String>,
    pub participant_email: String,
    pub fees: Option<f64>,
}

/// Inserts the registration and increments the camp's participant count in
/// one transaction, so the pair can never be observed half-applied.
pub async fn submit_registration(
    pool: &SqlitePool,
    input: SubmitRegistrationInput,
) -> Result<String, AppError> {
    ensure_well_formed_id(&input.camp_id, "camp")?;
    if input.participant_email.trim().is_empty() {
        return Err(AppError::InvalidArgument(
            "participantEmail is required".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    if !camp_repo::camp_exists(&mut *tx, &input.camp_id).await? {
        return Err(AppError::NotFound("camp"));
    }

    let registration_id = Uuid::new_v4().to_string();
    registration_repo::insert_registration(
        &mut *tx,
        registration_repo::NewRegistration {
            registration_id: &registration_id,
            camp_id: &input.camp_id,
            participant_name: input.participant_name.as_deref(),
            participant_email: input.participant_email.trim(),
            fees: input.fees,
        },
    )
    .await?;
    camp_repo::adjust_participant_count(&mut *tx, &input.camp_id, 1).await?;

    tx.commit().await?;
    Ok(registration_id)
}

pub async fn list_by_participant(
    pool: &SqlitePool,
    participant_email: &str,
) -> Result<Vec<RegistrationRow>, AppError> {
    Ok(registration_repo::list_by_email(pool, participant_email).await?)
}

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<RegistrationRow>, AppError> {
    Ok(registration_repo::list_all(pool).await?)
}

/// Fetches one registration. A NULL fee is filled in from the referenced
/// camp (or 0) in the returned view only; the stored row is left untouched.
pub async fn fetch_registration(
    pool: &SqlitePool,
    registration_id: &str,
) -> Result<RegistrationRow, AppError> {
    ensure_well_formed_id(registration_id, "registration")?;
    let mut registration = registration_repo::load_by_id(pool, registration_id)
        .await?
        .ok_or(AppError::NotFound("registration"))?;

    if registration.fees.is_none() {
        let camp_fee = camp_repo::load_camp_by_id(pool, &registration.camp_id)
            .await?
            .and_then(|camp| camp.fees)
            .unwrap_or(0.0);
        registration.fees = Some(camp_fee);
    }

    Ok(registration)
}

/// Deletes the registration and decrements the camp's count in one
/// transaction. An unknown id deletes zero rows and touches no counter.
pub async fn cancel_registration(
    pool: &SqlitePool,
    registration_id: &str,
) -> Result<u64, AppError> {
    ensure_well_formed_id(registration_id, "registration")?;

    let mut tx = pool.begin().await?;

    let Some(camp_id) = registration_repo::delete_registration(&mut *tx, registration_id).await?
    else {
        return Ok(0);
    };
    camp_repo::adjust_participant_count(&mut *tx, &camp_id, -1).await?;

    tx.commit().await?;
    Ok(1)
}

/// Idempotent; confirming an already-confirmed registration is not an error.
pub async fn confirm_registration(
    pool: &SqlitePool,
    registration_id: &str,
) -> Result<u64, AppError> {
    ensure_well_formed_id(registration_id, "registration")?;
    Ok(registration_repo::confirm_registration(pool, registration_id).await?)
}
