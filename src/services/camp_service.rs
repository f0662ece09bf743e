use sqlx::SqlitePool;
use uuid::Uuid;

use crate::database::camp_repo;
use crate::error::AppError;
use crate::models::CampRow;
use crate::services::ensure_well_formed_id;

pub const POPULAR_CAMPS_LIMIT: i64 = 6;

pub struct NewCampInput {
    pub camp_name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub date_time: Option<String>,
    pub healthcare_professional: Option<String>,
    pub fees: Option<f64>,
}

// The participant count always starts at 0; client-supplied counts are ignored.
pub async fn create_camp(pool: &SqlitePool, input: NewCampInput) -> Result<String, AppError> {
    let camp_name = input.camp_name.trim();
    if camp_name.is_empty() {
        return Err(AppError::InvalidArgument("campName is required".to_string()));
    }

    let camp_id = Uuid::new_v4().to_string();
    camp_repo::insert_camp(
        pool,
        camp_repo::NewCamp {
            camp_id: &camp_id,
            camp_name,
            description: input.description.as_deref(),
            location: input.location.as_deref(),
            date_time: input.date_time.as_deref(),
            healthcare_professional: input.healthcare_professional.as_deref(),
            fees: input.fees,
        },
    )
    .await?;
    Ok(camp_id)
}

pub async fn list_camps(pool: &SqlitePool) -> Result<Vec<CampRow>, AppError> {
    Ok(camp_repo::list_camps(pool).await?)
}

/// Ranking view only; tolerates counts that have drifted from the true
/// registration count.
pub async fn popular_camps(pool: &SqlitePool) -> Result<Vec<CampRow>, AppError> {
    Ok(camp_repo::list_popular(pool, POPULAR_CAMPS_LIMIT).await?)
}

pub async fn get_camp(pool: &SqlitePool, camp_id: &str) -> Result<CampRow, AppError> {
    ensure_well_formed_id(camp_id, "camp")?;
    camp_repo::load_camp_by_id(pool, camp_id)
        .await?
        .ok_or(AppError::NotFound("camp"))
}

pub async fn delete_camp(pool: &SqlitePool, camp_id: &str) -> Result<u64, AppError> {
    ensure_well_formed_id(camp_id, "camp")?;
    Ok(camp_repo::delete_camp(pool, camp_id).await?)
}

/// Idempotent repair: resets the stored count to the number of registrations
/// referencing the camp.
pub async fn recount_participants(pool: &SqlitePool, camp_id: &str) -> Result<i64, AppError> {
    ensure_well_formed_id(camp_id, "camp")?;
    camp_repo::recount_participants(pool, camp_id)
        .await?
        .ok_or(AppError::NotFound("camp"))
}

pub struct RecountReport {
    pub camps: usize,
    pub repaired: usize,
}

pub async fn recount_all(pool: &SqlitePool) -> Result<RecountReport, AppError> {
    let camps = camp_repo::list_camps(pool).await?;
    let mut report = RecountReport {
        camps: camps.len(),
        repaired: 0,
    };
    for camp in camps {
        let count = camp_repo::recount_participants(pool, &camp.camp_id)
            .await?
            .unwrap_or(camp.participant_count);
        if count != camp.participant_count {
            report.repaired += 1;
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema;

    async fn test_pool() -> SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        schema::init_schema(&pool).await.unwrap();
        pool
    }

    fn camp_input(name: &str) -> NewCampInput {
        NewCampInput {
            camp_name: name.to_string(),
            description: None,
            location: None,
            date_time: None,
            healthcare_professional: None,
            fees: Some(25.0),
        }
    }

    #[tokio::test]
    async fn created_camp_starts_with_zero_participants() {
        let pool = test_pool().await;
        let camp_id = create_camp(&pool, camp_input("Eye Camp")).await.unwrap();

        let camp = get_camp(&pool, &camp_id).await.unwrap();
        assert_eq!(camp.participant_count, 0);
        assert_eq!(camp.fees, Some(25.0));
    }

    #[tokio::test]
    async fn get_camp_rejects_malformed_and_unknown_ids() {
        let pool = test_pool().await;

        let err = get_camp(&pool, "not-a-uuid").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));

        let missing = Uuid::new_v4().to_string();
        let err = get_camp(&pool, &missing).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn popular_camps_returns_top_six_by_count_descending() {
        let pool = test_pool().await;

        for i in 0..8 {
            let camp_id = create_camp(&pool, camp_input(&format!("Camp {i}")))
                .await
                .unwrap();
            sqlx::query("UPDATE camps SET participant_count = ? WHERE camp_id = ?")
                .bind(i as i64)
                .bind(&camp_id)
                .execute(&pool)
                .await
                .unwrap();
        }

        let popular = popular_camps(&pool).await.unwrap();
        assert_eq!(popular.len(), 6);
        let counts: Vec<i64> = popular.iter().map(|c| c.participant_count).collect();
        assert_eq!(counts, vec![7, 6, 5, 4, 3, 2]);
    }

    #[tokio::test]
    async fn recount_repairs_a_drifted_count() {
        let pool = test_pool().await;
        let camp_id = create_camp(&pool, camp_input("Dental Camp")).await.unwrap();

        sqlx::query("UPDATE camps SET participant_count = 99 WHERE camp_id = ?")
            .bind(&camp_id)
            .execute(&pool)
            .await
            .unwrap();

        let count = recount_participants(&pool, &camp_id).await.unwrap();
        assert_eq!(count, 0);

        // Running it again changes nothing.
        let count = recount_participants(&pool, &camp_id).await.unwrap();
        assert_eq!(count, 0);
    }
}
