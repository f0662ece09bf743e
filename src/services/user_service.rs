use sqlx::SqlitePool;
use uuid::Uuid;

use crate::config::Config;
use crate::database::user_repo;
use crate::error::AppError;

const DEFAULT_ROLE: &str = "participant";
const ORGANIZER_ROLE: &str = "organizer";

pub struct NewUserInput {
    pub email: String,
    pub name: Option<String>,
}

pub enum CreateUserOutcome {
    Created { user_id: String },
    AlreadyExists,
}

/// Creates a user on first sign-in. A known email is reported back as a
/// non-error marker so clients keying on `insertedId == null` keep working.
pub async fn get_or_create_user(
    pool: &SqlitePool,
    config: &Config,
    input: NewUserInput,
) -> Result<CreateUserOutcome, AppError> {
    let email = input.email.trim();
    if email.is_empty() {
        return Err(AppError::InvalidArgument("email is required".to_string()));
    }

    if user_repo::find_by_email(pool, email).await?.is_some() {
        return Ok(CreateUserOutcome::AlreadyExists);
    }

    let role = if config
        .organizer_emails
        .iter()
        .any(|e| e.eq_ignore_ascii_case(email))
    {
        ORGANIZER_ROLE
    } else {
        DEFAULT_ROLE
    };

    let user_id = Uuid::new_v4().to_string();
    match user_repo::insert_user(
        pool,
        user_repo::NewUser {
            user_id: &user_id,
            email,
            name: input.name.as_deref(),
            role,
        },
    )
    .await
    {
        Ok(_) => Ok(CreateUserOutcome::Created { user_id }),
        // Lost the find/insert race against a concurrent sign-in.
        Err(e) if is_unique_violation(&e) => Ok(CreateUserOutcome::AlreadyExists),
        Err(e) => Err(e.into()),
    }
}

pub async fn lookup_role(pool: &SqlitePool, email: &str) -> Result<String, AppError> {
    let role = user_repo::load_role(pool, email).await?;
    Ok(role.unwrap_or_else(|| DEFAULT_ROLE.to_string()))
}

pub async fn is_admin(pool: &SqlitePool, email: &str) -> Result<bool, AppError> {
    Ok(lookup_role(pool, email).await? == ORGANIZER_ROLE)
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
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

    fn test_config() -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            organizer_emails: vec!["chief@example.com".to_string()],
            payment_api_url: String::new(),
            payment_secret_key: String::new(),
            payment_currency: "usd".to_string(),
            allowed_origins: Vec::new(),
        }
    }

    #[tokio::test]
    async fn second_create_returns_already_exists_marker() {
        let pool = test_pool().await;
        let config = test_config();

        let first = get_or_create_user(
            &pool,
            &config,
            NewUserInput {
                email: "amina@example.com".to_string(),
                name: Some("Amina".to_string()),
            },
        )
        .await
        .unwrap();
        assert!(matches!(first, CreateUserOutcome::Created { .. }));

        let second = get_or_create_user(
            &pool,
            &config,
            NewUserInput {
                email: "amina@example.com".to_string(),
                name: None,
            },
        )
        .await
        .unwrap();
        assert!(matches!(second, CreateUserOutcome::AlreadyExists));
    }

    #[tokio::test]
    async fn bootstrap_email_is_created_as_organizer() {
        let pool = test_pool().await;
        let config = test_config();

        get_or_create_user(
            &pool,
            &config,
            NewUserInput {
                email: "chief@example.com".to_string(),
                name: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(
            lookup_role(&pool, "chief@example.com").await.unwrap(),
            "organizer"
        );
        assert!(is_admin(&pool, "chief@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn role_lookup_defaults_to_participant_for_unknown_email() {
        let pool = test_pool().await;

        assert_eq!(
            lookup_role(&pool, "nobody@example.com").await.unwrap(),
            "participant"
        );
        assert!(!is_admin(&pool, "nobody@example.com").await.unwrap());
    }
}
