use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Emails created with the organizer role instead of participant.
    pub organizer_emails: Vec<String>,
    pub payment_api_url: String,
    pub payment_secret_key: String,
    pub payment_currency: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            host: try_load("HOST", "127.0.0.1"),
            port: try_load("PORT", "5000"),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            organizer_emails: load_list("ORGANIZER_EMAILS"),
            payment_api_url: try_load("PAYMENT_API_URL", "https://api.stripe.com"),
            payment_secret_key: env::var("PAYMENT_SECRET_KEY").unwrap_or_else(|_| {
                warn!("PAYMENT_SECRET_KEY not set, payment intents will fail");
                String::new()
            }),
            payment_currency: try_load("PAYMENT_CURRENCY", "usd"),
            allowed_origins: load_list("ALLOWED_ORIGINS"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

fn load_list(key: &str) -> Vec<String> {
    env::var(key)
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
