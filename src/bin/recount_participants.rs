use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use std::env;

use camphub::services::camp_service;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = SqlitePoolOptions::new()
        .connect(&db_url)
        .await
        .expect("Cannot connect to database");

    match camp_service::recount_all(&pool).await {
        Ok(report) => {
            println!(
                "participant recount: camps={}, repaired={}",
                report.camps, report.repaired
            );
        }
        Err(e) => {
            eprintln!("participant recount failed: {}", e);
            std::process::exit(1);
        }
    }
}
