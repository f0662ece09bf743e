use sqlx::SqlitePool;

pub const SQL_CREATE_CAMPS: &str = r#"
CREATE TABLE IF NOT EXISTS camps (
  camp_id TEXT PRIMARY KEY,
  camp_name TEXT NOT NULL,
  description TEXT,
  location TEXT,
  date_time TEXT,
  healthcare_professional TEXT,
  fees REAL,
  participant_count INTEGER NOT NULL DEFAULT 0
)
"#;

pub const SQL_CREATE_REGISTRATIONS: &str = r#"
CREATE TABLE IF NOT EXISTS registrations (
  registration_id TEXT PRIMARY KEY,
  camp_id TEXT NOT NULL,
  participant_name TEXT,
  participant_email TEXT NOT NULL,
  payment_status TEXT NOT NULL DEFAULT 'unpaid',
  confirmation_status TEXT NOT NULL DEFAULT 'pending',
  transaction_id TEXT,
  fees REAL
)
"#;

pub const SQL_CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  user_id TEXT PRIMARY KEY,
  email TEXT NOT NULL UNIQUE,
  name TEXT,
  role TEXT NOT NULL DEFAULT 'participant'
)
"#;

pub const SQL_CREATE_PAYMENTS: &str = r#"
CREATE TABLE IF NOT EXISTS payments (
  payment_id TEXT PRIMARY KEY,
  registration_id TEXT NOT NULL,
  participant_email TEXT NOT NULL,
  amount REAL NOT NULL,
  transaction_id TEXT NOT NULL,
  paid_at TEXT NOT NULL
)
"#;

const SQL_CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_registrations_camp ON registrations(camp_id)",
    "CREATE INDEX IF NOT EXISTS idx_registrations_email ON registrations(participant_email)",
    "CREATE INDEX IF NOT EXISTS idx_payments_email ON payments(participant_email)",
];

pub async fn init_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_CAMPS).execute(pool).await?;
    sqlx::query(SQL_CREATE_REGISTRATIONS).execute(pool).await?;
    sqlx::query(SQL_CREATE_USERS).execute(pool).await?;
    sqlx::query(SQL_CREATE_PAYMENTS).execute(pool).await?;
    for sql in SQL_CREATE_INDEXES {
        sqlx::query(sql).execute(pool).await?;
    }
    Ok(())
}
