//! Database migrations and initialization.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::Path;
use tracing::info;

/// Initialize the SQLite store: create its directory, open it (creating the
/// file if absent), configure pragmas and bring the schema up to date.
///
/// # Errors
/// Any failure here is unrecoverable for the caller; the directory, the file
/// and every schema statement must succeed.
pub async fn init_db(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    info!("Database initialized successfully at {}", db_path.display());
    Ok(pool)
}

/// Run all database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }

    if add_expiration_date_column(pool).await? {
        info!("Added items.expiration_date column");
    }

    info!("Migrations completed successfully");
    Ok(())
}

/// Add `items.expiration_date` to stores created before the column existed.
///
/// Returns `true` when the column was added by this call. Losing the race to
/// another process adding it at the same time counts as already present.
async fn add_expiration_date_column(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    if has_column(pool, "items", "expiration_date").await? {
        return Ok(false);
    }

    match sqlx::query("ALTER TABLE items ADD COLUMN expiration_date TEXT")
        .execute(pool)
        .await
    {
        Ok(_) => Ok(true),
        Err(sqlx::Error::Database(e)) if e.message().contains("duplicate column name") => {
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

async fn has_column(pool: &SqlitePool, table: &str, column: &str) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query(&format!("PRAGMA table_info({})", table))
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .any(|row| row.get::<String, _>("name") == column))
}

/// Configure SQLite pragmas for optimal performance and reliability.
async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.get(0);
    info!("SQLite journal_mode set to: {}", journal_mode);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}
