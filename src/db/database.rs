use sqlx::{Executor, PgConnection};
use tracing::info;

use crate::utils::error::SetupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseStatus {
    Created,
    AlreadyExists,
}

/// Creates the database `name` unless the cluster already has one by that
/// name. `conn` must not be inside a transaction, since `CREATE DATABASE`
/// refuses to run in one.
pub async fn ensure_database(
    conn: &mut PgConnection,
    name: &str,
) -> Result<DatabaseStatus, SetupError> {
    let exists = sqlx::query_scalar::<_, i32>("SELECT 1 FROM pg_database WHERE datname = $1")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?
        .is_some();

    if exists {
        info!(database = name, "Database already exists");
        return Ok(DatabaseStatus::AlreadyExists);
    }

    let statement = format!("CREATE DATABASE {}", quote_identifier(name));
    conn.execute(statement.as_str()).await?;
    info!(database = name, "Database created");

    Ok(DatabaseStatus::Created)
}

/// Quotes `name` as a PostgreSQL identifier. Identifiers cannot be bound as
/// query parameters.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
