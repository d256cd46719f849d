//! Names and DDL for the events database.

use sqlx::{Connection, PgConnection};
use tracing::info;

use crate::utils::error::SetupError;

pub const ADMIN_DATABASE: &str = "postgres";
pub const DATABASE_NAME: &str = "events_db";
pub const TABLE_NAME: &str = "events_entries";

pub const CREATE_EVENTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS events_entries (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    lat DOUBLE PRECISION NOT NULL,
    lng DOUBLE PRECISION NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);
";

/// Coordinate indexes, in creation order.
pub const CREATE_INDEXES: [(&str, &str); 3] = [
    (
        "idx_events_lat",
        "CREATE INDEX IF NOT EXISTS idx_events_lat ON events_entries(lat);",
    ),
    (
        "idx_events_lng",
        "CREATE INDEX IF NOT EXISTS idx_events_lng ON events_entries(lng);",
    ),
    (
        "idx_events_lat_lng",
        "CREATE INDEX IF NOT EXISTS idx_events_lat_lng ON events_entries(lat, lng);",
    ),
];

/// Creates `events_entries` and its indexes if they are missing. All
/// statements commit together.
pub async fn ensure_schema(conn: &mut PgConnection) -> Result<(), SetupError> {
    let mut tx = conn.begin().await?;

    sqlx::query(CREATE_EVENTS_TABLE).execute(&mut *tx).await?;
    for (name, statement) in CREATE_INDEXES {
        sqlx::query(statement).execute(&mut *tx).await?;
        info!(index = name, table = TABLE_NAME, "Index ensured");
    }

    tx.commit().await?;
    info!(table = TABLE_NAME, "Schema ensured");

    Ok(())
}
