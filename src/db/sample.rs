use sqlx::{Connection, PgConnection};
use tracing::info;

use crate::models::NewEventEntry;
use crate::utils::error::SetupError;

const INSERT_EVENT: &str = r"
INSERT INTO events_entries (title, description, lat, lng, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6)
RETURNING id;
";

/// Inserts `entry` and returns the id the engine assigned to it.
pub async fn insert_event(conn: &mut PgConnection, entry: &NewEventEntry) -> Result<i32, SetupError> {
    let mut tx = conn.begin().await?;

    let id = sqlx::query_scalar::<_, i32>(INSERT_EVENT)
        .bind(&entry.title)
        .bind(entry.description.as_deref())
        .bind(entry.coordinates.lat)
        .bind(entry.coordinates.lng)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    info!(event_id = id, coordinates = %entry.coordinates, "Event inserted");

    Ok(id)
}
