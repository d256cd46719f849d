use sqlx::{Connection, PgConnection};
use tracing::debug;

use crate::config::Config;
use crate::utils::error::SetupError;

pub mod database;
pub mod sample;
pub mod schema;

pub use database::{ensure_database, DatabaseStatus};
pub use sample::insert_event;
pub use schema::ensure_schema;

/// Opens a single connection to `database`. Each setup step owns its own
/// connection and closes it when done.
pub async fn connect(config: &Config, database: &str) -> Result<PgConnection, SetupError> {
    debug!(host = %config.host, port = config.port, database, "Connecting");
    let conn = PgConnection::connect_with(&config.connect_options(database)).await?;
    Ok(conn)
}
