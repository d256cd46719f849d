//! The three setup steps and the sequence that chains them.
//!
//! Every step opens its own connection, and a failed step stops the
//! sequence.

use chrono::Utc;
use sqlx::Connection;

use crate::config::Config;
use crate::db::{self, schema::ADMIN_DATABASE, schema::DATABASE_NAME, DatabaseStatus};
use crate::models::NewEventEntry;
use crate::utils::error::SetupError;
use crate::utils::report::{self, SetupReport, StepOutcome};

pub async fn create_database(config: &Config) -> Result<DatabaseStatus, SetupError> {
    let mut conn = db::connect(config, ADMIN_DATABASE).await?;
    let status = db::ensure_database(&mut conn, DATABASE_NAME).await?;
    conn.close().await?;
    Ok(status)
}

pub async fn create_table_and_indexes(config: &Config) -> Result<(), SetupError> {
    let mut conn = db::connect(config, DATABASE_NAME).await?;
    db::ensure_schema(&mut conn).await?;
    conn.close().await?;
    Ok(())
}

pub async fn insert_sample_event(config: &Config) -> Result<i32, SetupError> {
    let mut conn = db::connect(config, DATABASE_NAME).await?;
    let sample = NewEventEntry::sample(Utc::now().naive_utc());
    let id = db::insert_event(&mut conn, &sample).await?;
    conn.close().await?;
    Ok(id)
}

/// The three steps, in the order `run` attempts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Database,
    Schema,
    Sample,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::Database => "create_database",
            Step::Schema => "create_table_and_indexes",
            Step::Sample => "insert_sample_event",
        }
    }

    fn action(self) -> &'static str {
        match self {
            Step::Database => "creating database",
            Step::Schema => "creating table",
            Step::Sample => "inserting sample event",
        }
    }
}

/// Converts a step result into its outcome, logging and printing any error.
pub fn outcome_of<T>(step: Step, result: &Result<T, SetupError>) -> StepOutcome {
    match result {
        Ok(_) => StepOutcome::Succeeded,
        Err(err) => {
            err.log(step.name());
            report::step_error(step.action(), err);
            StepOutcome::Failed(err.to_string())
        }
    }
}

pub async fn run(config: &Config) -> SetupReport {
    let mut report = SetupReport::default();

    let database = create_database(config).await;
    if let Ok(status) = database {
        report::database_ready(status);
    }
    report.database = outcome_of(Step::Database, &database);
    if !report.database.is_success() {
        return report;
    }

    let schema = create_table_and_indexes(config).await;
    if schema.is_ok() {
        report::schema_ready();
    }
    report.schema = outcome_of(Step::Schema, &schema);
    if !report.schema.is_success() {
        return report;
    }

    let sample = insert_sample_event(config).await;
    if let Ok(id) = sample {
        report::sample_inserted(id);
        report.sample_event_id = Some(id);
    }
    report.sample = outcome_of(Step::Sample, &sample);

    report
}
