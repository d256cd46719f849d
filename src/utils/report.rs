use std::fmt;

use crate::db::schema::{DATABASE_NAME, TABLE_NAME};
use crate::db::DatabaseStatus;
use crate::models::event::SAMPLE_COORDINATES;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed(String),
    Skipped,
}

impl StepOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, StepOutcome::Succeeded)
    }
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Succeeded => f.write_str("succeeded"),
            StepOutcome::Failed(msg) => write!(f, "failed: {}", msg),
            StepOutcome::Skipped => f.write_str("skipped"),
        }
    }
}

/// What happened to each of the three setup steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub database: StepOutcome,
    pub schema: StepOutcome,
    pub sample: StepOutcome,
    pub sample_event_id: Option<i32>,
}

impl Default for SetupReport {
    fn default() -> Self {
        Self {
            database: StepOutcome::Skipped,
            schema: StepOutcome::Skipped,
            sample: StepOutcome::Skipped,
            sample_event_id: None,
        }
    }
}

impl SetupReport {
    pub fn is_complete(&self) -> bool {
        self.database.is_success() && self.schema.is_success() && self.sample.is_success()
    }
}

pub fn intro() {
    println!("Setting up Events Database...");
    println!("All coordinates will be stored in DD (Decimal Degrees) format");
}

pub fn database_ready(status: DatabaseStatus) {
    match status {
        DatabaseStatus::Created => println!("Database '{}' created successfully", DATABASE_NAME),
        DatabaseStatus::AlreadyExists => println!("Database '{}' already exists", DATABASE_NAME),
    }
}

pub fn schema_ready() {
    println!("Table '{}' and indexes created successfully", TABLE_NAME);
    println!("Coordinates stored in DD (Decimal Degrees) format");
    println!("Indexes created on lat, lng, and lat+lng for optimal performance");
}

pub fn sample_inserted(id: i32) {
    println!("Sample event created with ID: {}", id);
    println!("Coordinates saved in DD format: {}", SAMPLE_COORDINATES);
}

pub fn step_error(action: &str, message: impl fmt::Display) {
    println!("Error {}: {}", action, message);
}

pub fn summary(report: &SetupReport) {
    for line in summary_lines(report) {
        println!("{}", line);
    }
}

/// Closing lines for `report`. The success banner only appears when every
/// step succeeded.
pub fn summary_lines(report: &SetupReport) -> Vec<String> {
    if report.is_complete() {
        return vec![
            "\nDatabase setup completed successfully!".to_string(),
            format!("Database: {}", DATABASE_NAME),
            format!(
                "Table: {} (id, title, description, lat, lng, created_at, updated_at)",
                TABLE_NAME
            ),
            "Coordinates: DD format with indexes for performance".to_string(),
        ];
    }

    if !report.database.is_success() {
        vec!["Failed to create database".to_string()]
    } else if !report.schema.is_success() {
        vec!["Failed to create table and indexes".to_string()]
    } else {
        vec![
            "\nDatabase setup finished with errors".to_string(),
            format!("Sample event: {}", report.sample),
        ]
    }
}
