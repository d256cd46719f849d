use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const SAMPLE_TITLE: &str = "Sample Event";
pub const SAMPLE_DESCRIPTION: &str = "This is a test event to verify the database setup";
/// San Francisco, in decimal degrees.
pub const SAMPLE_COORDINATES: Coordinates = Coordinates {
    lat: 37.7749,
    lng: -122.4194,
};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

/// A row of `events_entries`. Timestamps are `TIMESTAMP` (no zone) and hold UTC.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventEntry {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub lat: f64,
    pub lng: f64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl EventEntry {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEventEntry {
    pub title: String,
    pub description: Option<String>,
    pub coordinates: Coordinates,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewEventEntry {
    /// The fixed row used to check a fresh setup, stamped with `now` in both
    /// timestamp columns.
    pub fn sample(now: NaiveDateTime) -> Self {
        Self {
            title: SAMPLE_TITLE.to_string(),
            description: Some(SAMPLE_DESCRIPTION.to_string()),
            coordinates: SAMPLE_COORDINATES,
            created_at: now,
            updated_at: now,
        }
    }
}
