use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::visitmodel::{LocationUpdate, VisitEvent};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RecordVisitDto {
    #[validate(length(min = 1, message = "Session id is required"))]
    pub session_id: String,

    /// Display label; defaults to "Anonymous" when absent.
    pub username: Option<String>,

    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,

    #[serde(default)]
    pub district: String,

    #[serde(default)]
    pub time_spent: u32,

    pub exit_reason: Option<String>,

    /// Event time; defaults to the ingestion time when absent.
    pub timestamp: Option<DateTime<Utc>>,
}

impl RecordVisitDto {
    pub fn into_event(self) -> VisitEvent {
        VisitEvent {
            session_id: self.session_id,
            username: self.username.unwrap_or_else(|| "Anonymous".to_string()),
            location: self.location,
            district: self.district,
            time_spent: self.time_spent,
            exit_reason: self.exit_reason,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LocationUpdateDto {
    #[validate(length(min = 1, message = "Session id is required"))]
    pub session_id: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationUpdateDto {
    pub fn into_update(self) -> LocationUpdate {
        LocationUpdate {
            session_id: self.session_id,
            city: self.city,
            region: self.region,
            country: self.country,
            latitude: self.latitude,
            longitude: self.longitude,
            timestamp: Utc::now(),
        }
    }
}

/// A row of the admin visit dashboard.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionRowDto {
    /// Stable 5-digit display id derived from the session id.
    pub display_session_id: String,
    pub session_id: String,
    pub location: String,
    pub visit_count: usize,
    /// Total time formatted as "1h 2m 3s" / "2m 5s" / "45s".
    pub total_time: String,
    pub last_visit: DateTime<Utc>,
}
