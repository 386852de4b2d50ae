use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded page visit, as ingested from the public site.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VisitEvent {
    /// Opaque client-generated session identifier.
    pub session_id: String,
    pub username: String,
    /// Page name visited.
    pub location: String,
    /// Page category.
    pub district: String,
    /// Seconds spent on the page.
    pub time_spent: u32,
    pub exit_reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Per-session rollup produced by the analytics aggregator.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionSummary {
    pub session_id: String,
    /// Location of the most recent event for the session.
    pub location: String,
    pub visit_count: usize,
    /// Sum of time_spent across all events, in seconds.
    pub total_time: u64,
    pub last_visit: DateTime<Utc>,
}

/// Geo enrichment reported by the client, keyed by session id.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LocationUpdate {
    pub session_id: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

/// A city-level cluster of sessions for the dashboard map.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GeoCluster {
    pub city: String,
    pub region: String,
    pub country: String,
    pub sessions: usize,
    pub latitude: f64,
    pub longitude: f64,
}
