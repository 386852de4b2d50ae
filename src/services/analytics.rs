use std::collections::HashMap;

use crate::models::visitmodel::{GeoCluster, LocationUpdate, SessionSummary, VisitEvent};

/// Per-dashboard mapping from raw session ids to stable 5-digit display
/// ids. One instance belongs to one admin dashboard session; it is never
/// shared process-wide, so two admins can hold independent maps without
/// races or cross-viewer leakage.
///
/// The id is a checksum, not a hash: two distinct session ids can collide
/// on the same display id. That is accepted for a display convenience id,
/// which is never used as a key.
#[derive(Debug, Default, Clone)]
pub struct DisplayIdMap {
    map: HashMap<String, String>,
}

impl DisplayIdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the display id for `session_id`, deriving and remembering it
    /// on first sight so the same session always shows the same digits.
    pub fn derive(&mut self, session_id: &str) -> String {
        if let Some(existing) = self.map.get(session_id) {
            return existing.clone();
        }
        let sum: u64 = session_id.chars().map(|c| c as u64).sum();
        let display = (sum % 90_000 + 10_000).to_string();
        self.map.insert(session_id.to_string(), display.clone());
        display
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Fold raw visit events into one summary per session: visit count, total
/// time, last-visit timestamp and the location of the most recent event.
/// Output is sorted by last visit descending (session id breaks ties) so
/// the result is deterministic for a given input.
pub fn aggregate_visits(events: &[VisitEvent]) -> Vec<SessionSummary> {
    let mut sessions: HashMap<&str, SessionSummary> = HashMap::new();

    for event in events {
        match sessions.get_mut(event.session_id.as_str()) {
            Some(summary) => {
                summary.visit_count += 1;
                summary.total_time += u64::from(event.time_spent);
                if event.timestamp >= summary.last_visit {
                    summary.last_visit = event.timestamp;
                    summary.location = event.location.clone();
                }
            }
            None => {
                sessions.insert(
                    event.session_id.as_str(),
                    SessionSummary {
                        session_id: event.session_id.clone(),
                        location: event.location.clone(),
                        visit_count: 1,
                        total_time: u64::from(event.time_spent),
                        last_visit: event.timestamp,
                    },
                );
            }
        }
    }

    let mut summaries: Vec<SessionSummary> = sessions.into_values().collect();
    summaries.sort_by(|a, b| {
        b.last_visit
            .cmp(&a.last_visit)
            .then_with(|| a.session_id.cmp(&b.session_id))
    });
    summaries
}

/// Group session location updates into city-level clusters for the
/// dashboard map. Each session counts once per cluster; coordinates come
/// from the most recent update. Sorted by session count descending, then
/// city, for determinism.
pub fn cluster_locations(updates: &[LocationUpdate]) -> Vec<GeoCluster> {
    let mut clusters: HashMap<(String, String, String), (Vec<String>, &LocationUpdate)> =
        HashMap::new();

    for update in updates {
        let key = (
            update.city.clone(),
            update.region.clone(),
            update.country.clone(),
        );
        match clusters.get_mut(&key) {
            Some((sessions, latest)) => {
                if !sessions.contains(&update.session_id) {
                    sessions.push(update.session_id.clone());
                }
                if update.timestamp >= latest.timestamp {
                    *latest = update;
                }
            }
            None => {
                clusters.insert(key, (vec![update.session_id.clone()], update));
            }
        }
    }

    let mut out: Vec<GeoCluster> = clusters
        .into_iter()
        .map(|((city, region, country), (sessions, latest))| GeoCluster {
            city,
            region,
            country,
            sessions: sessions.len(),
            latitude: latest.latitude,
            longitude: latest.longitude,
        })
        .collect();
    out.sort_by(|a, b| b.sessions.cmp(&a.sessions).then_with(|| a.city.cmp(&b.city)));
    out
}

/// Format a second count for the dashboard: "1h 1m 1s", "2m 5s" or "45s".
pub fn format_duration(total_seconds: u64) -> String {
    if total_seconds >= 3600 {
        let h = total_seconds / 3600;
        let m = (total_seconds % 3600) / 60;
        let s = total_seconds % 60;
        format!("{}h {}m {}s", h, m, s)
    } else if total_seconds >= 60 {
        format!("{}m {}s", total_seconds / 60, total_seconds % 60)
    } else {
        format!("{}s", total_seconds)
    }
}
