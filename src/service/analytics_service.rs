use std::sync::Arc;

use validator::Validate;

use crate::db::visitdb::VisitExt;
use crate::dtos::visitdtos::{LocationUpdateDto, RecordVisitDto, SessionRowDto};
use crate::models::visitmodel::GeoCluster;
use crate::service::error::ServiceError;
use crate::services::analytics::{
    aggregate_visits, cluster_locations, format_duration, DisplayIdMap,
};

/// Visit ingestion and the admin dashboard rollups.
#[derive(Debug, Clone)]
pub struct AnalyticsService<D> {
    db_client: Arc<D>,
}

impl<D: VisitExt + Send + Sync> AnalyticsService<D> {
    pub fn new(db_client: Arc<D>) -> Self {
        Self { db_client }
    }

    /// Append one visit to the event log. The public site fires this
    /// without waiting on the result.
    pub async fn record_visit(&self, body: RecordVisitDto) -> Result<(), ServiceError> {
        body.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        self.db_client.append_visit(body.into_event()).await?;
        Ok(())
    }

    /// Record or refresh the geo enrichment for a session.
    pub async fn record_location(&self, body: LocationUpdateDto) -> Result<(), ServiceError> {
        body.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        self.db_client.upsert_location(body.into_update()).await?;
        Ok(())
    }

    /// Dashboard rows: one per session, most recent first. `ids` belongs
    /// to the viewing admin's dashboard session; passing the same map
    /// across refreshes keeps each session's display id stable.
    pub async fn dashboard_rows(
        &self,
        ids: &mut DisplayIdMap,
    ) -> Result<Vec<SessionRowDto>, ServiceError> {
        let events = self.db_client.list_visits().await?;
        let rows = aggregate_visits(&events)
            .into_iter()
            .map(|summary| SessionRowDto {
                display_session_id: ids.derive(&summary.session_id),
                session_id: summary.session_id,
                location: summary.location,
                visit_count: summary.visit_count,
                total_time: format_duration(summary.total_time),
                last_visit: summary.last_visit,
            })
            .collect();
        Ok(rows)
    }

    /// City-level clusters for the dashboard map.
    pub async fn geo_clusters(&self) -> Result<Vec<GeoCluster>, ServiceError> {
        let updates = self.db_client.list_locations().await?;
        Ok(cluster_locations(&updates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::InMemoryStore;
    use chrono::{Duration, Utc};

    fn visit(session: &str, location: &str, time_spent: u32, offset: i64) -> RecordVisitDto {
        RecordVisitDto {
            session_id: session.to_string(),
            username: None,
            location: location.to_string(),
            district: "public".to_string(),
            time_spent,
            exit_reason: None,
            timestamp: Some(Utc::now() + Duration::seconds(offset)),
        }
    }

    fn service() -> AnalyticsService<InMemoryStore> {
        AnalyticsService::new(Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn test_dashboard_rows_roll_up_sessions() {
        let svc = service();
        svc.record_visit(visit("abc", "home", 10, 0)).await.unwrap();
        svc.record_visit(visit("abc", "listings", 20, 10)).await.unwrap();
        svc.record_visit(visit("abc", "contact", 95, 20)).await.unwrap();
        svc.record_visit(visit("xyz", "home", 5, 30)).await.unwrap();

        let mut ids = DisplayIdMap::new();
        let rows = svc.dashboard_rows(&mut ids).await.unwrap();

        assert_eq!(rows.len(), 2);
        // most recent session first
        assert_eq!(rows[0].session_id, "xyz");
        let abc = &rows[1];
        assert_eq!(abc.visit_count, 3);
        assert_eq!(abc.total_time, "2m 5s");
        assert_eq!(abc.location, "contact");
    }

    #[tokio::test]
    async fn test_display_ids_stable_across_refreshes() {
        let svc = service();
        svc.record_visit(visit("abc", "home", 1, 0)).await.unwrap();

        let mut ids = DisplayIdMap::new();
        let first = svc.dashboard_rows(&mut ids).await.unwrap();
        let second = svc.dashboard_rows(&mut ids).await.unwrap();
        assert_eq!(first[0].display_session_id, second[0].display_session_id);
    }

    #[tokio::test]
    async fn test_anonymous_default_username() {
        let svc = service();
        svc.record_visit(visit("abc", "home", 1, 0)).await.unwrap();
        let events = svc.db_client.list_visits().await.unwrap();
        assert_eq!(events[0].username, "Anonymous");
    }

    #[tokio::test]
    async fn test_geo_clusters_from_location_updates() {
        let svc = service();
        let update = |session: &str, city: &str| LocationUpdateDto {
            session_id: session.to_string(),
            city: city.to_string(),
            region: "Kerala".to_string(),
            country: "India".to_string(),
            latitude: 10.0,
            longitude: 76.5,
        };
        svc.record_location(update("s1", "Kochi")).await.unwrap();
        svc.record_location(update("s2", "Kochi")).await.unwrap();
        svc.record_location(update("s3", "Thrissur")).await.unwrap();

        let clusters = svc.geo_clusters().await.unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].city, "Kochi");
        assert_eq!(clusters[0].sessions, 2);
    }
}
