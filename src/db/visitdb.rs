use async_trait::async_trait;

use crate::db::StorageError;
use crate::models::visitmodel::{LocationUpdate, VisitEvent};

/// Storage contract for the visit event log and its geo enrichment.
#[async_trait]
pub trait VisitExt {
    /// Append one visit event. Ingestion is fire-and-forget from the
    /// site's point of view; the caller does not block UI on this.
    async fn append_visit(&self, event: VisitEvent) -> Result<(), StorageError>;

    /// Upsert the latest known location for a session.
    async fn upsert_location(&self, update: LocationUpdate) -> Result<(), StorageError>;

    async fn list_visits(&self) -> Result<Vec<VisitEvent>, StorageError>;

    async fn list_locations(&self) -> Result<Vec<LocationUpdate>, StorageError>;
}
