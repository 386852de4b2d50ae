use async_trait::async_trait;
use uuid::Uuid;

use crate::db::StorageError;
use crate::models::propertymodel::{Property, PropertyDetails};

/// Storage contract for properties and their optional detail documents.
///
/// Absence of a detail document is a normal state: readers get `None`,
/// never an error. Property deletion is permanent and cascades nothing;
/// a detail document orphaned by it must still be tolerated.
#[async_trait]
pub trait PropertyExt {
    async fn list_properties(&self) -> Result<Vec<Property>, StorageError>;

    async fn get_property_by_id(
        &self,
        property_id: Uuid,
    ) -> Result<Option<Property>, StorageError>;

    async fn insert_property(&self, property: Property) -> Result<Property, StorageError>;

    /// Replace an existing property record. `None` when no record carries
    /// the given id.
    async fn update_property(&self, property: Property)
        -> Result<Option<Property>, StorageError>;

    /// Hard delete. Returns whether a record was removed.
    async fn delete_property(&self, property_id: Uuid) -> Result<bool, StorageError>;

    async fn get_details_by_property_id(
        &self,
        property_id: Uuid,
    ) -> Result<Option<PropertyDetails>, StorageError>;

    /// Create-or-replace keyed on `property_id`. Implementations must
    /// APPEND the incoming construction-progress entries to any already
    /// stored for the property rather than replacing them wholesale.
    async fn upsert_details(
        &self,
        details: PropertyDetails,
    ) -> Result<PropertyDetails, StorageError>;

    /// Delete a detail document independently of its property.
    async fn delete_details(&self, property_id: Uuid) -> Result<bool, StorageError>;
}
