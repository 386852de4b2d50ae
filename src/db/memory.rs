use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::gallerydb::GalleryExt;
use crate::db::propertydb::PropertyExt;
use crate::db::userdb::UserExt;
use crate::db::visitdb::VisitExt;
use crate::db::StorageError;
use crate::models::gallerymodel::{GalleryItem, GalleryKind};
use crate::models::propertymodel::{Property, PropertyDetails};
use crate::models::usermodel::AdminUser;
use crate::models::visitmodel::{LocationUpdate, VisitEvent};

#[derive(Debug, Default)]
struct State {
    properties: Vec<Property>,
    details: Vec<PropertyDetails>,
    gallery: Vec<GalleryItem>,
    visits: Vec<VisitEvent>,
    locations: Vec<LocationUpdate>,
    admins: Vec<AdminUser>,
}

/// In-memory reference backend for the storage contracts. Used by the
/// service-layer tests and small demos; production deployments plug a
/// document-store adapter in instead.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, StorageError> {
        self.inner
            .read()
            .map_err(|_| StorageError::Unavailable("state lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, StorageError> {
        self.inner
            .write()
            .map_err(|_| StorageError::Unavailable("state lock poisoned".to_string()))
    }
}

#[async_trait]
impl PropertyExt for InMemoryStore {
    async fn list_properties(&self) -> Result<Vec<Property>, StorageError> {
        Ok(self.read()?.properties.clone())
    }

    async fn get_property_by_id(
        &self,
        property_id: Uuid,
    ) -> Result<Option<Property>, StorageError> {
        Ok(self
            .read()?
            .properties
            .iter()
            .find(|p| p.id == property_id)
            .cloned())
    }

    async fn insert_property(&self, property: Property) -> Result<Property, StorageError> {
        let mut state = self.write()?;
        if state.properties.iter().any(|p| p.id == property.id) {
            return Err(StorageError::Conflict(format!(
                "property {} already exists",
                property.id
            )));
        }
        state.properties.push(property.clone());
        Ok(property)
    }

    async fn update_property(
        &self,
        property: Property,
    ) -> Result<Option<Property>, StorageError> {
        let mut state = self.write()?;
        match state.properties.iter_mut().find(|p| p.id == property.id) {
            Some(slot) => {
                *slot = property.clone();
                Ok(Some(property))
            }
            None => Ok(None),
        }
    }

    async fn delete_property(&self, property_id: Uuid) -> Result<bool, StorageError> {
        let mut state = self.write()?;
        let before = state.properties.len();
        // no cascade: an orphaned detail document is left behind on purpose
        state.properties.retain(|p| p.id != property_id);
        Ok(state.properties.len() < before)
    }

    async fn get_details_by_property_id(
        &self,
        property_id: Uuid,
    ) -> Result<Option<PropertyDetails>, StorageError> {
        Ok(self
            .read()?
            .details
            .iter()
            .find(|d| d.property_id == property_id)
            .cloned())
    }

    async fn upsert_details(
        &self,
        mut details: PropertyDetails,
    ) -> Result<PropertyDetails, StorageError> {
        let mut state = self.write()?;
        match state
            .details
            .iter_mut()
            .find(|d| d.property_id == details.property_id)
        {
            Some(existing) => {
                // progress accumulates: existing entries stay, new ones append
                let mut progress = existing.construction_progress.clone();
                progress.extend(details.construction_progress);
                details.construction_progress = progress;
                *existing = details.clone();
            }
            None => state.details.push(details.clone()),
        }
        Ok(details)
    }

    async fn delete_details(&self, property_id: Uuid) -> Result<bool, StorageError> {
        let mut state = self.write()?;
        let before = state.details.len();
        state.details.retain(|d| d.property_id != property_id);
        Ok(state.details.len() < before)
    }
}

#[async_trait]
impl GalleryExt for InMemoryStore {
    async fn list_items(
        &self,
        kind: Option<GalleryKind>,
    ) -> Result<Vec<GalleryItem>, StorageError> {
        Ok(self
            .read()?
            .gallery
            .iter()
            .filter(|item| kind.map_or(true, |k| item.kind == k))
            .cloned()
            .collect())
    }

    async fn insert_item(&self, item: GalleryItem) -> Result<GalleryItem, StorageError> {
        let mut state = self.write()?;
        if state.gallery.iter().any(|i| i.id == item.id) {
            return Err(StorageError::Conflict(format!(
                "gallery item {} already exists",
                item.id
            )));
        }
        state.gallery.push(item.clone());
        Ok(item)
    }

    async fn update_orders(&self, orders: &[(Uuid, i32)]) -> Result<(), StorageError> {
        let mut state = self.write()?;
        for (id, order) in orders {
            if let Some(item) = state.gallery.iter_mut().find(|i| i.id == *id) {
                item.order = *order;
            }
        }
        Ok(())
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<Option<GalleryItem>, StorageError> {
        let mut state = self.write()?;
        let position = state.gallery.iter().position(|i| i.id == item_id);
        Ok(position.map(|idx| state.gallery.remove(idx)))
    }
}

#[async_trait]
impl VisitExt for InMemoryStore {
    async fn append_visit(&self, event: VisitEvent) -> Result<(), StorageError> {
        self.write()?.visits.push(event);
        Ok(())
    }

    async fn upsert_location(&self, update: LocationUpdate) -> Result<(), StorageError> {
        let mut state = self.write()?;
        match state
            .locations
            .iter_mut()
            .find(|l| l.session_id == update.session_id)
        {
            Some(existing) => *existing = update,
            None => state.locations.push(update),
        }
        Ok(())
    }

    async fn list_visits(&self) -> Result<Vec<VisitEvent>, StorageError> {
        Ok(self.read()?.visits.clone())
    }

    async fn list_locations(&self) -> Result<Vec<LocationUpdate>, StorageError> {
        Ok(self.read()?.locations.clone())
    }
}

#[async_trait]
impl UserExt for InMemoryStore {
    async fn list_admins(&self) -> Result<Vec<AdminUser>, StorageError> {
        Ok(self.read()?.admins.clone())
    }

    async fn insert_admin(&self, user: AdminUser) -> Result<AdminUser, StorageError> {
        let mut state = self.write()?;
        if state.admins.iter().any(|a| a.username == user.username) {
            return Err(StorageError::Conflict(format!(
                "username {} is taken",
                user.username
            )));
        }
        state.admins.push(user.clone());
        Ok(user)
    }

    async fn set_admin_active(
        &self,
        user_id: Uuid,
        is_active: bool,
    ) -> Result<Option<AdminUser>, StorageError> {
        let mut state = self.write()?;
        match state.admins.iter_mut().find(|a| a.id == user_id) {
            Some(user) => {
                user.is_active = is_active;
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_admin(&self, user_id: Uuid) -> Result<bool, StorageError> {
        let mut state = self.write()?;
        let before = state.admins.len();
        state.admins.retain(|a| a.id != user_id);
        Ok(state.admins.len() < before)
    }
}
