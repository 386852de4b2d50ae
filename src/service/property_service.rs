use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::config::Config;
use crate::db::propertydb::PropertyExt;
use crate::dtos::propertydtos::{CreatePropertyDto, UpdatePropertyDto, UpsertDetailsDto};
use crate::models::propertymodel::{
    Property, PropertyDetails, ProgressEntry, GALLERY_CAP,
};
use crate::service::error::ServiceError;
use crate::service::media_provider::{enforce_ceiling, MediaPayload, MediaProvider};
use crate::services::composition::{compose_view, PropertyView};

/// Admin-side property CRUD, detail-page upserts and the public detail
/// view composition.
#[derive(Debug, Clone)]
pub struct PropertyService<D, M> {
    db_client: Arc<D>,
    media: Arc<M>,
    config: Config,
}

impl<D, M> PropertyService<D, M>
where
    D: PropertyExt + Send + Sync,
    M: MediaProvider + Send + Sync,
{
    pub fn new(db_client: Arc<D>, media: Arc<M>, config: Config) -> Self {
        Self {
            db_client,
            media,
            config,
        }
    }

    fn ceiling_for(&self, payload: &MediaPayload) -> usize {
        if payload.is_video() {
            self.config.max_video_upload_bytes
        } else {
            self.config.max_image_upload_bytes
        }
    }

    /// Upload a blob to the media host after the size gate. Exposed so the
    /// admin surface can upload detail-page media and pass the returned
    /// URL back in an upsert.
    pub async fn upload_media(&self, payload: &MediaPayload) -> Result<String, ServiceError> {
        enforce_ceiling(payload, self.ceiling_for(payload))?;
        let url = self.media.upload(payload).await?;
        tracing::info!(filename = %payload.filename, %url, "media uploaded");
        Ok(url)
    }

    /// Two-phase create: upload the listing image, then persist the
    /// record. There is no compensation on partial failure; if the insert
    /// fails after a successful upload, the uploaded file stays orphaned
    /// on the media host.
    pub async fn create_property(
        &self,
        body: CreatePropertyDto,
        image: MediaPayload,
    ) -> Result<Property, ServiceError> {
        body.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let image_url = self.upload_media(&image).await?;

        let now = Utc::now();
        let property = Property {
            id: Uuid::new_v4(),
            title: body.title,
            location_text: body.location_text,
            price: body.price,
            category: body.category,
            features: body.features,
            image: image_url.clone(),
            created_at: now,
            updated_at: now,
        };

        let created = self.db_client.insert_property(property).await.map_err(|e| {
            tracing::warn!(%image_url, "property insert failed after upload; media orphaned");
            e
        })?;

        tracing::info!(property_id = %created.id, "property created");
        Ok(created)
    }

    /// Partial update; a new image, when supplied, is uploaded first and
    /// the old URL is simply abandoned on the media host.
    pub async fn update_property(
        &self,
        property_id: Uuid,
        body: UpdatePropertyDto,
        new_image: Option<MediaPayload>,
    ) -> Result<Property, ServiceError> {
        body.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let mut property = self
            .db_client
            .get_property_by_id(property_id)
            .await?
            .ok_or(ServiceError::PropertyNotFound(property_id))?;

        if let Some(payload) = new_image {
            property.image = self.upload_media(&payload).await?;
        }
        if let Some(title) = body.title {
            property.title = title;
        }
        if let Some(location_text) = body.location_text {
            property.location_text = location_text;
        }
        if let Some(price) = body.price {
            property.price = price;
        }
        if let Some(category) = body.category {
            property.category = category;
        }
        if let Some(features) = body.features {
            property.features = features;
        }
        property.updated_at = Utc::now();

        self.db_client
            .update_property(property)
            .await?
            .ok_or(ServiceError::PropertyNotFound(property_id))
    }

    /// Permanent delete. The detail document, if any, is left in place;
    /// readers already tolerate orphans.
    pub async fn delete_property(&self, property_id: Uuid) -> Result<(), ServiceError> {
        let removed = self.db_client.delete_property(property_id).await?;
        if !removed {
            return Err(ServiceError::PropertyNotFound(property_id));
        }
        tracing::info!(%property_id, "property deleted");
        Ok(())
    }

    /// Create or replace the detail document for a property. The gallery
    /// cap is enforced here, server-side, rather than trusting the
    /// submitting client. Unlabeled progress entries get generated labels
    /// numbered after whatever is already stored, since progress entries
    /// accumulate across updates.
    pub async fn upsert_details(
        &self,
        property_id: Uuid,
        body: UpsertDetailsDto,
    ) -> Result<PropertyDetails, ServiceError> {
        body.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        if body.gallery.len() > GALLERY_CAP {
            return Err(ServiceError::Validation(format!(
                "Gallery can hold at most {GALLERY_CAP} images"
            )));
        }

        self.db_client
            .get_property_by_id(property_id)
            .await?
            .ok_or(ServiceError::PropertyNotFound(property_id))?;

        let existing_progress = self
            .db_client
            .get_details_by_property_id(property_id)
            .await?
            .map(|d| d.construction_progress.len())
            .unwrap_or(0);

        let construction_progress = body
            .construction_progress
            .into_iter()
            .enumerate()
            .map(|(i, entry)| ProgressEntry {
                image: entry.image,
                label: entry
                    .label
                    .unwrap_or_else(|| format!("Update {}", existing_progress + i + 1)),
            })
            .collect();

        let details = PropertyDetails {
            property_id,
            description: body.description,
            main_media: body.main_media,
            gallery: body.gallery,
            construction_progress,
            amenities: body.amenities,
            map_url: body.map_url,
            updated_at: Utc::now(),
        };

        // the store appends the new progress entries to any existing ones
        Ok(self.db_client.upsert_details(details).await?)
    }

    /// Replace the main media of an existing detail page in one step
    /// (the "swap the walkthrough video" admin operation).
    pub async fn replace_main_media(
        &self,
        property_id: Uuid,
        payload: MediaPayload,
    ) -> Result<PropertyDetails, ServiceError> {
        let mut details = self
            .db_client
            .get_details_by_property_id(property_id)
            .await?
            .ok_or_else(|| {
                ServiceError::Validation("Property has no detail page to attach media to".to_string())
            })?;

        details.main_media = Some(self.upload_media(&payload).await?);
        details.updated_at = Utc::now();
        // the store-side upsert appends progress entries; send none so the
        // stored timeline is preserved unchanged
        details.construction_progress = Vec::new();
        Ok(self.db_client.upsert_details(details).await?)
    }

    /// Delete the detail document independently of its property.
    pub async fn delete_details(&self, property_id: Uuid) -> Result<bool, ServiceError> {
        Ok(self.db_client.delete_details(property_id).await?)
    }

    /// Compose the public detail view. A missing detail document is a
    /// normal state and falls back to the property's own image; a missing
    /// property is a 404.
    pub async fn compose_property_view(
        &self,
        property_id: Uuid,
    ) -> Result<PropertyView, ServiceError> {
        let property = self
            .db_client
            .get_property_by_id(property_id)
            .await?
            .ok_or(ServiceError::PropertyNotFound(property_id))?;

        let details = self
            .db_client
            .get_details_by_property_id(property_id)
            .await?;

        Ok(compose_view(&property, details.as_ref()))
    }
}
