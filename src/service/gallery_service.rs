use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::config::Config;
use crate::db::gallerydb::GalleryExt;
use crate::dtos::gallerydtos::{CreateGalleryItemDto, ReorderItemDto};
use crate::models::gallerymodel::{GalleryItem, GalleryKind};
use crate::service::error::ServiceError;
use crate::service::media_provider::{enforce_ceiling, MediaPayload, MediaProvider};

/// Showcase ordering: order ascending, newest first on ties.
pub fn sort_showcase(items: &mut [GalleryItem]) {
    items.sort_by(|a, b| {
        a.order
            .cmp(&b.order)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Construction/renovation showcase management: one item per uploaded
/// image, batch reordering, hard deletes.
#[derive(Debug, Clone)]
pub struct GalleryService<D, M> {
    db_client: Arc<D>,
    media: Arc<M>,
    config: Config,
}

impl<D, M> GalleryService<D, M>
where
    D: GalleryExt + Send + Sync,
    M: MediaProvider + Send + Sync,
{
    pub fn new(db_client: Arc<D>, media: Arc<M>, config: Config) -> Self {
        Self {
            db_client,
            media,
            config,
        }
    }

    /// Upload-then-insert, one item per image. No compensation if the
    /// insert fails after the upload; the file stays orphaned.
    pub async fn create_item(
        &self,
        body: CreateGalleryItemDto,
        image: MediaPayload,
    ) -> Result<GalleryItem, ServiceError> {
        body.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        enforce_ceiling(&image, self.config.max_image_upload_bytes)?;

        let image_url = self.media.upload(&image).await?;

        let item = GalleryItem {
            id: Uuid::new_v4(),
            kind: body.kind,
            title: body.title,
            description: body.description,
            image: image_url,
            order: body.order,
            is_active: true,
            created_at: Utc::now(),
        };

        let created = self.db_client.insert_item(item).await?;
        tracing::info!(item_id = %created.id, "gallery item created");
        Ok(created)
    }

    /// Items for the public showcase: visible ones only, in display order.
    /// `is_active` is purely a visibility switch; hidden items still exist
    /// until they are hard-deleted.
    pub async fn public_items(
        &self,
        kind: Option<GalleryKind>,
    ) -> Result<Vec<GalleryItem>, ServiceError> {
        let mut items: Vec<GalleryItem> = self
            .db_client
            .list_items(kind)
            .await?
            .into_iter()
            .filter(|item| item.is_active)
            .collect();
        sort_showcase(&mut items);
        Ok(items)
    }

    /// Everything, including hidden items, for the admin grid.
    pub async fn admin_items(
        &self,
        kind: Option<GalleryKind>,
    ) -> Result<Vec<GalleryItem>, ServiceError> {
        let mut items = self.db_client.list_items(kind).await?;
        sort_showcase(&mut items);
        Ok(items)
    }

    pub async fn reorder(&self, orders: &[ReorderItemDto]) -> Result<(), ServiceError> {
        let pairs: Vec<(Uuid, i32)> = orders.iter().map(|o| (o.id, o.order)).collect();
        self.db_client.update_orders(&pairs).await?;
        Ok(())
    }

    /// Hard delete, then best-effort removal of the backing media file.
    /// The record is already gone when the media delete runs, so a media
    /// failure is logged rather than failing the operation.
    pub async fn delete_item(&self, item_id: Uuid) -> Result<(), ServiceError> {
        let removed = self
            .db_client
            .delete_item(item_id)
            .await?
            .ok_or(ServiceError::GalleryItemNotFound(item_id))?;

        if let Err(e) = self.media.delete(&removed.image).await {
            tracing::warn!(%item_id, error = %e, "failed to remove media for deleted gallery item");
        }
        tracing::info!(%item_id, "gallery item deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::InMemoryStore;
    use crate::service::media_provider::testing::MockMediaProvider;
    use chrono::Duration;

    fn image(filename: &str) -> MediaPayload {
        MediaPayload {
            filename: filename.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0; 10],
        }
    }

    fn dto(kind: GalleryKind, title: &str, order: i32) -> CreateGalleryItemDto {
        CreateGalleryItemDto {
            kind,
            title: title.to_string(),
            description: String::new(),
            order,
        }
    }

    fn service() -> GalleryService<InMemoryStore, MockMediaProvider> {
        GalleryService::new(
            Arc::new(InMemoryStore::new()),
            Arc::new(MockMediaProvider::new()),
            Config::default(),
        )
    }

    #[test]
    fn test_sort_order_asc_then_created_desc() {
        let now = Utc::now();
        let item = |order: i32, age_secs: i64| GalleryItem {
            id: Uuid::new_v4(),
            kind: GalleryKind::Construction,
            title: format!("o{order}a{age_secs}"),
            description: String::new(),
            image: "x.jpg".to_string(),
            order,
            is_active: true,
            created_at: now - Duration::seconds(age_secs),
        };

        let mut items = vec![item(2, 0), item(1, 30), item(1, 10)];
        sort_showcase(&mut items);
        assert_eq!(items[0].title, "o1a10"); // newer wins the tie
        assert_eq!(items[1].title, "o1a30");
        assert_eq!(items[2].title, "o2a0");
    }

    #[tokio::test]
    async fn test_public_items_hide_inactive() {
        let svc = service();
        let shown = svc
            .create_item(dto(GalleryKind::Renovation, "Before/after", 0), image("a.jpg"))
            .await
            .unwrap();
        let hidden = svc
            .create_item(dto(GalleryKind::Renovation, "Draft", 1), image("b.jpg"))
            .await
            .unwrap();

        // flip visibility directly in the store
        let mut copy = hidden.clone();
        copy.is_active = false;
        svc.db_client.delete_item(hidden.id).await.unwrap();
        svc.db_client.insert_item(copy).await.unwrap();

        let visible = svc.public_items(Some(GalleryKind::Renovation)).await.unwrap();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, shown.id);

        let all = svc.admin_items(Some(GalleryKind::Renovation)).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_reorder_batch() {
        let svc = service();
        let a = svc
            .create_item(dto(GalleryKind::Construction, "A", 0), image("a.jpg"))
            .await
            .unwrap();
        let b = svc
            .create_item(dto(GalleryKind::Construction, "B", 1), image("b.jpg"))
            .await
            .unwrap();

        svc.reorder(&[
            ReorderItemDto { id: a.id, order: 5 },
            ReorderItemDto { id: b.id, order: 2 },
        ])
        .await
        .unwrap();

        let items = svc.public_items(Some(GalleryKind::Construction)).await.unwrap();
        assert_eq!(items[0].id, b.id);
        assert_eq!(items[1].id, a.id);
    }

    #[tokio::test]
    async fn test_delete_is_hard_and_drops_media() {
        let svc = service();
        let item = svc
            .create_item(dto(GalleryKind::Construction, "Slab", 0), image("slab.jpg"))
            .await
            .unwrap();

        svc.delete_item(item.id).await.unwrap();

        assert!(svc.admin_items(None).await.unwrap().is_empty());
        assert_eq!(
            svc.media.deletes.lock().unwrap().as_slice(),
            &["https://media.test/slab.jpg".to_string()]
        );

        let err = svc.delete_item(item.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::GalleryItemNotFound(_)));
    }
}
