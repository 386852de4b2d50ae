use async_trait::async_trait;
use uuid::Uuid;

use crate::db::StorageError;
use crate::models::gallerymodel::{GalleryItem, GalleryKind};

/// Storage contract for the construction/renovation showcase gallery.
#[async_trait]
pub trait GalleryExt {
    /// All items, optionally narrowed to one kind. Ordering is the
    /// caller's concern.
    async fn list_items(
        &self,
        kind: Option<GalleryKind>,
    ) -> Result<Vec<GalleryItem>, StorageError>;

    async fn insert_item(&self, item: GalleryItem) -> Result<GalleryItem, StorageError>;

    /// Batch order update; ids without a matching record are skipped.
    async fn update_orders(&self, orders: &[(Uuid, i32)]) -> Result<(), StorageError>;

    /// Hard delete. Returns the removed item so the caller can drop its
    /// backing media file.
    async fn delete_item(&self, item_id: Uuid) -> Result<Option<GalleryItem>, StorageError>;
}
