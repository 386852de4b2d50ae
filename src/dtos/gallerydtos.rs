use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::gallerymodel::GalleryKind;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateGalleryItemDto {
    pub kind: GalleryKind,

    #[validate(length(min = 1, max = 150, message = "Title is required"))]
    pub title: String,

    #[validate(length(max = 1000, message = "Description is too long"))]
    #[serde(default)]
    pub description: String,

    /// Sort position within the kind; lower comes first.
    #[serde(default)]
    pub order: i32,
}

/// One entry of a batch order update.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReorderItemDto {
    pub id: Uuid,
    pub order: i32,
}
