use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKind {
    Construction,
    Renovation,
}

/// A categorized showcase image independent of any property.
///
/// `is_active` controls visibility in the public showcase only; deletion is
/// a hard delete and does not go through this flag.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GalleryItem {
    pub id: Uuid,
    pub kind: GalleryKind,
    pub title: String,
    pub description: String,
    pub image: String,
    /// Sort key within a kind: order ascending, creation time descending
    /// for ties.
    pub order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
