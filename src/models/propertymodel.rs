use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PropertyCategory {
    #[serde(rename = "For Sale")]
    ForSale,
    Featured,
    New,
    Sold,
}

/// Room/size counts shown on listing cards and used by the search filter.
/// bed/bath/sqft are required at creation; parking is optional and treated
/// as 0 by the filter when absent.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct PropertyFeatures {
    pub bed: u32,
    pub bath: u32,
    pub sqft: u32,
    pub parking: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Property {
    pub id: Uuid,

    // Basic listing info
    pub title: String,
    pub location_text: String,

    /// Free-text price as entered by the admin, e.g. "₹1.75 Crore",
    /// "₹45 Lakh" or a plain numeric string.
    pub price: String,
    pub category: PropertyCategory,
    pub features: PropertyFeatures,

    /// Externally hosted listing image (public URL).
    pub image: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One step of a construction-progress timeline on a detail page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProgressEntry {
    pub image: String,
    pub label: String,
}

/// Optional extended content for exactly one property (upsert keyed on
/// `property_id`). A property without a details document is a normal state;
/// readers fall back to the property's own image.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PropertyDetails {
    pub property_id: Uuid,
    pub description: String,
    pub main_media: Option<String>,
    /// Side-thumbnail carousel, at most GALLERY_CAP entries.
    pub gallery: Vec<String>,
    /// Accumulates across updates: new uploads are appended, never replace
    /// existing entries.
    pub construction_progress: Vec<ProgressEntry>,
    pub amenities: Vec<String>,
    pub map_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Maximum number of side-thumbnail gallery images on a detail page.
pub const GALLERY_CAP: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_to_display_strings() {
        assert_eq!(
            serde_json::to_string(&PropertyCategory::ForSale).unwrap(),
            "\"For Sale\""
        );
        assert_eq!(
            serde_json::from_str::<PropertyCategory>("\"Sold\"").unwrap(),
            PropertyCategory::Sold
        );
    }

    #[test]
    fn test_missing_parking_deserializes_as_none() {
        let features: PropertyFeatures =
            serde_json::from_str(r#"{"bed":3,"bath":2,"sqft":1500}"#).unwrap();
        assert_eq!(features.parking, None);
    }
}
