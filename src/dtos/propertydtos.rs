use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::propertymodel::{
    Property, PropertyCategory, PropertyFeatures, GALLERY_CAP,
};
use crate::services::filter::FilterSpec;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreatePropertyDto {
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: String,

    #[validate(length(min = 2, max = 200, message = "Location is required"))]
    pub location_text: String,

    #[validate(length(min = 1, message = "Price is required"))]
    pub price: String,

    pub category: PropertyCategory,

    // bed/bath/sqft are required for every persisted property
    pub features: PropertyFeatures,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePropertyDto {
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 2, max = 200, message = "Location is required"))]
    pub location_text: Option<String>,

    #[validate(length(min = 1, message = "Price is required"))]
    pub price: Option<String>,

    pub category: Option<PropertyCategory>,
    pub features: Option<PropertyFeatures>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NewProgressEntryDto {
    pub image: String,
    /// A label is generated when none is supplied.
    pub label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpsertDetailsDto {
    #[validate(length(min = 1, max = 5000, message = "Description is required"))]
    pub description: String,

    pub main_media: Option<String>,

    /// Side-thumbnail carousel; the size cap is enforced server-side.
    #[validate(length(max = 4, message = "Gallery can hold at most 4 images"))]
    pub gallery: Vec<String>,

    /// New progress uploads; appended to whatever is already stored.
    #[serde(default)]
    pub construction_progress: Vec<NewProgressEntryDto>,

    #[serde(default)]
    pub amenities: Vec<String>,

    pub map_url: Option<String>,
}

/// Query DTO for the public listing grid: a page number plus the raw filter
/// fields as the UI sends them.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct ListingQueryDto {
    #[validate(range(min = 1))]
    pub page: Option<usize>,

    pub location: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub bedrooms: Option<String>,
    pub bathrooms: Option<String>,
    pub parking: Option<String>,
}

impl ListingQueryDto {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            location: self.location.clone(),
            price_min: self.price_min.clone(),
            price_max: self.price_max.clone(),
            bedrooms: self.bedrooms.clone(),
            bathrooms: self.bathrooms.clone(),
            parking: self.parking.clone(),
        }
    }
}

/// Card-sized projection of a property for the listing grid.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PropertyCardDto {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub price: String,
    pub category: PropertyCategory,
    pub features: PropertyFeatures,
    pub image: String,
}

impl PropertyCardDto {
    pub fn from_property(property: &Property) -> Self {
        Self {
            id: property.id,
            title: property.title.clone(),
            location: property.location_text.clone(),
            price: property.price.clone(),
            category: property.category,
            features: property.features,
            image: property.image.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListingPageDto {
    pub properties: Vec<PropertyCardDto>,
    pub total_pages: usize,
    pub current_page: usize,
}

// Keep the dto-side cap in sync with the model constant.
const _: () = assert!(GALLERY_CAP == 4);
