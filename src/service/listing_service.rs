use std::sync::Arc;

use validator::Validate;

use crate::config::Config;
use crate::db::propertydb::PropertyExt;
use crate::dtos::propertydtos::{ListingPageDto, ListingQueryDto, PropertyCardDto};
use crate::service::error::ServiceError;
use crate::services::{filter, pagination};

/// Public listing search: fetch the candidate set, run the filter
/// predicate, slice the requested page.
#[derive(Debug, Clone)]
pub struct ListingService<D> {
    db_client: Arc<D>,
    page_size: usize,
}

impl<D: PropertyExt + Send + Sync> ListingService<D> {
    pub fn new(db_client: Arc<D>, config: &Config) -> Self {
        Self {
            db_client,
            page_size: config.listing_page_size,
        }
    }

    /// Run a filtered, paginated listing query. A contradictory filter
    /// yields an empty page, never an error. Callers must send page 1
    /// whenever the filter fields change; this service does not clamp
    /// stale page numbers.
    pub async fn search(&self, query: &ListingQueryDto) -> Result<ListingPageDto, ServiceError> {
        query
            .validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let page = query.page.unwrap_or(1);
        let spec = query.filter_spec();

        let properties = self.db_client.list_properties().await?;
        let matched: Vec<PropertyCardDto> = properties
            .iter()
            .filter(|p| filter::matches(p, &spec))
            .map(PropertyCardDto::from_property)
            .collect();

        let page = pagination::paginate(&matched, page, self.page_size)
            .map_err(ServiceError::Validation)?;

        Ok(ListingPageDto {
            properties: page.items,
            total_pages: page.total_pages,
            current_page: page.current_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::InMemoryStore;
    use crate::models::propertymodel::{Property, PropertyCategory, PropertyFeatures};
    use chrono::Utc;
    use uuid::Uuid;

    fn property(location: &str, price: &str, bed: u32) -> Property {
        Property {
            id: Uuid::new_v4(),
            title: format!("{bed}BHK in {location}"),
            location_text: location.to_string(),
            price: price.to_string(),
            category: PropertyCategory::ForSale,
            features: PropertyFeatures {
                bed,
                bath: bed,
                sqft: 1000,
                parking: None,
            },
            image: "card.jpg".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn seeded_service(count: usize) -> ListingService<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        for i in 0..count {
            store
                .insert_property(property("Kothamangalam", "₹45 Lakh", (i % 4 + 1) as u32))
                .await
                .unwrap();
        }
        ListingService::new(store, &Config::default())
    }

    #[tokio::test]
    async fn test_search_paginates_at_configured_size() {
        let service = seeded_service(13).await;

        let page1 = service.search(&ListingQueryDto::default()).await.unwrap();
        assert_eq!(page1.properties.len(), 6);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.current_page, 1);

        let page3 = service
            .search(&ListingQueryDto {
                page: Some(3),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page3.properties.len(), 1);
    }

    #[tokio::test]
    async fn test_contradictory_filter_yields_empty_page() {
        let service = seeded_service(5).await;
        let result = service
            .search(&ListingQueryDto {
                location: Some("Nowhere".to_string()),
                price_min: Some("9 Crore".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(result.properties.is_empty());
        assert_eq!(result.total_pages, 0);
    }

    #[tokio::test]
    async fn test_filter_narrows_candidates() {
        let store = Arc::new(InMemoryStore::new());
        store
            .insert_property(property("Kothamangalam", "₹45 Lakh", 3))
            .await
            .unwrap();
        store
            .insert_property(property("Kochi", "₹1.75 Crore", 5))
            .await
            .unwrap();
        let service = ListingService::new(store, &Config::default());

        let result = service
            .search(&ListingQueryDto {
                bedrooms: Some("4+".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(result.properties.len(), 1);
        assert_eq!(result.properties[0].location, "Kochi");
    }
}
