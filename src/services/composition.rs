use serde::{Deserialize, Serialize};

use crate::models::propertymodel::{Property, PropertyDetails, ProgressEntry, GALLERY_CAP};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".ogg"];

/// Classify a media reference by its path extension. Query strings and
/// fragments do not count as part of the path.
pub fn media_kind(reference: &str) -> MediaKind {
    let path = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference)
        .to_lowercase();

    if VIDEO_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Everything a property detail page needs, merged from the property and
/// its optional details document.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PropertyView {
    pub property: Property,
    pub main_media: String,
    pub media_kind: MediaKind,
    pub description: Option<String>,
    pub gallery: Vec<String>,
    pub amenities: Vec<String>,
    pub construction_progress: Vec<ProgressEntry>,
    pub map_url: Option<String>,
}

/// Compose the detail-page view model. Many properties have no extended
/// detail document yet; absence is a normal state and falls back to the
/// property's own image as main media.
pub fn compose_view(property: &Property, details: Option<&PropertyDetails>) -> PropertyView {
    let main_media = details
        .and_then(|d| d.main_media.clone())
        .unwrap_or_else(|| property.image.clone());

    let gallery = details
        .map(|d| d.gallery.iter().take(GALLERY_CAP).cloned().collect())
        .unwrap_or_default();

    PropertyView {
        property: property.clone(),
        media_kind: media_kind(&main_media),
        main_media,
        description: details.map(|d| d.description.clone()),
        gallery,
        amenities: details.map(|d| d.amenities.clone()).unwrap_or_default(),
        construction_progress: details
            .map(|d| d.construction_progress.clone())
            .unwrap_or_default(),
        map_url: details.and_then(|d| d.map_url.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::propertymodel::{PropertyCategory, PropertyFeatures};
    use chrono::Utc;
    use uuid::Uuid;

    fn property(image: &str) -> Property {
        Property {
            id: Uuid::new_v4(),
            title: "Hilltop Villa".to_string(),
            location_text: "Kothamangalam".to_string(),
            price: "₹1.75 Crore".to_string(),
            category: PropertyCategory::Featured,
            features: PropertyFeatures {
                bed: 4,
                bath: 3,
                sqft: 2400,
                parking: Some(2),
            },
            image: image.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn details(property_id: Uuid, main_media: Option<&str>, gallery: &[&str]) -> PropertyDetails {
        PropertyDetails {
            property_id,
            description: "Spacious villa with a view".to_string(),
            main_media: main_media.map(str::to_string),
            gallery: gallery.iter().map(|s| s.to_string()).collect(),
            construction_progress: vec![],
            amenities: vec!["Pool".to_string()],
            map_url: Some("https://maps.example.com/embed/42".to_string()),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_fallback_without_details() {
        let p = property("X.jpg");
        let view = compose_view(&p, None);
        assert_eq!(view.main_media, "X.jpg");
        assert_eq!(view.media_kind, MediaKind::Image);
        assert!(view.gallery.is_empty());
        assert!(view.amenities.is_empty());
        assert!(view.construction_progress.is_empty());
        assert_eq!(view.description, None);
        assert_eq!(view.map_url, None);
    }

    #[test]
    fn test_details_main_media_wins() {
        let p = property("card.jpg");
        let d = details(p.id, Some("tour.mp4"), &[]);
        let view = compose_view(&p, Some(&d));
        assert_eq!(view.main_media, "tour.mp4");
        assert_eq!(view.media_kind, MediaKind::Video);
    }

    #[test]
    fn test_details_without_main_media_falls_back() {
        let p = property("card.jpg");
        let d = details(p.id, None, &["a.jpg"]);
        let view = compose_view(&p, Some(&d));
        assert_eq!(view.main_media, "card.jpg");
        assert_eq!(view.gallery, vec!["a.jpg".to_string()]);
        assert_eq!(view.amenities, vec!["Pool".to_string()]);
    }

    #[test]
    fn test_video_detection_case_insensitive() {
        assert_eq!(media_kind("clip.MP4"), MediaKind::Video);
        assert_eq!(media_kind("walkthrough.WebM"), MediaKind::Video);
        assert_eq!(media_kind("audio.ogg"), MediaKind::Video);
        assert_eq!(media_kind("photo.jpg"), MediaKind::Image);
        assert_eq!(media_kind("https://cdn.example.com/v/clip.mp4?token=abc"), MediaKind::Video);
    }

    #[test]
    fn test_gallery_defensively_truncated() {
        let p = property("card.jpg");
        let d = details(p.id, None, &["1.jpg", "2.jpg", "3.jpg", "4.jpg", "5.jpg", "6.jpg"]);
        let view = compose_view(&p, Some(&d));
        assert_eq!(view.gallery.len(), GALLERY_CAP);
        assert_eq!(view.gallery[3], "4.jpg");
    }
}
