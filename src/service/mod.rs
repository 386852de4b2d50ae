pub mod analytics_service;
pub mod auth;
pub mod error;
pub mod gallery_service;
pub mod listing_service;
pub mod media_provider;
pub mod property_service;
pub mod user_service;
