//! Core of a real-estate marketing site with an admin back office:
//! listing search/filter/pagination, property detail composition,
//! the showcase gallery and visit analytics. HTTP routing, the document
//! store, the media host and the auth service are collaborators reached
//! through the traits in `db` and `service`; this crate is the
//! post-fetch, pre-render transformation and orchestration layer.

pub mod config;
pub mod db;
pub mod dtos;
pub mod error;
pub mod models;
pub mod service;
pub mod services;

pub use config::Config;
pub use error::HttpError;
pub use service::analytics_service::AnalyticsService;
pub use service::gallery_service::GalleryService;
pub use service::listing_service::ListingService;
pub use service::property_service::PropertyService;
pub use service::user_service::UserService;
pub use services::filter::FilterSpec;
