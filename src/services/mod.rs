pub mod analytics;
pub mod composition;
pub mod filter;
pub mod pagination;
pub mod pricing;
