//! Catalog caching

mod featured;

pub use featured::FeaturedProductsCache;
