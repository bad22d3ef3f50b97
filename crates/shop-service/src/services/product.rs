//! Product catalog service
//!
//! Catalog CRUD plus the featured-products cache. The featured list is
//! served from Redis when warm and rebuilt whenever a product's featured
//! flag changes or a product is deleted. Cache trouble never fails a
//! request; the database remains the source of truth.

use shop_core::Product;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{CreateProductRequest, ProductResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Number of products returned by the recommendations endpoint
const RECOMMENDED_SAMPLE_SIZE: i64 = 4;

/// Product catalog service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the entire catalog, newest first
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().find_all().await?;
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    /// List featured products, read through the Redis cache
    #[instrument(skip(self))]
    pub async fn list_featured(&self) -> ServiceResult<Vec<ProductResponse>> {
        match self.ctx.featured_cache().get::<Vec<ProductResponse>>().await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Featured cache read failed, falling back to database"),
        }

        let products = self.ctx.product_repo().find_featured().await?;
        let responses: Vec<ProductResponse> =
            products.iter().map(ProductResponse::from).collect();

        if let Err(e) = self.ctx.featured_cache().set(&responses).await {
            warn!(error = %e, "Failed to warm featured cache");
        }

        Ok(responses)
    }

    /// List products in a category
    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category: &str) -> ServiceResult<Vec<ProductResponse>> {
        let products = self.ctx.product_repo().find_by_category(category).await?;
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    /// Random product sample for the recommendations endpoint
    #[instrument(skip(self))]
    pub async fn recommended(&self) -> ServiceResult<Vec<ProductResponse>> {
        let products = self
            .ctx
            .product_repo()
            .sample(RECOMMENDED_SAMPLE_SIZE)
            .await?;
        Ok(products.iter().map(ProductResponse::from).collect())
    }

    /// Create a new product
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateProductRequest) -> ServiceResult<ProductResponse> {
        let product = Product::new(
            request.name,
            request.description,
            request.price,
            request.image,
            request.category,
        );

        self.ctx.product_repo().create(&product).await?;

        info!(product_id = %product.id, "Product created");

        Ok(ProductResponse::from(&product))
    }

    /// Flip a product's featured flag, returning the updated product
    #[instrument(skip(self))]
    pub async fn toggle_featured(&self, id: Uuid) -> ServiceResult<ProductResponse> {
        let product = self
            .ctx
            .product_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id.to_string()))?;

        let updated = self
            .ctx
            .product_repo()
            .set_featured(id, !product.is_featured)
            .await?;

        info!(product_id = %id, is_featured = updated.is_featured, "Toggled featured flag");

        self.refresh_featured_cache().await;

        Ok(ProductResponse::from(&updated))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        self.ctx.product_repo().delete(id).await?;

        info!(product_id = %id, "Product deleted");

        // Drop the snapshot; the next featured read rewarms it
        if let Err(e) = self.ctx.featured_cache().invalidate().await {
            warn!(error = %e, "Failed to invalidate featured cache");
        }

        Ok(())
    }

    /// Rebuild the featured cache from the database. Failures are logged
    /// and swallowed so catalog writes never fail on cache trouble.
    async fn refresh_featured_cache(&self) {
        let products = match self.ctx.product_repo().find_featured().await {
            Ok(products) => products,
            Err(e) => {
                warn!(error = %e, "Failed to reload featured products for cache refresh");
                return;
            }
        };

        let responses: Vec<ProductResponse> =
            products.iter().map(ProductResponse::from).collect();

        if let Err(e) = self.ctx.featured_cache().set(&responses).await {
            warn!(error = %e, "Failed to refresh featured cache");
        }
    }
}

#[cfg(test)]
mod tests {
    // Catalog flows require a live database and Redis; the pure pieces
    // (entity construction, DTO mapping) are covered in their own modules.
}
