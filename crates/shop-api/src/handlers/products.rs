//! Product catalog handlers

use axum::{
    extract::{Path, State},
    Json,
};
use shop_service::{CreateProductRequest, ProductResponse, ProductService};
use uuid::Uuid;

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List the whole catalog (admin only)
///
/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let products = service.list_all().await?;
    Ok(Json(products))
}

/// List featured products, served from the Redis cache when warm
///
/// GET /api/products/featured
pub async fn featured_products(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let products = service.list_featured().await?;
    Ok(Json(products))
}

/// Random product sample for the storefront
///
/// GET /api/products/recommendations
pub async fn recommended_products(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let products = service.recommended().await?;
    Ok(Json(products))
}

/// List products in a category
///
/// GET /api/products/category/:category
pub async fn products_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let products = service.list_by_category(&category).await?;
    Ok(Json(products))
}

/// Create a product (admin only)
///
/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> ApiResult<Created<Json<ProductResponse>>> {
    let service = ProductService::new(state.service_context());
    let product = service.create(request).await?;
    Ok(Created(Json(product)))
}

/// Toggle a product's featured flag (admin only)
///
/// PATCH /api/products/:id
pub async fn toggle_featured(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ProductResponse>> {
    let service = ProductService::new(state.service_context());
    let product = service.toggle_featured(id).await?;
    Ok(Json(product))
}

/// Delete a product (admin only)
///
/// DELETE /api/products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<serde_json::Value>> {
    let service = ProductService::new(state.service_context());
    service.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Product deleted successfully" })))
}
