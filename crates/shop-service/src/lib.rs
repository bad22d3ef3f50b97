//! # shop-service
//!
//! Application layer: the session manager (`AuthService`), the sales
//! aggregator (`AnalyticsService`), and the catalog (`ProductService`),
//! plus the DTOs they exchange with the API layer.

pub mod dto;
pub mod services;

pub use dto::{
    AnalyticsSummaryResponse, CreateProductRequest, DailyRangeQuery, HealthResponse, LoginRequest,
    ProductResponse, ReadinessResponse, SignupRequest, UserResponse,
};
pub use services::{
    AnalyticsService, AuthService, AuthTokens, ProductService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
