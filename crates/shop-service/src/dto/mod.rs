//! Data transfer objects for the API surface

mod mappers;
mod requests;
mod responses;

pub use requests::{CreateProductRequest, DailyRangeQuery, LoginRequest, SignupRequest};
pub use responses::{
    AnalyticsSummaryResponse, HealthChecks, HealthResponse, ProductResponse, ReadinessResponse,
    UserResponse,
};
