pub mod http;

// Re-export comodi
pub use http::{CreateProductRequest, CreateUserRequest, Envelope, HealthStatus};
