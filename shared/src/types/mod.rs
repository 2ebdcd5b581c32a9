//! Type definitions module with domain-specific sub-modules
//!
//! - `pagination` - skip/take pagination for list endpoints
//! - `response` - API response wrappers and health checks

pub mod pagination;
pub mod response;

// Re-export commonly used types at module level
pub use pagination::{Page, PageRequest, DEFAULT_SKIP, DEFAULT_TAKE, MAX_TAKE};
pub use response::{ErrorBody, HealthResponse, MessageResponse};
