pub mod api;
pub mod error;
pub mod types;

pub use api::{RecommendApi, RecommendationSource};
pub use error::{ApiError, ApiResult};
pub use types::*;
