pub mod controller;
pub mod error;

pub use controller::RecommendationForm;
pub use error::FormError;
