use coffee_rec_api::ApiError;
use thiserror::Error;

pub const EMPTY_SELECTION_MESSAGE: &str = "Please select at least one flavor descriptor.";
pub const IN_FLIGHT_MESSAGE: &str = "A request is already in progress.";

#[derive(Debug, Error)]
pub enum FormError {
    #[error("no flavor descriptor selected")]
    EmptySelection,

    #[error("a recommendation request is already in flight")]
    RequestInFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::EmptySelection => EMPTY_SELECTION_MESSAGE,
            FormError::RequestInFlight => IN_FLIGHT_MESSAGE,
            FormError::Api(e) => e.user_message(),
        }
    }
}
