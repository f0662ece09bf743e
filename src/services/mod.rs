pub mod camp_service;
pub mod payment_gateway;
pub mod payment_service;
pub mod registration_service;
pub mod user_service;

use uuid::Uuid;

use crate::error::AppError;

// Route ids are UUID strings; anything else is rejected before it reaches the store.
pub(crate) fn ensure_well_formed_id(id: &str, what: &'static str) -> Result<(), AppError> {
    Uuid::parse_str(id)
        .map(|_| ())
        .map_err(|_| AppError::InvalidArgument(format!("malformed {what} id")))
}
