pub mod camps;
pub mod payments;
pub mod registrations;
pub mod users;

pub use camps::CampRow;
pub use payments::PaymentRow;
pub use registrations::RegistrationRow;
pub use users::UserRow;
