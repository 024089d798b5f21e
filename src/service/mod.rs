//! Data access per entity. Each operation runs exactly one statement on a borrowed connection.

mod accounts;
mod advisory;
mod reference;
mod validation;
pub use accounts::{AccountService, EMAIL_TAKEN};
pub(crate) use accounts::SIGNUP_FAILED;
pub use advisory::AdvisoryService;
pub use reference::ReferenceService;
pub use validation::RequestValidator;
