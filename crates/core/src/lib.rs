//! Eventex domain core.
//!
//! Pure validation logic for the event subscription form: field metadata,
//! input cleaning, the validator itself and the structured error set it
//! reports. Nothing here touches the network, a database or templates.

pub mod error;
pub mod form;
pub mod subscription;
pub mod validation;

pub use form::SubscriptionForm;
pub use subscription::{Field, FormData, Subscription};
pub use validation::evaluator::validate;
pub use validation::rules::{ErrorCode, ErrorKey, ErrorSet, FieldError};
