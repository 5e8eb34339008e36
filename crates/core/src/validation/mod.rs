//! Subscription form validation.
//!
//! Provides the error taxonomy and error set types, and a pure-logic
//! evaluator that turns raw form data into a [`Subscription`] or an
//! [`ErrorSet`].
//!
//! [`Subscription`]: crate::subscription::Subscription
//! [`ErrorSet`]: rules::ErrorSet

pub mod evaluator;
pub mod rules;
