//! Bound subscription form.
//!
//! Wraps one validation run so a rendering layer can ask the usual
//! questions (is it valid, what went wrong, what was cleaned) without
//! validating twice.

use crate::subscription::{Field, FormData, Subscription};
use crate::validation::evaluator::validate;
use crate::validation::rules::ErrorSet;

/// A subscription form bound to submitted data.
#[derive(Debug, Clone)]
pub struct SubscriptionForm {
    data: FormData,
    cleaned: Option<Subscription>,
    errors: ErrorSet,
}

impl SubscriptionForm {
    /// Field keys in declaration order.
    pub fn fields() -> [Field; 4] {
        Field::ALL
    }

    /// Bind `data` and validate it.
    pub fn bind(data: FormData) -> Self {
        let (cleaned, errors) = match validate(&data) {
            Ok(subscription) => (Some(subscription), ErrorSet::new()),
            Err(errors) => (None, errors),
        };
        Self {
            data,
            cleaned,
            errors,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn is_valid(&self) -> bool {
        self.cleaned.is_some()
    }

    /// Errors of the run; empty when the form is valid.
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn cleaned_data(&self) -> Option<&Subscription> {
        self.cleaned.as_ref()
    }

    pub fn into_result(self) -> Result<Subscription, ErrorSet> {
        self.cleaned.ok_or(self.errors)
    }
}
