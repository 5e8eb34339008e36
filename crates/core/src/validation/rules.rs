//! Validation error codes, keys and the aggregated error set.

use std::fmt;

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::subscription::Field;

/// Key used for errors that belong to the form as a whole.
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Stable identifier of a validation failure, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    /// A mandatory field was empty or missing.
    Required,
    /// Non-numeric characters where only digits are allowed.
    Digits,
    /// Wrong number of characters.
    Length,
    /// Malformed email address.
    InvalidFormat,
    /// Neither email nor phone was supplied.
    IncompleteContact,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Required => "required",
            ErrorCode::Digits => "digits",
            ErrorCode::Length => "length",
            ErrorCode::InvalidFormat => "invalid-format",
            ErrorCode::IncompleteContact => "incomplete-contact",
        }
    }

    /// Message shown to the person filling in the form.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorCode::Required => "Este campo é obrigatório.",
            ErrorCode::Digits => "CPF deve conter apenas números.",
            ErrorCode::Length => "CPF deve ter 11 números.",
            ErrorCode::InvalidFormat => "Informe um endereço de email válido.",
            ErrorCode::IncompleteContact => "Informe seu e-mail ou telefone.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.default_message().to_string(),
        }
    }
}

/// Where an error is attached: a single field, or the whole form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKey {
    Field(Field),
    NonField,
}

impl ErrorKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKey::Field(field) => field.as_str(),
            ErrorKey::NonField => NON_FIELD_ERRORS,
        }
    }
}

impl From<Field> for ErrorKey {
    fn from(field: Field) -> Self {
        ErrorKey::Field(field)
    }
}

impl fmt::Display for ErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Errors of one validation run, grouped by key in insertion order.
///
/// Serializes as `{"<key>": [{"code": "...", "message": "..."}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet(IndexMap<ErrorKey, Vec<FieldError>>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error with the code's default message under `key`.
    pub fn add(&mut self, key: impl Into<ErrorKey>, code: ErrorCode) {
        self.push(key, FieldError::new(code));
    }

    pub fn push(&mut self, key: impl Into<ErrorKey>, error: FieldError) {
        self.0.entry(key.into()).or_default().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys carrying at least one error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = ErrorKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ErrorKey, &[FieldError])> + '_ {
        self.0.iter().map(|(key, errors)| (*key, errors.as_slice()))
    }

    pub fn get(&self, key: impl Into<ErrorKey>) -> &[FieldError] {
        self.0
            .get(&key.into())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn field(&self, field: Field) -> &[FieldError] {
        self.get(field)
    }

    pub fn non_field_errors(&self) -> &[FieldError] {
        self.get(ErrorKey::NonField)
    }

    pub fn has_code(&self, key: impl Into<ErrorKey>, code: ErrorCode) -> bool {
        self.get(key).iter().any(|e| e.code == code)
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, errors)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            let codes: Vec<&str> = errors.iter().map(|e| e.code.as_str()).collect();
            write!(f, "{key}: {}", codes.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_set_has_no_errors_for_any_key() {
        let errors = ErrorSet::new();
        assert!(errors.is_empty());
        assert!(errors.field(Field::Cpf).is_empty());
        assert!(errors.non_field_errors().is_empty());
    }

    #[test]
    fn add_groups_errors_by_key() {
        let mut errors = ErrorSet::new();
        errors.add(Field::Cpf, ErrorCode::Digits);
        errors.add(Field::Cpf, ErrorCode::Length);
        errors.add(ErrorKey::NonField, ErrorCode::IncompleteContact);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.field(Field::Cpf).len(), 2);
        assert!(errors.has_code(Field::Cpf, ErrorCode::Length));
        assert!(!errors.has_code(Field::Name, ErrorCode::Required));
    }

    #[test]
    fn keys_keep_insertion_order() {
        let mut errors = ErrorSet::new();
        errors.add(Field::Email, ErrorCode::InvalidFormat);
        errors.add(Field::Name, ErrorCode::Required);
        errors.add(ErrorKey::NonField, ErrorCode::IncompleteContact);

        let keys: Vec<&str> = errors.keys().map(ErrorKey::as_str).collect();
        assert_eq!(keys, ["email", "name", "__all__"]);
    }

    #[test]
    fn serializes_with_string_keys_and_codes() {
        let mut errors = ErrorSet::new();
        errors.add(Field::Email, ErrorCode::InvalidFormat);
        errors.add(ErrorKey::NonField, ErrorCode::IncompleteContact);

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!({
                "email": [{
                    "code": "invalid-format",
                    "message": "Informe um endereço de email válido."
                }],
                "__all__": [{
                    "code": "incomplete-contact",
                    "message": "Informe seu e-mail ou telefone."
                }]
            })
        );
    }

    #[test]
    fn display_lists_codes_per_key() {
        let mut errors = ErrorSet::new();
        errors.add(Field::Cpf, ErrorCode::Digits);
        errors.add(Field::Name, ErrorCode::Required);
        assert_eq!(errors.to_string(), "cpf: digits; name: required");
    }
}
