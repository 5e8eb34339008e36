//! Subscription form fields, raw input and the validated record.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A field of the subscription form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Cpf,
    Email,
    Phone,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Cpf, Field::Email, Field::Phone];

    /// Key used in submitted form data and in error sets.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Cpf => "cpf",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Cpf => "CPF",
            Field::Email => "Email",
            Field::Phone => "Telefone",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::Name | Field::Cpf)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Raw submitted form data: a flat mapping of key to string.
///
/// An absent key reads as the empty string. Keys that are not form fields
/// are kept but never looked at by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(IndexMap<String, String>);

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field.as_str().to_string(), value.into());
    }

    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.shift_remove(field.as_str())
    }

    /// Raw value for `field`, or `""` when the key is absent.
    pub fn get(&self, field: Field) -> &str {
        self.0.get(field.as_str()).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(field.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A subscription that passed validation, with its name normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn fields_are_declared_in_form_order() {
        let keys: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(keys, ["name", "cpf", "email", "phone"]);
    }

    #[test]
    fn only_name_and_cpf_are_required() {
        let required: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(required, [Field::Name, Field::Cpf]);
    }

    #[test]
    fn labels_are_shown_in_portuguese() {
        let labels: Vec<&str> = Field::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, ["Nome", "CPF", "Email", "Telefone"]);
    }

    #[test]
    fn field_parses_from_key() {
        assert_eq!("phone".parse::<Field>().unwrap(), Field::Phone);
        assert_matches!(
            "address".parse::<Field>(),
            Err(CoreError::UnknownField(key)) if key == "address"
        );
    }

    #[test]
    fn absent_key_reads_as_empty() {
        let data = FormData::new().with(Field::Name, "Ramiro");
        assert_eq!(data.get(Field::Name), "Ramiro");
        assert_eq!(data.get(Field::Phone), "");
        assert!(!data.contains(Field::Phone));
    }

    #[test]
    fn form_data_deserializes_from_flat_object() {
        let data: FormData =
            serde_json::from_str(r#"{"name": "Ramiro", "cpf": "12345678901", "extra": "x"}"#)
                .unwrap();
        assert_eq!(data.get(Field::Cpf), "12345678901");
        assert_eq!(data.get(Field::Email), "");
    }

    #[test]
    fn form_data_collects_from_pairs() {
        let data: FormData = [("email", "a@b.com"), ("phone", "31-991387178")]
            .into_iter()
            .collect();
        assert_eq!(data.get(Field::Email), "a@b.com");
        assert_eq!(data.get(Field::Phone), "31-991387178");
    }
}
