//! Form evaluator — pure logic, no I/O.

use validator::ValidateEmail;

use super::rules::{ErrorCode, ErrorKey, ErrorSet};
use crate::subscription::{Field, FormData, Subscription};

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

/// Validate raw subscription form data.
///
/// Every field is checked independently; the email/phone pairing is checked
/// last, against the values that survived their own checks. Returns the
/// normalized record only when no error at all was recorded.
pub fn validate(data: &FormData) -> Result<Subscription, ErrorSet> {
    let mut errors = ErrorSet::new();

    let name = record(&mut errors, Field::Name, clean_name(data.get(Field::Name)));
    let cpf = record(&mut errors, Field::Cpf, clean_cpf(data.get(Field::Cpf)));
    let email = record(&mut errors, Field::Email, clean_email(data.get(Field::Email)));
    let phone = data.get(Field::Phone).trim().to_string();

    // A rejected email counts as not informed.
    let has_email = email.as_deref().is_some_and(|e| !e.is_empty());
    if !has_email && phone.is_empty() {
        errors.add(ErrorKey::NonField, ErrorCode::IncompleteContact);
    }

    tracing::debug!(
        valid = errors.is_empty(),
        errors = %errors,
        "Validated subscription form"
    );

    match (name, cpf, email) {
        (Some(name), Some(cpf), Some(email)) if errors.is_empty() => Ok(Subscription {
            name,
            cpf,
            email,
            phone,
        }),
        _ => Err(errors),
    }
}

fn record(
    errors: &mut ErrorSet,
    field: Field,
    cleaned: Result<String, ErrorCode>,
) -> Option<String> {
    match cleaned {
        Ok(value) => Some(value),
        Err(code) => {
            errors.add(field, code);
            None
        }
    }
}

fn clean_name(raw: &str) -> Result<String, ErrorCode> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ErrorCode::Required);
    }
    Ok(capitalize_words(raw))
}

/// Only the first failing check is reported: digits, then length.
fn clean_cpf(raw: &str) -> Result<String, ErrorCode> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ErrorCode::Required);
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ErrorCode::Digits);
    }
    if raw.len() != CPF_LENGTH {
        return Err(ErrorCode::Length);
    }
    Ok(raw.to_string())
}

fn clean_email(raw: &str) -> Result<String, ErrorCode> {
    let raw = raw.trim();
    if raw.is_empty() || is_valid_email(raw) {
        Ok(raw.to_string())
    } else {
        Err(ErrorCode::InvalidFormat)
    }
}

/// `local@domain` where the domain has at least one dot.
pub fn is_valid_email(value: &str) -> bool {
    let dotted_domain = value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    dotted_domain && value.validate_email()
}

/// Uppercase the first letter of every whitespace-separated token and
/// lowercase the rest, joining tokens with single spaces.
///
/// ```
/// use eventex_core::validation::evaluator::capitalize_words;
///
/// assert_eq!(capitalize_words("RAMIRO alvaro"), "Ramiro Alvaro");
/// assert_eq!(capitalize_words("  joão   DA silva "), "João Da Silva");
/// ```
pub fn capitalize_words(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_single_letters_and_accents() {
        assert_eq!(capitalize_words("a"), "A");
        assert_eq!(capitalize_words("ÉRICA"), "Érica");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn cpf_accepts_eleven_digits() {
        assert_eq!(clean_cpf("12345678901"), Ok("12345678901".to_string()));
        assert_eq!(clean_cpf(" 12345678901 "), Ok("12345678901".to_string()));
    }

    #[test]
    fn cpf_reports_digits_before_length() {
        assert_eq!(clean_cpf("abcd5678901"), Err(ErrorCode::Digits));
        assert_eq!(clean_cpf("abc"), Err(ErrorCode::Digits));
        assert_eq!(clean_cpf("123.456.789-01"), Err(ErrorCode::Digits));
    }

    #[test]
    fn cpf_rejects_wrong_length() {
        assert_eq!(clean_cpf("12345"), Err(ErrorCode::Length));
        assert_eq!(clean_cpf("123456789012"), Err(ErrorCode::Length));
    }

    #[test]
    fn cpf_is_required() {
        assert_eq!(clean_cpf(""), Err(ErrorCode::Required));
        assert_eq!(clean_cpf("   "), Err(ErrorCode::Required));
    }

    #[test]
    fn name_is_required_after_trimming() {
        assert_eq!(clean_name(" \t "), Err(ErrorCode::Required));
        assert_eq!(clean_name("ana"), Ok("Ana".to_string()));
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("ramiroalvaro.ra@gmail.com"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(!is_valid_email("asdf"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("two@@example.com"));
    }

    #[test]
    fn empty_email_is_accepted() {
        assert_eq!(clean_email(""), Ok(String::new()));
        assert_eq!(clean_email("asdf"), Err(ErrorCode::InvalidFormat));
    }
}
