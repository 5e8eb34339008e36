//! Check runner: read a submission, validate it, render the report.

use std::io::Read;

use eventex_core::{validate, ErrorSet, FormData, Subscription};
use serde::Serialize;

use crate::config::CheckConfig;
use crate::error::CliError;
use crate::response::{DataResponse, ErrorResponse};

/// Exit code for a valid submission.
pub const EXIT_VALID: u8 = 0;
/// Exit code for a submission that failed validation.
pub const EXIT_INVALID: u8 = 1;

/// Outcome of checking one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Valid(Subscription),
    Invalid(ErrorSet),
}

impl Report {
    pub fn exit_code(&self) -> u8 {
        match self {
            Report::Valid(_) => EXIT_VALID,
            Report::Invalid(_) => EXIT_INVALID,
        }
    }

    /// Render the report as the JSON document written to stdout.
    pub fn render(&self, pretty: bool) -> Result<String, CliError> {
        match self {
            Report::Valid(subscription) => to_json(&DataResponse { data: subscription }, pretty),
            Report::Invalid(errors) => to_json(
                &ErrorResponse {
                    error: "Validation failed",
                    code: "VALIDATION_ERROR",
                    details: errors,
                },
                pretty,
            ),
        }
    }
}

/// Read at most `config.max_input_bytes` from `reader`.
///
/// The size limit is checked on raw bytes before UTF-8 decoding.
pub fn read_input<R: Read>(reader: R, config: &CheckConfig) -> Result<String, CliError> {
    let limit = config.max_input_bytes;
    let mut bytes = Vec::new();
    reader
        .take(u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1))
        .read_to_end(&mut bytes)?;
    if bytes.len() > limit {
        return Err(CliError::InputTooLarge { limit });
    }
    String::from_utf8(bytes)
        .map_err(|err| CliError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

/// Parse `input` as form data and validate it.
pub fn check(input: &str) -> Result<Report, CliError> {
    let data: FormData = serde_json::from_str(input).map_err(CliError::InvalidInput)?;

    let report = match validate(&data) {
        Ok(subscription) => Report::Valid(subscription),
        Err(errors) => Report::Invalid(errors),
    };

    match &report {
        Report::Valid(_) => tracing::info!("Submission is valid"),
        Report::Invalid(errors) => {
            tracing::info!(error_keys = errors.len(), errors = %errors, "Submission is invalid")
        }
    }

    Ok(report)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(CliError::Output)
}
