//! JSON envelopes written to stdout.

use serde::Serialize;

/// Standard `{ "data": T }` envelope for a valid submission.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Envelope for a submission that failed validation.
#[derive(Debug, Serialize)]
pub struct ErrorResponse<T: Serialize> {
    pub error: &'static str,
    pub code: &'static str,
    pub details: T,
}
