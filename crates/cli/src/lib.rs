//! `eventex-check` library.
//!
//! Exposes configuration, error handling and the check runner so the binary
//! entrypoint and integration tests share the same code path.

pub mod check;
pub mod config;
pub mod error;
pub mod response;
