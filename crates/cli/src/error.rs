/// Errors that stop `eventex-check` before a validation report exists.
///
/// A submission that fails validation is not an error here; it is a
/// [`Report::Invalid`](crate::check::Report::Invalid).
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An environment variable held an unusable value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Reading stdin failed.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input exceeded the configured size limit.
    #[error("Input exceeds {limit} bytes")]
    InputTooLarge { limit: usize },

    /// The input was not a flat JSON object of strings.
    #[error("Invalid input: {0}")]
    InvalidInput(#[source] serde_json::Error),

    /// Rendering the report failed.
    #[error("Failed to render output: {0}")]
    Output(#[source] serde_json::Error),
}

/// Process exit code for any [`CliError`].
pub const EXIT_FAILURE: u8 = 2;
