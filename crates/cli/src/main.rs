use std::io::Write;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eventex_cli::check::{check, read_input};
use eventex_cli::config::CheckConfig;
use eventex_cli::error::{CliError, EXIT_FAILURE};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing (stderr, so stdout stays machine-readable) ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventex_cli=info,eventex_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            tracing::error!(error = %err, "Check aborted");
            eprintln!("eventex-check: {err}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run() -> Result<u8, CliError> {
    let config = CheckConfig::from_env()?;
    tracing::debug!(
        pretty = config.pretty,
        max_input_bytes = config.max_input_bytes,
        "Loaded check configuration"
    );

    let input = read_input(std::io::stdin().lock(), &config)?;
    let report = check(&input)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", report.render(config.pretty)?)?;

    Ok(report.exit_code())
}
