//! Developer CLI: parse an already-extracted text file and print the
//! resulting event list as JSON. Diagnostics go to stderr via tracing.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use chartsift::{config, MedicalDocumentParser};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: chartsift <extracted-text-file>");
        return ExitCode::FAILURE;
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("chartsift v{} parsing {path}", config::APP_VERSION);

    let outcome = MedicalDocumentParser::new().parse(&text, &path);

    for diagnostic in &outcome.diagnostics {
        tracing::debug!(?diagnostic, "parse diagnostic");
    }

    match serde_json::to_string_pretty(&outcome.events) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("serialization failed: {err}");
            ExitCode::FAILURE
        }
    }
}
