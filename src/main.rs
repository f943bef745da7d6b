use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use linkshrink::args::Cli;
use linkshrink::config::Config;
use linkshrink::logging::{init_file_tracing, init_stderr_tracing};
use linkshrink::service::GotinyClient;
use linkshrink::shortener::{ControllerOptions, SubmissionController, SubmissionState};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.url.clone() {
        Some(url) => {
            init_stderr_tracing();
            cli.load_config()
                .map_err(anyhow::Error::from)
                .and_then(|config| shorten_once(config, &url))
        }
        None => {
            init_file_tracing();
            cli.load_config()
                .map_err(anyhow::Error::from)
                .and_then(linkshrink::ui::runtime::run)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Non-interactive mode: one submission, result on stdout.
fn shorten_once(config: Config, url: &str) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(submit_and_print(config, url))
}

async fn submit_and_print(config: Config, url: &str) -> anyhow::Result<()> {
    let client = GotinyClient::new(&config.service)?;
    let mut controller =
        SubmissionController::new(Arc::new(client), ControllerOptions::from(&config));

    controller.submit(url.trim());
    match controller.settle().await {
        SubmissionState::Resolved {
            short_url,
            long_url,
        } => {
            println!("{}\t{}", short_url, long_url);
            Ok(())
        }
        SubmissionState::Failed { error } => {
            Err(anyhow::Error::new(error.clone()).context("Could not shorten URL"))
        }
        other => anyhow::bail!("Unexpected submission state: {:?}", other),
    }
}
