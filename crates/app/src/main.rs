// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod input;
mod render;
mod runtime;

use bqm::{DEFAULT_RACE, FlowController};
use bqm_client::{ClientConfig, DEFAULT_ENDPOINT, QualificationClient};
use bqm_domain::FormInput;
use clap::Parser;
use std::time::Duration;
use tracing::info;

use crate::render::{Layout, Renderer};
use crate::runtime::{RuntimeConfig, SessionRuntime};

/// BQM - check a finishing time against the qualification service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the qualification service.
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Display shape to render for.
    #[arg(short, long, value_enum, default_value_t = Layout::Round)]
    layout: Layout,

    /// Race named in the verdict.
    #[arg(long, default_value = DEFAULT_RACE)]
    race: String,

    /// Minimum time the loading screen is shown before the request is sent.
    #[arg(long, default_value_t = 1000)]
    loading_delay_ms: u64,

    /// Request timeout in seconds. If not provided, the transport default applies.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log filter, overriding `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn client_config(&self) -> Result<ClientConfig, bqm_client::ClientError> {
        let timeout: Option<Duration> = self.timeout_secs.map(Duration::from_secs);
        Ok(ClientConfig::new(&self.endpoint)?.with_timeout(timeout))
    }

    const fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            loading_delay: Duration::from_millis(self.loading_delay_ms),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing on stderr so stdout stays the screen
    let filter: tracing_subscriber::EnvFilter = match &args.log_level {
        Some(level) => tracing_subscriber::EnvFilter::try_new(level)?,
        None => tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client: QualificationClient = QualificationClient::new(args.client_config()?)?;
    info!(endpoint = %client.config().endpoint(), layout = ?args.layout, "Starting BQM");

    let controller: FlowController = FlowController::new(FormInput::default(), args.race.clone());
    let renderer: Box<dyn Renderer + Send> = args.layout.renderer();
    let runtime: SessionRuntime<QualificationClient> =
        SessionRuntime::new(controller, client, args.runtime_config());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    runtime.run(stdin, &mut stdout, renderer.as_ref()).await?;

    Ok(())
}
