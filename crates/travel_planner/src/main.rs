//! Travel planner CLI.
//!
//! # Usage
//!
//! ```bash
//! travel-planner [query...]
//! ```
//!
//! Without arguments the query is read from stdin. The backend is configured
//! with `AgentConfig` defaults (a local Ollama server); `VOYAGE_API_KEY`
//! overrides the credential and `RUST_LOG` controls logging.
//!
//! # Example
//!
//! ```bash
//! travel-planner "What is the status of flight AA123?"
//! ```

use std::io::{BufRead, Write};
use std::process::ExitCode;
use travel_planner::TravelAgentSystem;
use travel_planner::render::render_outcome;
use travel_planner::telemetry::TracingSettings;
use voyage_agent::{AgentConfig, CancellationToken};

const EXAMPLE_QUERY: &str = "Plan a trip to NYC: need flight AA123 status, hotel for next week, \
and local events. Find the cheapest time to fly from SFO to NYC next month and suggest a hotel.";

fn read_query() -> std::io::Result<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return Ok(args.join(" "));
    }

    let mut stderr = std::io::stderr().lock();
    writeln!(stderr, "Enter your query (e.g., '{EXAMPLE_QUERY}'):")?;
    write!(stderr, "> ")?;
    stderr.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    TracingSettings::default().init();

    let query = match read_query() {
        Ok(query) if !query.is_empty() => query,
        Ok(_) => {
            tracing::error!("no query given");
            return ExitCode::FAILURE;
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to read query");
            return ExitCode::FAILURE;
        }
    };

    let config = AgentConfig::default().with_credential_from_env("VOYAGE_API_KEY");
    tracing::debug!(?config, "starting travel planner");

    let system = match TravelAgentSystem::new(&config) {
        Ok(system) => system,
        Err(err) => {
            tracing::error!(error = %err, "failed to set up the travel agent");
            return ExitCode::FAILURE;
        }
    };

    let token = CancellationToken::new();
    let on_interrupt = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, stopping after the current turn");
            on_interrupt.cancel();
        }
    });

    let outcome = system.run_query_with_cancellation(&query, token).await;

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = write!(stdout, "{}", render_outcome(&outcome)) {
        tracing::error!(error = %err, "failed to write output");
        return ExitCode::FAILURE;
    }

    if let Some(err) = &outcome.error {
        tracing::error!(error = %err, "travel request failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
