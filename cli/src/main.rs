mod output;
mod transport;


use check_history::config::{ApiConfig, DEFAULT_API_BASE_URL};
use check_history::net::api::{fetch_check, load_history, repeat_check};
use check_history::net::client::{ApiClient, RequestError};
use check_history::state::history::Filter;
use check_history::util::history_view::{ContainerRef, render};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::transport::{ReqwestTransport, TracingDiagnostics};

type Client = ApiClient<ReqwestTransport, TracingDiagnostics>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("request failed: {0}")]
    Request(#[from] RequestError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "check-history", about = "Browse and repeat network checks")]
struct Cli {
    #[arg(long, env = "CHECK_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List past checks. Prints the empty state if the backend is unreachable.
    History {
        #[arg(long, default_value = "all", help = "all, success, error, pending, or a raw status")]
        filter: String,

        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print one check's full result.
    Show { check_id: String },
    /// Queue a new check with the same target and check types.
    Repeat { check_id: String },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ApiConfig::from_override(Some(cli.base_url));
    let client = ApiClient::new(config, ReqwestTransport::new()?).with_diagnostics(TracingDiagnostics);
    tracing::debug!(base_url = client.config().base_url(), "check-history cli");

    match cli.command {
        Command::History { filter, json } => run_history(&client, &filter, json).await,
        Command::Show { check_id } => run_show(&client, &check_id).await,
        Command::Repeat { check_id } => run_repeat(&client, &check_id).await,
    }
}

async fn run_history(client: &Client, filter: &str, json: bool) -> Result<(), CliError> {
    let records = load_history(client).await;
    let filter = Filter::parse(filter);
    if json {
        println!("{}", output::history_json(&records, &filter)?);
        return Ok(());
    }
    let rendered = render(ContainerRef::history_list(), &records, &filter);
    for line in output::history_lines(&rendered) {
        println!("{line}");
    }
    Ok(())
}

async fn run_show(client: &Client, check_id: &str) -> Result<(), CliError> {
    let details = fetch_check(client, check_id).await?;
    println!("{}", serde_json::to_string_pretty(&details)?);
    Ok(())
}

async fn run_repeat(client: &Client, check_id: &str) -> Result<(), CliError> {
    let accepted = repeat_check(client, check_id).await?;
    tracing::info!(original = check_id, new = %accepted.check_id, "check re-submitted");
    println!("{}", accepted.check_id);
    Ok(())
}
