//! Terminal client for a Flora GPT deployment.
//!
//! Talks to the same endpoints as the browser widget, so it doubles as a
//! smoke test for the proxy and the billing backend.

mod http;
mod report;

use std::time::Duration;

use clap::{Parser, Subcommand};
use protocol::sync::{COUNTDOWN_TICK_MS, STATUS_REFRESH_INTERVAL_MS};
use protocol::{ApiError, ChatRequest, StatusApi, StatusSnapshot, Standard, fetch_status};
use time::OffsetDateTime;
use tokio::time::MissedTickBehavior;

use crate::http::HttpApi;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing token; pass --token or set FLORA_TOKEN")]
    MissingToken,
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("health check failed: HTTP {0}")]
    Unhealthy(u16),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("signal handler failed: {0}")]
    Signal(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "flora-cli", about = "Flora GPT chat and billing status CLI")]
struct Cli {
    #[arg(long, env = "FLORA_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[arg(long, env = "FLORA_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    token: Option<String>,
}

impl CliContext {
    fn token(&self) -> Result<&str, CliError> {
        self.token.as_deref().filter(|t| !t.is_empty()).ok_or(CliError::MissingToken)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check `/healthz`.
    Ping,
    /// Ask one question.
    Ask {
        message: String,
        /// gs, vcs, icr, plan_vivo or other.
        #[arg(long, default_value = "gs")]
        standard: Standard,
    },
    /// Print trial and subscription status once.
    Status {
        /// Print the raw status records as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Keep refreshing status and print the live countdown.
    Watch {
        #[arg(long, default_value_t = u64::from(STATUS_REFRESH_INTERVAL_MS / 1_000))]
        refresh_secs: u64,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = CliContext { base_url: cli.base_url, token: cli.token };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Ask { message, standard } => run_ask(&ctx, message, standard).await,
        Command::Status { json } => run_status(&ctx, json).await,
        Command::Watch { refresh_secs } => run_watch(&ctx, refresh_secs).await,
    }
}

async fn run_ping(cli: &CliContext) -> Result<(), CliError> {
    let client = reqwest::Client::new();
    let url = format!("{}/healthz", cli.base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(status.as_u16()));
    }
    println!("ok");
    Ok(())
}

async fn run_ask(cli: &CliContext, message: String, standard: Standard) -> Result<(), CliError> {
    let api = HttpApi::new(&cli.base_url);
    let request = ChatRequest { message, selected_standard: standard };
    tracing::debug!(standard = %standard, "sending chat request");
    let response = api.ask(&request).await?;
    println!("{}", response.reply_text());
    Ok(())
}

async fn run_status(cli: &CliContext, json: bool) -> Result<(), CliError> {
    let token = cli.token()?;
    let api = HttpApi::new(&cli.base_url);
    let refresh = fetch_status(&api, token).await?;
    if let Some(e) = &refresh.subscription_error {
        tracing::warn!(error = %e, "subscription status unavailable, using trial fields");
    }

    if json {
        let body = serde_json::json!({
            "trial": refresh.trial,
            "subscription": refresh.subscription,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let mut snapshot = StatusSnapshot::default();
    refresh.apply_to(&mut snapshot);
    println!("{}", report::status_line(&snapshot, OffsetDateTime::now_utc()));
    Ok(())
}

async fn run_watch(cli: &CliContext, refresh_secs: u64) -> Result<(), CliError> {
    let token = cli.token()?;
    let api = HttpApi::new(&cli.base_url);
    let mut snapshot = StatusSnapshot::default();

    let mut refresh = tokio::time::interval(Duration::from_secs(refresh_secs.max(1)));
    let mut tick = tokio::time::interval(Duration::from_millis(u64::from(COUNTDOWN_TICK_MS)));
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = refresh.tick() => refresh_snapshot(&api, token, &mut snapshot).await,
            _ = tick.tick() => println!("{}", report::status_line(&snapshot, OffsetDateTime::now_utc())),
            signal = tokio::signal::ctrl_c() => {
                signal?;
                tracing::info!("stopping watch");
                return Ok(());
            }
        }
    }
}

async fn refresh_snapshot<A: StatusApi>(api: &A, token: &str, snapshot: &mut StatusSnapshot) {
    match fetch_status(api, token).await {
        Ok(refresh) => {
            if let Some(e) = &refresh.subscription_error {
                tracing::warn!(error = %e, "subscription status unavailable, using trial fields");
            }
            refresh.apply_to(snapshot);
            tracing::debug!(badge = ?snapshot.badge(), "status refreshed");
        }
        Err(e) => tracing::warn!(error = %e, "status refresh failed, keeping previous status"),
    }
}
