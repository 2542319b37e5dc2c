mod terminal;
mod transport;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use client::config::{ClientConfig, ConfigError, Timeouts};
use client::controller::{FormController, Outcome};
use client::net::error::SubmitError;
use form::{FormFields, FormInput, ValidationError, validate};

use crate::terminal::TerminalView;
use crate::transport::ReqwestTransport;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8888";

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("activity request failed: {0}")]
    Submit(SubmitError),
    #[error("a request is already in flight")]
    Busy,
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Whether the view already printed this error.
    fn is_rendered(&self) -> bool {
        matches!(self, Self::Submit(_) | Self::Invalid(_))
    }
}

#[derive(Parser, Debug)]
#[command(name = "activities", about = "Ask the activity planner for children's activity ideas")]
struct Cli {
    /// Planner base URL. Falls back to ACTIVITIES_BASE_URL, then http://127.0.0.1:8888.
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds. Falls back to ACTIVITIES_REQUEST_TIMEOUT_SECS.
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the form and request activities.
    Submit(FormArgs),
    /// Validate the form and print the JSON payload without sending it.
    Payload(FormArgs),
    /// Print the default form values.
    Defaults,
}

/// Form fields; any flag left out keeps its default form value.
#[derive(Args, Debug, Default)]
struct FormArgs {
    #[arg(long)]
    num_children: Option<String>,

    /// Comma-separated ages, e.g. "4, 7".
    #[arg(long)]
    ages: Option<String>,

    #[arg(long)]
    weather: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    special_cases: Option<String>,
}

impl FormArgs {
    fn into_fields(self, defaults: FormFields) -> FormFields {
        FormFields {
            num_children: self.num_children.unwrap_or(defaults.num_children),
            ages: self.ages.unwrap_or(defaults.ages),
            weather: self.weather.unwrap_or(defaults.weather),
            location: self.location.unwrap_or(defaults.location),
            special_cases: self.special_cases.unwrap_or(defaults.special_cases),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.is_rendered() {
                eprintln!("error: {err}");
            }
            tracing::debug!(error = ?err, "exiting with failure");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = resolve_config(ClientConfig::from_env()?, cli.base_url.as_deref(), cli.timeout_secs)?;

    match cli.command {
        Command::Submit(args) => run_submit(&config, args).await,
        Command::Payload(args) => run_payload(&config, args),
        Command::Defaults => {
            print_fields(&config.default_fields());
            Ok(())
        }
    }
}

/// Apply flag overrides; a same-origin config gets the local default URL.
fn resolve_config(
    config: ClientConfig,
    base_url: Option<&str>,
    timeout_secs: Option<u64>,
) -> Result<ClientConfig, ConfigError> {
    let mut config = match base_url {
        Some(url) => config.with_base_url(url)?,
        None if config.base_url.is_empty() => config.with_base_url(DEFAULT_BASE_URL)?,
        None => config,
    };
    if let Some(secs) = timeout_secs.filter(|secs| *secs > 0) {
        config.timeouts = Timeouts {
            request_secs: secs,
            ..config.timeouts
        };
    }
    Ok(config)
}

async fn run_submit(config: &ClientConfig, args: FormArgs) -> Result<(), CliError> {
    let fields = args.into_fields(config.default_fields());
    let transport = ReqwestTransport::new(config.timeouts)?;
    let controller = FormController::new(TerminalView::stdio(fields), transport, config);
    tracing::info!(endpoint = %config.endpoint_url(), "submitting activity form");

    match controller.submit().await {
        Outcome::Activities(_) => Ok(()),
        Outcome::Invalid(err) => Err(CliError::Invalid(err)),
        Outcome::Failed(err) => Err(CliError::Submit(err)),
        Outcome::Busy => Err(CliError::Busy),
    }
}

fn run_payload(config: &ClientConfig, args: FormArgs) -> Result<(), CliError> {
    let fields = args.into_fields(config.default_fields());
    let request = validate(&FormInput::from_fields(&fields)).map_err(|err| {
        eprintln!("error: {err}");
        err
    })?;
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn print_fields(fields: &FormFields) {
    println!("num_children:  {}", fields.num_children);
    println!("ages:          {}", fields.ages);
    println!("weather:       {}", fields.weather);
    println!("location:      {}", fields.location);
    println!("special_cases: {}", fields.special_cases);
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
