//! Shopify Tools CLI - list, describe, and call Admin REST tools.
//!
//! # Usage
//!
//! ```bash
//! # List every tool, grouped by domain
//! shopify-tools list
//!
//! # List order tools as JSON tool definitions
//! shopify-tools list --domain orders --json
//!
//! # Show a tool's input schema
//! shopify-tools describe get_order
//!
//! # Call a tool against the configured store
//! shopify-tools call get_order --arg order_id=450789469
//! shopify-tools call list_orders --args '{"status": "any", "limit": 5}'
//! ```
//!
//! # Environment Variables
//!
//! - `SHOPIFY_STORE`, `SHOPIFY_API_KEY` - required for `call`
//! - `SHOPIFY_API_VERSION`, `SHOPIFY_BASE_URL`, `SHOPIFY_REQUEST_TIMEOUT_SECS` - optional
//! - `RUST_LOG` - log filter (default: `shopify_admin_tools=info`)
//! - `LOG_FORMAT=json` - structured JSON logs on stderr
//! - `SENTRY_DSN`, `SENTRY_ENVIRONMENT` - optional error tracking

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "shopify-tools")]
#[command(author, version, about = "Shopify Admin REST API tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available tools
    List {
        /// Only list tools in this domain (e.g. orders, products)
        #[arg(short, long)]
        domain: Option<String>,

        /// Print full tool definitions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a tool's definition and input schema
    Describe {
        /// Tool name
        tool: String,
    },
    /// Call a tool against the configured store
    Call {
        /// Tool name
        tool: String,

        /// Arguments as one JSON object
        #[arg(long)]
        args: Option<String>,

        /// A single argument; the value is parsed as JSON when possible
        #[arg(long = "arg", value_name = "KEY=VALUE")]
        arg: Vec<String>,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let dsn = std::env::var("SENTRY_DSN").ok().filter(|dsn| !dsn.is_empty())?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: std::env::var("SENTRY_ENVIRONMENT")
                .ok()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Map tracing levels to Sentry events (errors/warnings) and breadcrumbs.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        tracing::Level::TRACE => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Load .env before reading SENTRY_DSN and the Shopify settings
    let _ = dotenvy::dotenv();

    let sentry_guard = init_sentry();

    // Logs go to stderr; stdout carries tool output only
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopify_admin_tools=info".into());

    let use_json = std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = use_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!use_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));
    let sentry_layer = sentry_guard
        .is_some()
        .then(|| sentry_tracing::layer().event_filter(sentry_event_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_layer)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        drop(sentry_guard);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::List { domain, json } => {
            commands::list::run(domain.as_deref(), json, &mut stdout)?;
        }
        Commands::Describe { tool } => commands::describe::run(&tool, &mut stdout)?,
        Commands::Call { tool, args, arg } => {
            commands::call::run(&tool, args.as_deref(), &arg, &mut stdout).await?;
        }
    }
    Ok(())
}
