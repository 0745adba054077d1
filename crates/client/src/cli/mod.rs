//! CLI command definitions.

pub mod auth;
pub mod payment_methods;
pub mod quotes;
pub mod receipts;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the credidesk API.
#[derive(Debug, Parser)]
#[command(name = "credidesk")]
#[command(about = "CLI client for the credidesk API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "CREDIDESK_URL", default_value = "http://localhost:3000/api")]
    pub base_url: String,

    /// Extra path segment folded into the base URL.
    #[arg(long, env = "CREDIDESK_API_PREFIX")]
    pub api_prefix: Option<String>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Session management.
    Auth(auth::AuthCommand),
    /// Quote management.
    Quotes(quotes::QuotesCommand),
    /// Receipt lookups.
    Receipts(receipts::ReceiptsCommand),
    /// Accepted payment methods.
    PaymentMethods(payment_methods::PaymentMethodsCommand),
}
