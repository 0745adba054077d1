//! Quote CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Quote management commands.
#[derive(Debug, Parser)]
pub struct QuotesCommand {
    #[command(subcommand)]
    pub action: QuotesAction,
}

/// Available quote actions.
#[derive(Debug, Subcommand)]
pub enum QuotesAction {
    /// List quotes with filters.
    List {
        /// Filter by status. Repeat for several statuses.
        #[arg(long)]
        status: Vec<String>,
        /// Filter by client name.
        #[arg(long)]
        client: Option<String>,
        /// Earliest quote date (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest quote date (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Get a quote by number.
    Get {
        /// Quote number.
        number: String,
    },
    /// Create a new quote.
    Create {
        /// Client name.
        #[arg(long)]
        client: String,
        /// Principal amount.
        #[arg(long)]
        amount: f64,
        /// Interest rate, as a fraction or a percentage.
        #[arg(long)]
        interest: f64,
        /// Number of installments.
        #[arg(long)]
        installments: u32,
        /// Payment modality, e.g. mensual or semanal.
        #[arg(long)]
        modality: String,
        /// Quote date (YYYY-MM-DD). Defaults to the server's date.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}
