//! Auth CLI commands.

use clap::{Parser, Subcommand};

/// Session management commands.
#[derive(Debug, Parser)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub action: AuthAction,
}

/// Available auth actions.
#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Log in and persist the session token.
    Login {
        /// Account email.
        #[arg(long)]
        email: String,
        /// Account password. Prompted for when omitted.
        #[arg(long)]
        password: Option<String>,
    },
    /// Discard the persisted session token.
    Logout,
    /// Show whether a session token is persisted.
    Status,
}
