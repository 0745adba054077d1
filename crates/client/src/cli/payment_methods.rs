//! Payment method CLI commands.

use clap::{Parser, Subcommand};

/// Payment method commands.
#[derive(Debug, Parser)]
pub struct PaymentMethodsCommand {
    #[command(subcommand)]
    pub action: PaymentMethodsAction,
}

/// Available payment method actions.
#[derive(Debug, Subcommand)]
pub enum PaymentMethodsAction {
    /// List the payment methods the server accepts.
    List,
}
