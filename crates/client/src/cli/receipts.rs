//! Receipt CLI commands.

use clap::{Parser, Subcommand};

/// Receipt lookup commands.
#[derive(Debug, Parser)]
pub struct ReceiptsCommand {
    #[command(subcommand)]
    pub action: ReceiptsAction,
}

/// Available receipt actions.
#[derive(Debug, Subcommand)]
pub enum ReceiptsAction {
    /// Get a receipt by its own ID.
    Get {
        /// Receipt ID.
        id: String,
    },
    /// Get the receipt issued for a payment.
    ForPayment {
        /// Payment ID.
        payment_id: String,
    },
    /// Get the receipt issued for a credit.
    ForCredit {
        /// Credit ID.
        credit_id: String,
    },
    /// Get the receipt issued for an installment.
    ForInstallment {
        /// Installment ID.
        installment_id: String,
    },
}
