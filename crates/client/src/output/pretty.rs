//! Pretty output formatting.

use credidesk_core::credit::{PaymentMethod, Quote};
use serde_json::Value;

/// Format a quote for display.
pub fn format_quote(quote: &Quote) -> String {
    let mut output = format!(
        "Quote {} for {}\n  Amount: {:.2}\n  Interest: {:.2}%\n  Installments: {} ({})",
        quote.number,
        quote.client,
        quote.amount,
        quote.interest_rate * 100.0,
        quote.installments,
        quote.modality
    );
    if let Some(value) = quote.installment_value {
        output.push_str(&format!("\n  Installment value: {:.2}", value));
    }
    if let Some(total) = quote.total {
        output.push_str(&format!("\n  Total: {:.2}", total));
    }
    if let Some(date) = quote.date {
        output.push_str(&format!("\n  Date: {}", date));
    }
    if let Some(status) = &quote.status {
        output.push_str(&format!("\n  Status: {}", status));
    }
    output
}

/// Format quotes for display.
pub fn format_quotes(quotes: &[Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes found.".to_string();
    }
    let mut output = format!("QUOTES ({})\n", quotes.len());
    output.push_str(&"-".repeat(40));
    for quote in quotes {
        output.push_str(&format!("\n{}", format_quote(quote)));
        output.push('\n');
    }
    output
}

/// Format a payment method for display.
pub fn format_payment_method(method: &PaymentMethod) -> String {
    let state = if method.active { "active" } else { "inactive" };
    format!("{} [{}]\n  ID: {}", method.name, state, method.id)
}

/// Format payment methods for display.
pub fn format_payment_methods(methods: &[PaymentMethod]) -> String {
    if methods.is_empty() {
        return "No payment methods found.".to_string();
    }
    let mut output = format!("PAYMENT METHODS ({})\n", methods.len());
    output.push_str(&"-".repeat(40));
    for method in methods {
        output.push_str(&format!("\n{}", format_payment_method(method)));
        output.push('\n');
    }
    output
}

/// Format a receipt for display.
///
/// Receipts stay untyped, so the pretty form is indented JSON.
pub fn format_receipt(receipt: &Value) -> String {
    serde_json::to_string_pretty(receipt).unwrap_or_default()
}
