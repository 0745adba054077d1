//! Payment method (forma de pago) operations.

use credidesk_core::credit::PaymentMethod;

use crate::client::{CredideskClient, RequestOptions};
use crate::error::Result;

impl CredideskClient {
    /// List the payment methods the server accepts.
    pub async fn list_payment_methods(&self) -> Result<Vec<PaymentMethod>> {
        self.get("/formas-pago", RequestOptions::new()).await
    }
}
