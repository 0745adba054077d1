//! Receipt (recibo) lookups.
//!
//! Receipts are returned as raw JSON. Their shape varies by origin
//! (payment, credit, installment) and callers render them as-is, so no
//! typed model is imposed here.

use reqwest::Method;
use serde_json::Value;

use crate::client::{CredideskClient, RequestOptions};
use crate::error::Result;

impl CredideskClient {
    /// Fetch a receipt by its own id.
    pub async fn get_receipt(&self, id: &str) -> Result<Value> {
        let path = format!("/recibos/{}", urlencoding::encode(id));
        self.execute(Method::GET, &path, RequestOptions::new()).await
    }

    /// Fetch the receipt issued for a payment.
    pub async fn receipt_for_payment(&self, payment_id: &str) -> Result<Value> {
        let path = format!("/recibos/pago/{}", urlencoding::encode(payment_id));
        self.execute(Method::GET, &path, RequestOptions::new()).await
    }

    /// Fetch the receipt issued for a credit.
    pub async fn receipt_for_credit(&self, credit_id: &str) -> Result<Value> {
        let path = format!("/recibos/credito/{}", urlencoding::encode(credit_id));
        self.execute(Method::GET, &path, RequestOptions::new()).await
    }

    /// Fetch the receipt issued for an installment.
    pub async fn receipt_for_installment(&self, installment_id: &str) -> Result<Value> {
        let path = format!("/recibos/cuota/{}", urlencoding::encode(installment_id));
        self.execute(Method::GET, &path, RequestOptions::new()).await
    }
}
