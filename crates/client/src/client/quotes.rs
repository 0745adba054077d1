//! Quote (presupuesto) operations.

use chrono::NaiveDate;
use credidesk_core::credit::Quote;
use serde::Serialize;

use crate::client::{CredideskClient, RequestOptions};
use crate::error::Result;
use crate::url::QueryParams;

/// Filters for [`CredideskClient::list_quotes`].
///
/// Every filter is optional; `status` may repeat and each value becomes
/// its own `estado` query parameter.
#[derive(Debug, Clone, Default)]
pub struct ListQuotesQuery {
    pub status: Vec<String>,
    pub client: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ListQuotesQuery {
    fn into_params(self) -> QueryParams {
        QueryParams::new()
            .push_all("estado", self.status)
            .push_opt("cliente", self.client)
            .push_opt("desde", self.from)
            .push_opt("hasta", self.to)
    }
}

/// Payload for [`CredideskClient::create_quote`], serialized with the
/// server's Spanish field names.
#[derive(Debug, Clone, Serialize)]
pub struct CreateQuoteRequest {
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "interes")]
    pub interest_rate: f64,
    #[serde(rename = "cuotas")]
    pub installments: u32,
    #[serde(rename = "modalidad")]
    pub modality: String,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl CredideskClient {
    /// List quotes, optionally filtered.
    pub async fn list_quotes(&self, query: ListQuotesQuery) -> Result<Vec<Quote>> {
        self.get(
            "/presupuestos",
            RequestOptions::new().params(query.into_params()),
        )
        .await
    }

    /// Fetch a single quote by its number.
    pub async fn get_quote(&self, number: &str) -> Result<Quote> {
        let path = format!("/presupuestos/{}", urlencoding::encode(number));
        self.get(&path, RequestOptions::new()).await
    }

    /// Create a quote.
    pub async fn create_quote(&self, request: &CreateQuoteRequest) -> Result<Quote> {
        self.post("/presupuestos", RequestOptions::new().json(request)?)
            .await
    }
}
