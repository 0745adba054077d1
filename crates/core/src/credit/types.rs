use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A loan quotation as returned by the backend.
///
/// Wire field names are the backend's Spanish names. Numeric fields are
/// normalized at decode time: amounts accept locale-formatted strings and
/// the interest rate accepts percentages (see [`crate::numeric`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote number, unique per quote.
    #[serde(rename = "numero", deserialize_with = "crate::serde::deserialize_id")]
    pub number: String,
    /// Client display name.
    #[serde(rename = "cliente")]
    pub client: String,
    /// Principal amount.
    #[serde(rename = "monto", deserialize_with = "crate::serde::deserialize_decimal")]
    pub amount: f64,
    /// Interest rate as a decimal fraction (0.60 = 60%).
    #[serde(rename = "interes", deserialize_with = "crate::serde::deserialize_rate")]
    pub interest_rate: f64,
    /// Number of installments.
    #[serde(rename = "cuotas", deserialize_with = "crate::serde::deserialize_count")]
    pub installments: u32,
    /// Payment modality (e.g. "mensual", "semanal").
    #[serde(rename = "modalidad")]
    pub modality: String,
    /// Per-installment value, when the backend precomputes it.
    #[serde(
        rename = "valorCuota",
        default,
        deserialize_with = "crate::serde::deserialize_optional_decimal"
    )]
    pub installment_value: Option<f64>,
    /// Total to repay, when the backend precomputes it.
    #[serde(
        default,
        deserialize_with = "crate::serde::deserialize_optional_decimal"
    )]
    pub total: Option<f64>,
    /// Quote date.
    #[serde(
        rename = "fecha",
        default,
        deserialize_with = "crate::serde::deserialize_optional_date"
    )]
    pub date: Option<NaiveDate>,
    /// Lifecycle status (e.g. "activo", "vencido").
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
}

/// A payment method offered by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    #[serde(deserialize_with = "crate::serde::deserialize_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Whether the method is currently offered. Listings that omit the flag
    /// only contain active methods.
    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
