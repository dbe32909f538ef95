use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub client_name: String,
    pub balance: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Body of POST /api/accounts. Fields are optional so a missing field is
/// reported as a 400 with the usual message instead of a deserialization 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub client_name: Option<String>,
    pub initial_balance: Option<Decimal>,
}
