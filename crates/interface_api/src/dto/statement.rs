//! Statement DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use domain_account::{Operation, OperationKind};

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: Decimal,
}

/// Query string of `GET /statement/date`
#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    pub description: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: OperationKind,
}

impl From<&Operation> for OperationResponse {
    fn from(op: &Operation) -> Self {
        Self {
            description: op.description.clone(),
            amount: op.amount,
            created_at: op.created_at,
            kind: op.kind,
        }
    }
}
