//! Account DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_account::Customer;
use crate::dto::statement::OperationResponse;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

/// Full customer record, statement included
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub cpf: String,
    pub name: String,
    pub id: Uuid,
    pub statement: Vec<OperationResponse>,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            cpf: customer.tax_id().to_string(),
            name: customer.name().to_string(),
            id: customer.id().into(),
            statement: customer
                .statement()
                .operations()
                .iter()
                .map(OperationResponse::from)
                .collect(),
        }
    }
}
