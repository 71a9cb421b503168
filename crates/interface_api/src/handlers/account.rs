//! Account handlers

use axum::{extract::State, http::StatusCode, Json};

use core_kernel::TaxId;

use crate::{AppState, error::ApiError, extract::ApiJson, identification::IdentifiedCustomer};
use crate::dto::account::*;

/// Opens an account; the only route that needs no `cpf` header
pub async fn create_account(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    let mut service = state.service.write().await;
    service.open_account(TaxId::from(request.cpf), request.name)?;
    Ok(StatusCode::CREATED)
}

/// Returns the full customer record
pub async fn get_account(
    State(state): State<AppState>,
    customer: IdentifiedCustomer,
) -> Result<Json<CustomerResponse>, ApiError> {
    let service = state.service.read().await;
    let account = service.account(&customer.tax_id)?;
    Ok(Json(CustomerResponse::from(account)))
}

/// Renames the account holder
pub async fn update_account(
    State(state): State<AppState>,
    customer: IdentifiedCustomer,
    ApiJson(request): ApiJson<UpdateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    let mut service = state.service.write().await;
    service.rename(&customer.tax_id, request.name)?;
    Ok(StatusCode::OK)
}

/// Deletes the account and returns every remaining customer
pub async fn delete_account(
    State(state): State<AppState>,
    customer: IdentifiedCustomer,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let mut service = state.service.write().await;
    let remaining = service.close_account(&customer.tax_id)?;
    Ok(Json(remaining.iter().map(CustomerResponse::from).collect()))
}
