//! Deposit and withdrawal handlers

use axum::{extract::State, http::StatusCode};

use crate::{AppState, error::ApiError, extract::ApiJson, identification::IdentifiedCustomer};
use crate::dto::statement::*;

/// Credits the account
pub async fn deposit(
    State(state): State<AppState>,
    customer: IdentifiedCustomer,
    ApiJson(request): ApiJson<DepositRequest>,
) -> Result<StatusCode, ApiError> {
    let mut service = state.service.write().await;
    service.deposit(&customer.tax_id, request.description, request.amount)?;
    Ok(StatusCode::CREATED)
}

/// Debits the account if the balance covers the amount
///
/// The balance check and the append happen under one write lock, so
/// concurrent withdrawals cannot overdraw the account.
pub async fn withdraw(
    State(state): State<AppState>,
    customer: IdentifiedCustomer,
    ApiJson(request): ApiJson<WithdrawRequest>,
) -> Result<StatusCode, ApiError> {
    let mut service = state.service.write().await;
    service.withdraw(&customer.tax_id, request.amount)?;
    Ok(StatusCode::CREATED)
}
