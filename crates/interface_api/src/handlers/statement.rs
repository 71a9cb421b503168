//! Statement handlers

use axum::{extract::{Query, State}, Json};

use core_kernel::parse_calendar_date;

use crate::{AppState, error::ApiError, identification::IdentifiedCustomer};
use crate::dto::statement::*;

/// Lists every operation in append order
pub async fn get_statement(
    State(state): State<AppState>,
    customer: IdentifiedCustomer,
) -> Result<Json<Vec<OperationResponse>>, ApiError> {
    let service = state.service.read().await;
    let operations = service.statement(&customer.tax_id)?;
    Ok(Json(operations.iter().map(OperationResponse::from).collect()))
}

/// Lists the operations created on `?date=YYYY-MM-DD`
pub async fn get_statement_by_date(
    State(state): State<AppState>,
    customer: IdentifiedCustomer,
    Query(query): Query<StatementDateQuery>,
) -> Result<Json<Vec<OperationResponse>>, ApiError> {
    let date = parse_calendar_date(query.date.as_deref().unwrap_or_default())?;

    let service = state.service.read().await;
    let operations = service.statement_on(&customer.tax_id, date)?;
    Ok(Json(operations.iter().map(OperationResponse::from).collect()))
}
