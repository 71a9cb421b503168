//! Customer identification
//!
//! Every route except account creation names its customer through the
//! `cpf` header. [`IdentifiedCustomer`] resolves that header against the
//! directory before the handler runs, so an unknown or missing tax id is
//! rejected before any request body is read.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use core_kernel::{CustomerId, TaxId};

use crate::{error::ApiError, AppState};

/// Header carrying the caller's tax id
pub const TAX_ID_HEADER: &str = "cpf";

/// A request whose `cpf` header matched an existing customer
#[derive(Debug, Clone)]
pub struct IdentifiedCustomer {
    pub tax_id: TaxId,
    pub customer_id: CustomerId,
}

/// Reads the tax id header; absent or non-UTF-8 values count as missing
pub fn tax_id_from_parts(parts: &Parts) -> Option<TaxId> {
    parts
        .headers
        .get(TAX_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(TaxId::from)
}

#[async_trait]
impl FromRequestParts<AppState> for IdentifiedCustomer {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(tax_id) = tax_id_from_parts(parts) else {
            warn!(uri = %parts.uri, "Request without a usable cpf header");
            return Err(ApiError::CustomerNotFound);
        };

        let service = state.service.read().await;
        match service.resolve(&tax_id) {
            Ok(customer) => Ok(Self {
                customer_id: customer.id(),
                tax_id,
            }),
            Err(e) => {
                warn!(tax_id = %tax_id, uri = %parts.uri, "Unknown customer");
                Err(e.into())
            }
        }
    }
}
