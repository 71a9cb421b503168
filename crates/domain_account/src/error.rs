//! Account domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::TaxId;

/// Errors that can occur in the account domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    /// No customer is registered under the tax id
    #[error("Customer not found: {0}")]
    CustomerNotFound(TaxId),

    /// A customer is already registered under the tax id
    #[error("Customer already exists: {0}")]
    CustomerAlreadyExists(TaxId),

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds: balance={balance}, requested={requested}")]
    InsufficientFunds {
        balance: Decimal,
        requested: Decimal,
    },

    /// The operation would push the balance past what `Decimal` can hold
    #[error("Balance overflow")]
    BalanceOverflow,
}
