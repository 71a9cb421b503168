//! Customer account record

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{CustomerId, TaxId};
use crate::error::AccountError;
use crate::statement::{Operation, Statement, WITHDRAWAL_DESCRIPTION};

/// A customer account
///
/// `tax_id` and `id` are fixed at creation. Only the display name and the
/// statement change over the life of the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    tax_id: TaxId,
    name: String,
    id: CustomerId,
    statement: Statement,
}

impl Customer {
    /// Creates a customer with a fresh id and an empty statement
    pub fn new(tax_id: TaxId, name: impl Into<String>) -> Self {
        Self {
            tax_id,
            name: name.into(),
            id: CustomerId::new(),
            statement: Statement::new(),
        }
    }

    pub fn tax_id(&self) -> &TaxId {
        &self.tax_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Current balance, recomputed from the statement
    pub fn balance(&self) -> Result<Decimal, AccountError> {
        self.statement.balance()
    }

    /// Replaces the display name
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Appends a credit and returns the new balance
    ///
    /// A credit the balance cannot absorb is refused and nothing is appended.
    pub fn deposit(
        &mut self,
        description: impl Into<String>,
        amount: Decimal,
        at: DateTime<Utc>,
    ) -> Result<Decimal, AccountError> {
        self.append_checked(Operation::credit(description, amount, at))
    }

    /// Appends a debit if the balance covers it and returns the new balance
    ///
    /// A withdrawal that drains the account exactly is allowed. On refusal
    /// the statement is left untouched.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        at: DateTime<Utc>,
    ) -> Result<Decimal, AccountError> {
        let balance = self.balance()?;
        if balance < amount {
            return Err(AccountError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        self.append_checked(Operation::debit(WITHDRAWAL_DESCRIPTION, amount, at))
    }

    fn append_checked(&mut self, operation: Operation) -> Result<Decimal, AccountError> {
        let balance = self
            .balance()?
            .checked_add(operation.signed_amount())
            .ok_or(AccountError::BalanceOverflow)?;

        self.statement.append(operation);
        Ok(balance)
    }
}
