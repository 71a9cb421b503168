//! Statement engine
//!
//! A statement is the ordered log of credit and debit operations for one
//! customer. Entries are only ever appended, so insertion order is also
//! chronological order.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::Timezone;
use crate::error::AccountError;

/// Description recorded for every withdrawal
pub const WITHDRAWAL_DESCRIPTION: &str = "Saque";

/// Direction of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money in
    Credit,
    /// Money out
    Debit,
}

/// A single entry in a statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub description: String,
    pub amount: Decimal,
    /// Assigned when the entry is appended
    pub created_at: DateTime<Utc>,
    pub kind: OperationKind,
}

impl Operation {
    /// Creates a credit entry
    pub fn credit(
        description: impl Into<String>,
        amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            created_at,
            kind: OperationKind::Credit,
        }
    }

    /// Creates a debit entry
    pub fn debit(
        description: impl Into<String>,
        amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            created_at,
            kind: OperationKind::Debit,
        }
    }

    /// Contribution of this entry to the balance
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            OperationKind::Credit => self.amount,
            OperationKind::Debit => -self.amount,
        }
    }
}

/// Append-only sequence of operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Statement {
    operations: Vec<Operation>,
}

impl Statement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operation at the end of the log
    pub fn append(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// All operations in append order
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Operations created on `date` as seen from `timezone`, in append order
    ///
    /// Only the calendar day is compared; the time of day is ignored.
    pub fn on_date(&self, date: NaiveDate, timezone: &Timezone) -> Vec<Operation> {
        self.operations
            .iter()
            .filter(|op| timezone.local_date(op.created_at) == date)
            .cloned()
            .collect()
    }

    /// Net of all credits minus all debits
    ///
    /// # Errors
    ///
    /// Returns `BalanceOverflow` if a running total leaves the `Decimal` range
    pub fn balance(&self) -> Result<Decimal, AccountError> {
        self.operations.iter().try_fold(Decimal::ZERO, |acc, op| {
            acc.checked_add(op.signed_amount())
                .ok_or(AccountError::BalanceOverflow)
        })
    }
}
