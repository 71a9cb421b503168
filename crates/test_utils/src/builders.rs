//! Test Data Builders
//!
//! Builds customers with a prepared statement so tests only spell out the
//! entries they care about.

use chrono::{DateTime, Utc};
use core_kernel::TaxId;
use domain_account::Customer;
use rust_decimal::Decimal;

use crate::fixtures::{CustomerFixtures, TemporalFixtures};

enum Step {
    Deposit(String, Decimal, DateTime<Utc>),
    Withdraw(Decimal, DateTime<Utc>),
}

/// Builder for a customer and its statement
pub struct TestCustomerBuilder {
    tax_id: TaxId,
    name: String,
    steps: Vec<Step>,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCustomerBuilder {
    /// Starts from Ana with an empty statement
    pub fn new() -> Self {
        Self {
            tax_id: CustomerFixtures::ana_tax_id(),
            name: CustomerFixtures::ana_name().to_string(),
            steps: Vec::new(),
        }
    }

    pub fn with_tax_id(mut self, tax_id: impl Into<TaxId>) -> Self {
        self.tax_id = tax_id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a credit at [`TemporalFixtures::morning`]; skipped if the account refuses it
    pub fn with_deposit(self, description: impl Into<String>, amount: Decimal) -> Self {
        self.with_deposit_at(description, amount, TemporalFixtures::morning())
    }

    pub fn with_deposit_at(
        mut self,
        description: impl Into<String>,
        amount: Decimal,
        at: DateTime<Utc>,
    ) -> Self {
        self.steps.push(Step::Deposit(description.into(), amount, at));
        self
    }

    /// Adds a withdrawal at `at`; skipped if the account refuses it
    pub fn with_withdrawal_at(mut self, amount: Decimal, at: DateTime<Utc>) -> Self {
        self.steps.push(Step::Withdraw(amount, at));
        self
    }

    pub fn build(self) -> Customer {
        let mut customer = Customer::new(self.tax_id, self.name);
        for step in self.steps {
            match step {
                Step::Deposit(description, amount, at) => {
                    let _ = customer.deposit(description, amount, at);
                }
                Step::Withdraw(amount, at) => {
                    let _ = customer.withdraw(amount, at);
                }
            }
        }
        customer
    }
}
