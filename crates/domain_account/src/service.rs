//! Account service
//!
//! `AccountService` owns the customer directory and the clock and exposes
//! one method per account operation. Every operation on an existing account
//! starts with [`AccountService::resolve`], the identification step, and
//! fails with `CustomerNotFound` before touching anything else.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use core_kernel::{Clock, TaxId, Timezone};
use crate::customer::Customer;
use crate::directory::CustomerDirectory;
use crate::error::AccountError;
use crate::statement::Operation;

pub struct AccountService<D> {
    directory: D,
    clock: Arc<dyn Clock>,
    timezone: Timezone,
}

impl<D: CustomerDirectory> AccountService<D> {
    /// Creates a service answering calendar-day queries in UTC
    pub fn new(directory: D, clock: Arc<dyn Clock>) -> Self {
        Self {
            directory,
            clock,
            timezone: Timezone::default(),
        }
    }

    /// Sets the zone used to decide which day an operation falls on
    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Opens an account with an empty statement
    ///
    /// # Errors
    ///
    /// Returns `CustomerAlreadyExists` if `tax_id` is already registered
    pub fn open_account(
        &mut self,
        tax_id: TaxId,
        name: impl Into<String>,
    ) -> Result<&Customer, AccountError> {
        let customer = Customer::new(tax_id.clone(), name);
        let id = customer.id();

        if let Err(e) = self.directory.insert(customer) {
            warn!(tax_id = %tax_id, "Account already exists");
            return Err(e);
        }

        info!(tax_id = %tax_id, customer_id = %id, "Account opened");
        self.resolve(&tax_id)
    }

    /// Identification: resolves a tax id to its customer
    pub fn resolve(&self, tax_id: &TaxId) -> Result<&Customer, AccountError> {
        self.directory
            .find(tax_id)
            .ok_or_else(|| AccountError::CustomerNotFound(tax_id.clone()))
    }

    fn resolve_mut(&mut self, tax_id: &TaxId) -> Result<&mut Customer, AccountError> {
        self.directory
            .find_mut(tax_id)
            .ok_or_else(|| AccountError::CustomerNotFound(tax_id.clone()))
    }

    /// Full statement in append order
    pub fn statement(&self, tax_id: &TaxId) -> Result<&[Operation], AccountError> {
        Ok(self.resolve(tax_id)?.statement().operations())
    }

    /// Operations created on `date` in the service timezone
    pub fn statement_on(
        &self,
        tax_id: &TaxId,
        date: NaiveDate,
    ) -> Result<Vec<Operation>, AccountError> {
        let operations = self
            .resolve(tax_id)?
            .statement()
            .on_date(date, &self.timezone);
        debug!(tax_id = %tax_id, %date, count = operations.len(), "Statement filtered by date");
        Ok(operations)
    }

    pub fn balance(&self, tax_id: &TaxId) -> Result<Decimal, AccountError> {
        self.resolve(tax_id)?.balance()
    }

    /// Records a credit timestamped by the service clock
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if `tax_id` is unknown
    /// - `BalanceOverflow` if the new balance is out of range; nothing is recorded
    pub fn deposit(
        &mut self,
        tax_id: &TaxId,
        description: impl Into<String>,
        amount: Decimal,
    ) -> Result<(), AccountError> {
        let now = self.clock.now();
        let customer = self.resolve_mut(tax_id)?;

        match customer.deposit(description, amount, now) {
            Ok(balance) => {
                info!(tax_id = %tax_id, %amount, %balance, "Deposit recorded");
                Ok(())
            }
            Err(e) => {
                warn!(tax_id = %tax_id, %amount, error = %e, "Deposit refused");
                Err(e)
            }
        }
    }

    /// Records a debit if the current balance covers `amount`
    ///
    /// # Errors
    ///
    /// - `CustomerNotFound` if `tax_id` is unknown
    /// - `InsufficientFunds` if the balance is strictly below `amount`
    /// - `BalanceOverflow` if the new balance is out of range
    pub fn withdraw(&mut self, tax_id: &TaxId, amount: Decimal) -> Result<(), AccountError> {
        let now = self.clock.now();
        let customer = self.resolve_mut(tax_id)?;

        match customer.withdraw(amount, now) {
            Ok(balance) => {
                info!(tax_id = %tax_id, %amount, %balance, "Withdrawal recorded");
                Ok(())
            }
            Err(e) => {
                warn!(tax_id = %tax_id, %amount, error = %e, "Withdrawal refused");
                Err(e)
            }
        }
    }

    /// Changes the display name; tax id, id and statement are untouched
    pub fn rename(&mut self, tax_id: &TaxId, name: impl Into<String>) -> Result<(), AccountError> {
        let customer = self.resolve_mut(tax_id)?;
        customer.rename(name);

        info!(tax_id = %tax_id, "Account renamed");
        Ok(())
    }

    pub fn account(&self, tax_id: &TaxId) -> Result<&Customer, AccountError> {
        self.resolve(tax_id)
    }

    /// Deletes the account and returns every customer that remains
    pub fn close_account(&mut self, tax_id: &TaxId) -> Result<Vec<Customer>, AccountError> {
        let removed = self
            .directory
            .remove(tax_id)
            .ok_or_else(|| AccountError::CustomerNotFound(tax_id.clone()))?;

        info!(tax_id = %tax_id, customer_id = %removed.id(), "Account closed");
        Ok(self.directory.customers())
    }
}
