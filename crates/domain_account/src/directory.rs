//! Customer directory port and its in-memory adapter
//!
//! The `CustomerDirectory` trait is everything the account service needs
//! from its storage. `InMemoryDirectory` is the only adapter: a vector
//! scanned linearly, kept in insertion order.

use core_kernel::TaxId;
use crate::customer::Customer;
use crate::error::AccountError;

/// Storage for customer records, keyed by tax id
pub trait CustomerDirectory {
    /// Returns true if a customer is registered under `tax_id`
    fn contains(&self, tax_id: &TaxId) -> bool {
        self.find(tax_id).is_some()
    }

    fn find(&self, tax_id: &TaxId) -> Option<&Customer>;

    fn find_mut(&mut self, tax_id: &TaxId) -> Option<&mut Customer>;

    /// Adds a customer
    ///
    /// # Errors
    ///
    /// Returns `CustomerAlreadyExists` if the tax id is taken
    fn insert(&mut self, customer: Customer) -> Result<(), AccountError>;

    /// Removes the first customer with `tax_id`, returning it
    fn remove(&mut self, tax_id: &TaxId) -> Option<Customer>;

    /// Every customer, in insertion order
    fn customers(&self) -> Vec<Customer>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    customers: Vec<Customer>,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerDirectory for InMemoryDirectory {
    fn find(&self, tax_id: &TaxId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.tax_id() == tax_id)
    }

    fn find_mut(&mut self, tax_id: &TaxId) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.tax_id() == tax_id)
    }

    fn insert(&mut self, customer: Customer) -> Result<(), AccountError> {
        if self.contains(customer.tax_id()) {
            return Err(AccountError::CustomerAlreadyExists(customer.tax_id().clone()));
        }
        self.customers.push(customer);
        Ok(())
    }

    fn remove(&mut self, tax_id: &TaxId) -> Option<Customer> {
        let index = self.customers.iter().position(|c| c.tax_id() == tax_id)?;
        Some(self.customers.remove(index))
    }

    fn customers(&self) -> Vec<Customer> {
        self.customers.clone()
    }

    fn len(&self) -> usize {
        self.customers.len()
    }
}
