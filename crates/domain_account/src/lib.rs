//! Account Domain - Customer Directory and Statement Engine
//!
//! This crate holds the whole account ledger model: customers identified by
//! their tax id, each owning an append-only statement of credit and debit
//! operations.
//!
//! # Rules
//!
//! - At most one customer per tax id
//! - Operations are immutable once appended and keep append order
//! - The balance is derived from the statement on every request, never stored
//! - A withdrawal is refused when the balance is strictly below the amount
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_account::{AccountService, InMemoryDirectory};
//!
//! let mut service = AccountService::new(InMemoryDirectory::new(), Arc::new(SystemClock));
//! service.open_account(TaxId::from("111"), "Ana")?;
//! service.deposit(&TaxId::from("111"), "salary", dec!(1000))?;
//! service.withdraw(&TaxId::from("111"), dec!(250))?;
//! ```

pub mod statement;
pub mod customer;
pub mod directory;
pub mod service;
pub mod error;

pub use statement::{Operation, OperationKind, Statement, WITHDRAWAL_DESCRIPTION};
pub use customer::Customer;
pub use directory::{CustomerDirectory, InMemoryDirectory};
pub use service::AccountService;
pub use error::AccountError;
