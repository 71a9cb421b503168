//! Core Kernel - Foundational types for the account ledger
//!
//! This crate provides the building blocks used by the domain and API crates:
//! - Strongly-typed identifiers (`CustomerId`, `TaxId`)
//! - Time zone handling for calendar-day queries
//! - A `Clock` abstraction so timestamps stay server-assigned but testable

pub mod identifiers;
pub mod temporal;

pub use identifiers::{CustomerId, TaxId};
pub use temporal::{parse_calendar_date, Clock, FixedClock, SystemClock, TemporalError, Timezone};
