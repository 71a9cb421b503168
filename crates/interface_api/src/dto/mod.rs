//! Request and response bodies

pub mod account;
pub mod statement;
