//! Route handlers

pub mod account;
pub mod statement;
pub mod operations;
pub mod health;
