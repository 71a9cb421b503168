//! Property-Based Test Generators
//!
//! Proptest strategies for amounts, tax ids and operation scripts.

use proptest::prelude::*;
use rust_decimal::Decimal;

/// Positive amounts with two decimal places, up to 10 million
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Digit-only tax ids, CPF length
pub fn tax_id_strategy() -> impl Strategy<Value = String> {
    "[0-9]{11}".prop_map(|s| s)
}

/// A requested ledger action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerAction {
    Deposit(Decimal),
    Withdraw(Decimal),
}

/// Mixed scripts of deposits and withdrawals
pub fn ledger_script_strategy(max_len: usize) -> impl Strategy<Value = Vec<LedgerAction>> {
    prop::collection::vec(
        prop_oneof![
            positive_amount_strategy().prop_map(LedgerAction::Deposit),
            positive_amount_strategy().prop_map(LedgerAction::Withdraw),
        ],
        0..max_len,
    )
}
