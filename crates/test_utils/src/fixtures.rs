//! Pre-built Test Fixtures
//!
//! Consistent, predictable data for unit and integration tests.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{FixedClock, TaxId, Timezone};
use domain_account::{AccountService, InMemoryDirectory};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tax ids and names of the sample customers
pub struct CustomerFixtures;

impl CustomerFixtures {
    pub fn ana_tax_id() -> TaxId {
        TaxId::from("11111111111")
    }

    pub fn ana_name() -> &'static str {
        "Ana"
    }

    pub fn bruno_tax_id() -> TaxId {
        TaxId::from("22222222222")
    }

    pub fn bruno_name() -> &'static str {
        "Bruno"
    }

    /// A tax id no fixture ever registers
    pub fn unknown_tax_id() -> TaxId {
        TaxId::from("00000000000")
    }
}

/// Amounts used across the suite
pub struct AmountFixtures;

impl AmountFixtures {
    pub fn salary() -> Decimal {
        dec!(1000.00)
    }

    pub fn rent() -> Decimal {
        dec!(750.50)
    }

    pub fn coffee() -> Decimal {
        dec!(4.25)
    }
}

/// Fixed instants and dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// 2024-03-10 09:00 UTC
    pub fn morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 9, 0, 0).unwrap()
    }

    /// 2024-03-10 23:30 UTC
    pub fn late_evening() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 23, 30, 0).unwrap()
    }

    /// 2024-03-11 09:00 UTC
    pub fn next_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 11, 9, 0, 0).unwrap()
    }

    /// Calendar day of `morning` and `late_evening` in UTC
    pub fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    pub fn next_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 11).unwrap()
    }

    /// A UTC-3 zone with no daylight saving in 2024
    pub fn sao_paulo() -> Timezone {
        Timezone::new(chrono_tz::America::Sao_Paulo)
    }
}

/// Service over an empty in-memory directory, driven by a fixed clock
///
/// The clock starts at [`TemporalFixtures::morning`]; move it with
/// `FixedClock::set` between operations.
pub fn service_with_fixed_clock() -> (AccountService<InMemoryDirectory>, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(TemporalFixtures::morning()));
    let service = AccountService::new(InMemoryDirectory::new(), clock.clone());
    (service, clock)
}
