//! Ledger suites: metadata, balances, transfer and mint semantics.
//!
//! - `core_unit_tests`: happy paths and the documented failure codes.
//! - `attack_scenarios`: authorization bypass and atomicity under failure.
//! - `property_tests`: supply conservation over random operation sequences.
