//! Test suites for the ledger and governance accounts.
//!
//! - `helpers`: deterministic keys, error-code assertions and the `Simnet`
//!   harness that drives the instruction apply functions.
//! - `ledger_tests`: balances, transfer, mint and supply conservation.
//! - `governance_tests`: proposal creation, voting and the voting window.
//! - `layout_zero_copy`: byte-level guarantees for the `Proposal` account.
//! - `lazy_accounts`: loading holder and vote-record PDAs that may not exist.
//! - `scenario_tests`: the end-to-end holder journey.

pub mod layout_zero_copy;
pub mod ledger_tests;
