use crate::error::{GovernanceError, TokenError};
use anchor_lang::prelude::*;

/// Singleton ledger header for the governance token.
///
/// Holds the fields every instruction needs to agree on: who may mint, how
/// much supply exists, and which proposal id comes next. Balances live in
/// per-owner [`Holder`](crate::state::Holder) accounts so that the header
/// stays small and never needs reallocation.
///
/// # Invariants
///
/// - `total_supply` equals the sum of every `Holder::balance`. Only `mint`
///   increases it; nothing decreases it.
/// - `owner` is written once by `initialize_token` and never changes.
/// - `proposal_count` is the id of the most recently created proposal, so the
///   next proposal receives `proposal_count + 1`.
#[account]
#[derive(InitSpace, Default)]
pub struct TokenState {
    /// Deploying identity; the only key allowed to mint.
    pub owner: Pubkey,

    /// Sum of all holder balances.
    pub total_supply: u64,

    /// Number of proposals created so far.
    pub proposal_count: u64,

    /// PDA bump seed cached at initialization.
    pub bump: u8,
}

impl TokenState {
    /// Access-control predicate consulted by `mint`.
    pub fn check_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, TokenError::NotContractOwner);
        Ok(())
    }

    /// Supply after minting `amount`, without mutating the header.
    pub fn supply_after_mint(&self, amount: u64) -> Result<u64> {
        self.total_supply
            .checked_add(amount)
            .ok_or_else(|| TokenError::SupplyOverflow.into())
    }

    /// Id the next proposal will receive, without consuming it.
    pub fn next_proposal_id(&self) -> Result<u64> {
        self.proposal_count
            .checked_add(1)
            .ok_or_else(|| GovernanceError::ProposalCounterOverflow.into())
    }

    /// Seed helper for the PDA of the proposal about to be created.
    ///
    /// Wraps rather than fails so account validation never panics; the handler
    /// rejects the overflow through [`Self::next_proposal_id`].
    #[inline(always)]
    pub fn next_proposal_seed(&self) -> [u8; 8] {
        self.proposal_count.wrapping_add(1).to_le_bytes()
    }
}
