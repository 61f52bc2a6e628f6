use crate::error::GovernanceError;
use crate::state::load_if_initialized;
use anchor_lang::prelude::*;

/// Receipt of a single vote, keyed by (proposal id, voter).
///
/// The account is created on the voter's first attempt and `voted` is set
/// once the vote is accepted. A record with `voted` set is never rewritten,
/// which is what makes voting exactly-once per proposal.
#[account]
#[derive(InitSpace, Default)]
pub struct VoteRecord {
    pub proposal_id: u64,
    pub voter: Pubkey,

    /// Direction of the vote; `true` counts toward `votes_for`.
    pub support: bool,

    /// Set when the vote has been tallied.
    pub voted: bool,

    /// Voting power applied, i.e. the voter's balance at the moment of voting.
    pub weight: u64,

    pub bump: u8,
}

impl VoteRecord {
    #[inline(always)]
    pub fn ensure_unused(&self) -> Result<()> {
        require!(!self.voted, GovernanceError::AlreadyVoted);
        Ok(())
    }

    /// Direction of a recorded vote, if any.
    #[inline(always)]
    pub fn recorded_support(&self) -> Option<bool> {
        self.voted.then_some(self.support)
    }
}

/// Reads the vote record stored at a seeds-checked PDA, if one was created.
pub fn load_vote_record(info: &AccountInfo) -> Result<Option<VoteRecord>> {
    load_if_initialized(info)
}
