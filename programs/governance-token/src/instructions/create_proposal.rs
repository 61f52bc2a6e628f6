use crate::error::GovernanceError;
use crate::state::holder::balance_at;
use crate::state::proposal::Proposal;
use crate::state::token_state::TokenState;
use crate::utils::constants::{HOLDER_SEED, PROPOSAL_SEED, TOKEN_STATE_SEED};
use crate::utils::events::ProposalCreated;
use anchor_lang::prelude::*;

/// Arguments for opening a proposal, bundled so validation sees them together.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ProposalDraft {
    pub title: String,
    pub description: String,
    /// Number of blocks the proposal stays open for voting.
    pub voting_period: u64,
}

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(
        mut,
        seeds = [TOKEN_STATE_SEED],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    /// CHECK: PDA address is enforced by seeds; an uninitialized holder reads
    /// as balance 0, which is not eligible to propose.
    #[account(
        seeds = [HOLDER_SEED, creator.key().as_ref()],
        bump,
    )]
    pub creator_holder: UncheckedAccount<'info>,

    /// Next proposal slot, derived from the counter so ids stay sequential.
    #[account(
        init,
        payer = creator,
        space = 8 + Proposal::INIT_SPACE,
        seeds = [PROPOSAL_SEED, &token_state.next_proposal_seed()],
        bump,
    )]
    pub proposal: AccountLoader<'info, Proposal>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Opens a new proposal for `creator` and returns its id.
///
/// Eligibility is checked first: a caller without tokens fails with
/// `NotTokenHolder` no matter what else is wrong with the request. The
/// counter is bumped only after the proposal has been fully written.
pub fn apply_create_proposal(
    token_state: &mut TokenState,
    proposal: &mut Proposal,
    creator: &Pubkey,
    creator_balance: u64,
    draft: &ProposalDraft,
    current_height: u64,
    bump: u8,
) -> Result<u64> {
    require!(creator_balance > 0, GovernanceError::NotTokenHolder);
    Proposal::validate_text(&draft.title, &draft.description)?;

    let id = token_state.next_proposal_id()?;
    let end_height = current_height
        .checked_add(draft.voting_period)
        .ok_or(GovernanceError::VotingPeriodOverflow)?;

    proposal.set_text(&draft.title, &draft.description)?;
    proposal.id = id;
    proposal.creator = *creator;
    proposal.votes_for = 0;
    proposal.votes_against = 0;
    proposal.start_height = current_height;
    proposal.end_height = end_height;
    proposal.bump = bump;

    token_state.proposal_count = id;

    Ok(id)
}

pub fn create_proposal(ctx: Context<CreateProposal>, draft: ProposalDraft) -> Result<u64> {
    let current_height = Clock::get()?.slot;
    let creator = ctx.accounts.creator.key();
    let creator_balance = balance_at(&ctx.accounts.creator_holder)?;

    let mut proposal = ctx.accounts.proposal.load_init()?;

    let id = apply_create_proposal(
        &mut ctx.accounts.token_state,
        &mut proposal,
        &creator,
        creator_balance,
        &draft,
        current_height,
        ctx.bumps.proposal,
    )?;

    emit!(ProposalCreated {
        proposal_id: id,
        creator,
        title: draft.title,
        start_height: proposal.start_height,
        end_height: proposal.end_height,
    });

    Ok(id)
}
