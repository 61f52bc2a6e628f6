use crate::error::GovernanceError;
use crate::state::holder::balance_at;
use crate::state::proposal::{load_proposal_mut, Proposal};
use crate::state::vote_record::VoteRecord;
use crate::utils::constants::{HOLDER_SEED, PROPOSAL_SEED, VOTE_RECORD_SEED};
use crate::utils::events::VoteCast;
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct CastVote<'info> {
    /// CHECK: PDA address is enforced by seeds; ownership, discriminator and
    /// size are validated in the handler so a missing proposal reports
    /// `ProposalNotFound`.
    #[account(
        mut,
        seeds = [PROPOSAL_SEED, &proposal_id.to_le_bytes()],
        bump,
    )]
    pub proposal: UncheckedAccount<'info>,

    /// Created on the first attempt; `voted` guards against a second vote.
    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + VoteRecord::INIT_SPACE,
        seeds = [VOTE_RECORD_SEED, &proposal_id.to_le_bytes(), voter.key().as_ref()],
        bump,
    )]
    pub vote_record: Account<'info, VoteRecord>,

    /// CHECK: PDA address is enforced by seeds; read through `balance_at`,
    /// which yields 0 when the voter was never credited.
    #[account(
        seeds = [HOLDER_SEED, voter.key().as_ref()],
        bump,
    )]
    pub voter_holder: UncheckedAccount<'info>,

    #[account(mut)]
    pub voter: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Records `voter`'s vote on an existing proposal.
///
/// Order of checks: duplicate vote, then voting window, then tally overflow.
/// Weight is the voter's live balance; later balance changes never touch a
/// tally that has already been recorded. The record is written only after
/// the tally succeeded.
pub fn apply_vote(
    proposal: &mut Proposal,
    vote_record: &mut VoteRecord,
    voter: &Pubkey,
    weight: u64,
    support: bool,
    current_height: u64,
    bump: u8,
) -> Result<()> {
    vote_record.ensure_unused()?;
    require!(
        proposal.is_active(current_height),
        GovernanceError::VotingClosed
    );

    proposal.tally(support, weight)?;

    vote_record.proposal_id = proposal.id;
    vote_record.voter = *voter;
    vote_record.support = support;
    vote_record.weight = weight;
    vote_record.voted = true;
    vote_record.bump = bump;

    Ok(())
}

pub fn vote(ctx: Context<CastVote>, proposal_id: u64, support: bool) -> Result<bool> {
    let current_height = Clock::get()?.slot;
    let voter = ctx.accounts.voter.key();
    let weight = balance_at(&ctx.accounts.voter_holder)?;

    let proposal_info = ctx.accounts.proposal.to_account_info();
    let mut proposal = load_proposal_mut(&proposal_info)?;

    apply_vote(
        &mut proposal,
        &mut ctx.accounts.vote_record,
        &voter,
        weight,
        support,
        current_height,
        ctx.bumps.vote_record,
    )?;

    emit!(VoteCast {
        proposal_id,
        voter,
        support,
        weight,
        votes_for: proposal.votes_for,
        votes_against: proposal.votes_against,
    });

    Ok(true)
}
