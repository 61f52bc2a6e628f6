//! Read-only instructions. Each returns its value through Anchor return data
//! and never writes an account.

use crate::state::holder::balance_at;
use crate::state::proposal::{load_proposal, ProposalView};
use crate::state::token_state::TokenState;
use crate::state::vote_record::{load_vote_record, VoteRecord};
use crate::utils::constants::{
    HOLDER_SEED, PROPOSAL_SEED, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_STATE_SEED, TOKEN_SYMBOL,
    VOTE_RECORD_SEED,
};
use anchor_lang::prelude::*;

/// Metadata reads need no accounts.
#[derive(Accounts)]
pub struct ReadMetadata {}

#[derive(Accounts)]
pub struct ReadLedger<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct ReadBalance<'info> {
    /// CHECK: PDA address is enforced by seeds; read through `balance_at`.
    #[account(
        seeds = [HOLDER_SEED, owner.as_ref()],
        bump,
    )]
    pub holder: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ReadProposal<'info> {
    /// CHECK: PDA address is enforced by seeds; contents are validated by
    /// `load_proposal`.
    #[account(
        seeds = [PROPOSAL_SEED, &proposal_id.to_le_bytes()],
        bump,
    )]
    pub proposal: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(proposal_id: u64, voter: Pubkey)]
pub struct ReadVote<'info> {
    /// CHECK: PDA address is enforced by seeds; read through `load_vote_record`.
    #[account(
        seeds = [VOTE_RECORD_SEED, &proposal_id.to_le_bytes(), voter.as_ref()],
        bump,
    )]
    pub vote_record: UncheckedAccount<'info>,
}

pub fn get_name(_ctx: Context<ReadMetadata>) -> Result<String> {
    Ok(TOKEN_NAME.to_string())
}

pub fn get_symbol(_ctx: Context<ReadMetadata>) -> Result<String> {
    Ok(TOKEN_SYMBOL.to_string())
}

pub fn get_decimals(_ctx: Context<ReadMetadata>) -> Result<u8> {
    Ok(TOKEN_DECIMALS)
}

pub fn get_token_uri(_ctx: Context<ReadMetadata>) -> Result<Option<String>> {
    Ok(None)
}

pub fn get_balance(ctx: Context<ReadBalance>, _owner: Pubkey) -> Result<u64> {
    balance_at(&ctx.accounts.holder)
}

pub fn get_total_supply(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.token_state.total_supply)
}

pub fn get_proposal_count(ctx: Context<ReadLedger>) -> Result<u64> {
    Ok(ctx.accounts.token_state.proposal_count)
}

pub fn get_proposal(ctx: Context<ReadProposal>, _proposal_id: u64) -> Result<ProposalView> {
    let current_height = Clock::get()?.slot;
    let proposal_info = ctx.accounts.proposal.to_account_info();
    let proposal = load_proposal(&proposal_info)?;
    Ok(ProposalView::at_height(&proposal, current_height))
}

pub fn get_vote(ctx: Context<ReadVote>, _proposal_id: u64, _voter: Pubkey) -> Result<Option<bool>> {
    Ok(load_vote_record(&ctx.accounts.vote_record)?
        .as_ref()
        .and_then(VoteRecord::recorded_support))
}
