use crate::state::holder::Holder;
use crate::state::token_state::TokenState;
use crate::utils::constants::{HOLDER_SEED, INITIAL_SUPPLY, TOKEN_DECIMALS, TOKEN_STATE_SEED};
use crate::utils::events::TokenInitialized;
use anchor_lang::prelude::*;

/// Genesis accounts: the singleton ledger header and the owner's balance.
///
/// Both are PDAs with fixed seeds, so a second initialization fails at account
/// creation and the owner can never be replaced.
#[derive(Accounts)]
pub struct InitializeToken<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + TokenState::INIT_SPACE,
        seeds = [TOKEN_STATE_SEED],
        bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        init,
        payer = owner,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, owner.key().as_ref()],
        bump,
    )]
    pub owner_holder: Account<'info, Holder>,

    /// Deploying identity. Becomes the immutable contract owner and receives
    /// the entire initial supply.
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Writes the genesis ledger: owner, supply and the owner's opening balance.
pub fn apply_genesis(
    token_state: &mut TokenState,
    owner_holder: &mut Holder,
    owner: Pubkey,
    state_bump: u8,
    holder_bump: u8,
) {
    token_state.owner = owner;
    token_state.total_supply = INITIAL_SUPPLY;
    token_state.proposal_count = 0;
    token_state.bump = state_bump;

    owner_holder.claim(owner, holder_bump);
    owner_holder.balance = INITIAL_SUPPLY;
}

pub fn initialize_token(ctx: Context<InitializeToken>) -> Result<()> {
    let owner = ctx.accounts.owner.key();

    apply_genesis(
        &mut ctx.accounts.token_state,
        &mut ctx.accounts.owner_holder,
        owner,
        ctx.bumps.token_state,
        ctx.bumps.owner_holder,
    );

    msg!("Governance token initialized, owner {} supply {}", owner, INITIAL_SUPPLY);

    emit!(TokenInitialized {
        token_state: ctx.accounts.token_state.key(),
        owner,
        initial_supply: INITIAL_SUPPLY,
        decimals: TOKEN_DECIMALS,
    });

    Ok(())
}
