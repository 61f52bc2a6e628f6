use crate::error::TokenError;
use crate::state::holder::Holder;
use crate::state::token_state::TokenState;
use crate::utils::constants::{HOLDER_SEED, TOKEN_STATE_SEED};
use crate::utils::events::TokensMinted;
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(amount: u64, recipient: Pubkey)]
pub struct MintTokens<'info> {
    #[account(
        mut,
        seeds = [TOKEN_STATE_SEED],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, recipient.as_ref()],
        bump,
    )]
    pub recipient_holder: Account<'info, Holder>,

    /// Caller identity; must be the contract owner.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates `amount` new tokens for the recipient. Owner only.
///
/// Supply and balance are both increased or neither is: the two checked sums
/// are computed before anything is written.
pub fn apply_mint(
    token_state: &mut TokenState,
    recipient_holder: &mut Holder,
    caller: &Pubkey,
    amount: u64,
) -> Result<()> {
    token_state.check_owner(caller)?;
    require!(amount > 0, TokenError::ZeroAmount);

    let total_supply = token_state.supply_after_mint(amount)?;
    let balance = recipient_holder.balance_after_credit(amount)?;

    token_state.total_supply = total_supply;
    recipient_holder.balance = balance;

    Ok(())
}

pub fn mint(ctx: Context<MintTokens>, amount: u64, recipient: Pubkey) -> Result<bool> {
    let caller = ctx.accounts.authority.key();
    let recipient_bump = ctx.bumps.recipient_holder;
    let accounts = ctx.accounts;

    accounts.recipient_holder.claim(recipient, recipient_bump);

    apply_mint(
        &mut accounts.token_state,
        &mut accounts.recipient_holder,
        &caller,
        amount,
    )?;

    emit!(TokensMinted {
        minted_by: caller,
        recipient,
        amount,
        total_supply: accounts.token_state.total_supply,
    });

    Ok(true)
}
