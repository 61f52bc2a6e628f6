use crate::error::TokenError;
use crate::state::holder::{load_holder, store_holder, Holder};
use crate::state::token_state::TokenState;
use crate::utils::constants::{HOLDER_SEED, MAX_MEMO_LEN, TOKEN_STATE_SEED};
use crate::utils::events::TokensTransferred;
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(amount: u64, sender: Pubkey, recipient: Pubkey)]
pub struct TransferTokens<'info> {
    #[account(
        seeds = [TOKEN_STATE_SEED],
        bump = token_state.bump,
    )]
    pub token_state: Account<'info, TokenState>,

    /// CHECK: PDA address is enforced by seeds. Loaded with `load_holder` so a
    /// sender who was never credited is rejected with `InsufficientBalance`
    /// instead of an account error.
    #[account(
        mut,
        seeds = [HOLDER_SEED, sender.as_ref()],
        bump,
    )]
    pub sender_holder: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + Holder::INIT_SPACE,
        seeds = [HOLDER_SEED, recipient.as_ref()],
        bump,
    )]
    pub recipient_holder: Account<'info, Holder>,

    /// Caller identity; must be the sender.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[inline(always)]
pub fn validate_memo(memo: Option<&[u8]>) -> Result<()> {
    if let Some(bytes) = memo {
        require!(bytes.len() <= MAX_MEMO_LEN, TokenError::MemoTooLong);
    }
    Ok(())
}

/// Moves `amount` from `sender` to `recipient` on behalf of `caller`.
///
/// Checks run in a fixed order: self-authorization, memo bound, amount,
/// distinct parties, then balances. Both new balances are computed before
/// either account is written, so any failure leaves both untouched.
pub fn apply_transfer(
    caller: &Pubkey,
    sender: &Pubkey,
    recipient: &Pubkey,
    amount: u64,
    memo: Option<&[u8]>,
    sender_holder: Option<&mut Holder>,
    recipient_holder: &mut Holder,
) -> Result<()> {
    require_keys_eq!(*caller, *sender, TokenError::Unauthorized);
    validate_memo(memo)?;
    require!(amount > 0, TokenError::ZeroAmount);
    require_keys_neq!(*sender, *recipient, TokenError::SelfTransfer);

    let sender_holder = sender_holder.ok_or(TokenError::InsufficientBalance)?;

    let sender_balance = sender_holder.balance_after_debit(amount)?;
    let recipient_balance = recipient_holder.balance_after_credit(amount)?;

    sender_holder.balance = sender_balance;
    recipient_holder.balance = recipient_balance;

    Ok(())
}

pub fn transfer(
    ctx: Context<TransferTokens>,
    amount: u64,
    sender: Pubkey,
    recipient: Pubkey,
    memo: Option<Vec<u8>>,
) -> Result<bool> {
    let caller = ctx.accounts.authority.key();
    let recipient_bump = ctx.bumps.recipient_holder;
    let accounts = ctx.accounts;

    let mut sender_holder = load_holder(&accounts.sender_holder)?;

    accounts.recipient_holder.claim(recipient, recipient_bump);

    apply_transfer(
        &caller,
        &sender,
        &recipient,
        amount,
        memo.as_deref(),
        sender_holder.as_mut(),
        &mut accounts.recipient_holder,
    )?;

    if let Some(holder) = &sender_holder {
        store_holder(&accounts.sender_holder, holder)?;
    }

    emit!(TokensTransferred {
        sender,
        recipient,
        amount,
        memo,
    });

    Ok(true)
}
