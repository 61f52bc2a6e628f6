use crate::error::TokenError;
use crate::state::load_if_initialized;
use anchor_lang::prelude::*;

/// Balance entry for a single principal.
///
/// A principal without a `Holder` account has an implicit balance of zero.
/// The account is created lazily the first time the principal is credited.
#[account]
#[derive(InitSpace, Default)]
pub struct Holder {
    pub owner: Pubkey,
    pub balance: u64,
    pub bump: u8,
}

impl Holder {
    /// Binds a freshly created account to its principal. No-op once bound.
    pub fn claim(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
    }

    /// Balance after removing `amount`. Does not mutate.
    #[inline(always)]
    pub fn balance_after_debit(&self, amount: u64) -> Result<u64> {
        self.balance
            .checked_sub(amount)
            .ok_or_else(|| TokenError::InsufficientBalance.into())
    }

    /// Balance after adding `amount`. Does not mutate.
    #[inline(always)]
    pub fn balance_after_credit(&self, amount: u64) -> Result<u64> {
        self.balance
            .checked_add(amount)
            .ok_or_else(|| TokenError::BalanceOverflow.into())
    }
}

/// Live balance of an optional holder account; absent accounts hold nothing.
#[inline(always)]
pub fn balance_of(holder: Option<&Holder>) -> u64 {
    holder.map_or(0, |h| h.balance)
}

/// Reads the holder stored at a seeds-checked PDA.
///
/// The PDA is always passed, so an uninitialized address (empty or still
/// owned by the system program) is the only way to get `None`.
pub fn load_holder(info: &AccountInfo) -> Result<Option<Holder>> {
    load_if_initialized(info)
}

/// Live balance at a holder PDA, 0 when the principal was never credited.
pub fn balance_at(info: &AccountInfo) -> Result<u64> {
    Ok(balance_of(load_holder(info)?.as_ref()))
}

/// Writes `holder` back to an initialized holder PDA.
pub fn store_holder(info: &AccountInfo, holder: &Holder) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data[..];
    holder.try_serialize(&mut dst)
}
