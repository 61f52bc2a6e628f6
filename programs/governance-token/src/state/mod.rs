pub mod holder;
pub mod proposal;
pub mod token_state;
pub mod vote_record;

pub use holder::*;
pub use proposal::*;
pub use token_state::*;
pub use vote_record::*;

use anchor_lang::prelude::*;

/// Deserializes a lazily created program account.
///
/// Returns `None` for an address that was never initialized: no data, or an
/// owner other than this program. An initialized account with the wrong
/// discriminator is an error.
pub(crate) fn load_if_initialized<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

#[cfg(test)]
pub mod state_tests;
