use crate::error::GovernanceError;
use crate::utils::constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use anchor_lang::prelude::*;
use anchor_lang::Discriminator;
use std::cell::{Ref, RefMut};
use std::mem::size_of;

/// A holder-created governance proposal with a block-height voting window.
///
/// # Layout
///
/// Stored zero-copy so the fixed-size text buffers are read in place instead
/// of being Borsh-decoded on every vote. Fields are ordered widest-first and
/// the struct ends on an explicit pad so the `Pod` layout has no implicit
/// padding:
///
/// | bytes | field |
/// |---|---|
/// | 0..40 | id, votes, heights (5 x u64) |
/// | 40..72 | creator |
/// | 72..200 | title buffer |
/// | 200..712 | description buffer |
/// | 712..720 | text lengths, bump, pad |
///
/// # Lifecycle
///
/// A proposal is never deleted and never changes status explicitly. Its status
/// is derived from the current height on every read (see [`Proposal::status`])
/// so it cannot go stale. Only `votes_for` and `votes_against` change after
/// creation.
#[account(zero_copy)]
#[derive(InitSpace)]
#[repr(C)]
pub struct Proposal {
    /// Sequential identifier, starting at 1.
    pub id: u64,

    /// Accumulated weight of supporting votes.
    pub votes_for: u64,

    /// Accumulated weight of opposing votes.
    pub votes_against: u64,

    /// Height at which the proposal was created.
    pub start_height: u64,

    /// First height at which the proposal is closed.
    pub end_height: u64,

    /// Holder that opened the proposal.
    pub creator: Pubkey,

    /// UTF-8 title bytes; only the first `title_len` are meaningful.
    pub title: [u8; MAX_TITLE_LEN],

    /// UTF-8 description bytes; only the first `description_len` are meaningful.
    pub description: [u8; MAX_DESCRIPTION_LEN],

    pub title_len: u16,
    pub description_len: u16,

    /// PDA bump seed cached at creation.
    pub bump: u8,

    /// Explicit padding keeps the struct a multiple of 8 bytes.
    pub _padding: [u8; 3],
}

/// Derived lifecycle state of a proposal at a given height.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalStatus {
    /// `height < end_height`; votes are accepted.
    Active,
    /// `height >= end_height`; immutable history.
    Closed,
}

impl Proposal {
    /// Total account size including the Anchor discriminator.
    pub const ACCOUNT_LEN: usize = 8 + size_of::<Proposal>();

    /// Status at `current_height`. Pure function of the stored window.
    #[inline(always)]
    pub fn status(&self, current_height: u64) -> ProposalStatus {
        if current_height < self.end_height {
            ProposalStatus::Active
        } else {
            ProposalStatus::Closed
        }
    }

    #[inline(always)]
    pub fn is_active(&self, current_height: u64) -> bool {
        self.status(current_height) == ProposalStatus::Active
    }

    pub fn title_bytes(&self) -> &[u8] {
        &self.title[..(self.title_len as usize).min(MAX_TITLE_LEN)]
    }

    pub fn description_bytes(&self) -> &[u8] {
        &self.description[..(self.description_len as usize).min(MAX_DESCRIPTION_LEN)]
    }

    pub fn title_string(&self) -> String {
        String::from_utf8_lossy(self.title_bytes()).into_owned()
    }

    pub fn description_string(&self) -> String {
        String::from_utf8_lossy(self.description_bytes()).into_owned()
    }

    /// Byte-length bounds for proposal text.
    pub fn validate_text(title: &str, description: &str) -> Result<()> {
        require!(title.len() <= MAX_TITLE_LEN, GovernanceError::TitleTooLong);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            GovernanceError::DescriptionTooLong
        );
        Ok(())
    }

    /// Copies validated text into the fixed buffers, zeroing the unused tail.
    pub fn set_text(&mut self, title: &str, description: &str) -> Result<()> {
        Self::validate_text(title, description)?;

        self.title = [0u8; MAX_TITLE_LEN];
        self.title[..title.len()].copy_from_slice(title.as_bytes());
        self.title_len = title.len() as u16;

        self.description = [0u8; MAX_DESCRIPTION_LEN];
        self.description[..description.len()].copy_from_slice(description.as_bytes());
        self.description_len = description.len() as u16;

        Ok(())
    }

    /// Adds `weight` to the chosen side of the tally.
    ///
    /// The new value is computed before anything is written, so an overflow
    /// leaves both counters untouched.
    pub fn tally(&mut self, support: bool, weight: u64) -> Result<()> {
        let counter = if support {
            &mut self.votes_for
        } else {
            &mut self.votes_against
        };
        *counter = counter
            .checked_add(weight)
            .ok_or(GovernanceError::TallyOverflow)?;
        Ok(())
    }
}

/// Read-only snapshot returned by the `get_proposal` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProposalView {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub creator: Pubkey,
    pub votes_for: u64,
    pub votes_against: u64,
    pub start_height: u64,
    pub end_height: u64,
    pub status: ProposalStatus,
}

impl ProposalView {
    pub fn at_height(proposal: &Proposal, current_height: u64) -> Self {
        Self {
            id: proposal.id,
            title: proposal.title_string(),
            description: proposal.description_string(),
            creator: proposal.creator,
            votes_for: proposal.votes_for,
            votes_against: proposal.votes_against,
            start_height: proposal.start_height,
            end_height: proposal.end_height,
            status: proposal.status(current_height),
        }
    }
}

/// Verifies that `info` holds an initialized proposal owned by this program.
///
/// Instructions that reference an existing proposal take it as an unchecked
/// account so that a missing proposal surfaces as `ProposalNotFound` rather
/// than a generic account-validation failure.
fn ensure_proposal_account(info: &AccountInfo, data: &[u8]) -> Result<()> {
    let discriminator = Proposal::DISCRIMINATOR;
    require!(
        info.owner == &crate::ID
            && data.len() >= Proposal::ACCOUNT_LEN
            && data[..discriminator.len()] == discriminator[..],
        GovernanceError::ProposalNotFound
    );
    Ok(())
}

/// Zero-copy read of a proposal account, mirroring `AccountLoader::load`.
pub fn load_proposal<'a>(info: &'a AccountInfo) -> Result<Ref<'a, Proposal>> {
    let data = info.try_borrow_data()?;
    ensure_proposal_account(info, &data)?;
    let offset = Proposal::DISCRIMINATOR.len();
    Ok(Ref::map(data, |d| {
        bytemuck::from_bytes(&d[offset..offset + size_of::<Proposal>()])
    }))
}

/// Zero-copy write access to a proposal account, mirroring `AccountLoader::load_mut`.
pub fn load_proposal_mut<'a>(info: &'a AccountInfo) -> Result<RefMut<'a, Proposal>> {
    let data = info.try_borrow_mut_data()?;
    ensure_proposal_account(info, &data)?;
    let offset = Proposal::DISCRIMINATOR.len();
    Ok(RefMut::map(data, |d| {
        bytemuck::from_bytes_mut(&mut d[offset..offset + size_of::<Proposal>()])
    }))
}
