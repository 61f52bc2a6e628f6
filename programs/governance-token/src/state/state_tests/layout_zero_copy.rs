//! Byte-level tests for the zero-copy `Proposal` account.
//!
//! Proposals are mapped directly onto account data, so the struct size, its
//! alignment and the checks performed by `load_proposal` are part of the
//! on-chain ABI. A failure here means existing accounts would be misread.

use super::helpers::{assert_error, deterministic_pubkey};
use crate::error::GovernanceError;
use crate::state::proposal::{load_proposal, load_proposal_mut, Proposal, ProposalStatus};
use crate::utils::constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN};
use anchor_lang::prelude::{AccountInfo, Pubkey};
use anchor_lang::{Discriminator, Space};
use bytemuck::{bytes_of, Pod, Zeroable};
use std::mem::{align_of, size_of};

const DISCRIMINATOR_LEN: usize = 8;
const WORDS: usize = Proposal::ACCOUNT_LEN / 8;

/// Account image backed by `u64` words so the payload after the 8-byte
/// discriminator is aligned for `Proposal`.
fn account_image(proposal: &Proposal) -> Vec<u64> {
    let mut words = vec![0u64; WORDS];
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
    bytes[..DISCRIMINATOR_LEN].copy_from_slice(&Proposal::DISCRIMINATOR[..]);
    bytes[DISCRIMINATOR_LEN..].copy_from_slice(bytes_of(proposal));
    words
}

fn proposal_fixture() -> Proposal {
    let mut proposal = Proposal::zeroed();
    proposal.id = 3;
    proposal.creator = deterministic_pubkey(42);
    proposal.start_height = 10;
    proposal.end_height = 110;
    proposal.votes_for = 1_000;
    proposal.votes_against = 2_000;
    proposal.bump = 254;
    proposal
        .set_text("Layout", "Fixture proposal")
        .expect("text within bounds");
    proposal
}

#[test]
fn proposal_layout_contract() {
    assert_eq!(
        size_of::<Proposal>(),
        720,
        "Proposal size drifted; existing accounts would be misread"
    );
    assert_eq!(align_of::<Proposal>(), 8);
    assert_eq!(Proposal::ACCOUNT_LEN, DISCRIMINATOR_LEN + 720);
    assert_eq!(Proposal::INIT_SPACE, size_of::<Proposal>());
    assert_eq!(Proposal::ACCOUNT_LEN % 8, 0);
}

#[test]
fn zero_copy_trait_contracts_hold() {
    fn assert_pod<T: Pod>() {}
    assert_pod::<Proposal>();

    let fixture = proposal_fixture();
    assert_eq!(bytes_of(&fixture).len(), size_of::<Proposal>());
    assert!(fixture._padding.iter().all(|byte| *byte == 0));
}

#[test]
fn set_text_zeroes_stale_tail() {
    let mut proposal = Proposal::zeroed();
    proposal
        .set_text(&"x".repeat(MAX_TITLE_LEN), &"y".repeat(MAX_DESCRIPTION_LEN))
        .expect("max lengths");
    proposal.set_text("short", "d").expect("shorter text");

    assert_eq!(proposal.title_bytes(), b"short");
    assert_eq!(proposal.description_bytes(), b"d");
    assert!(proposal.title[5..].iter().all(|byte| *byte == 0));
    assert!(proposal.description[1..].iter().all(|byte| *byte == 0));
}

#[test]
fn load_reads_initialized_account_in_place() {
    let fixture = proposal_fixture();
    let mut words = account_image(&fixture);
    let key = Pubkey::new_unique();
    let owner = crate::ID;
    let mut lamports = 0u64;
    let info = AccountInfo::new(
        &key,
        false,
        true,
        &mut lamports,
        bytemuck::cast_slice_mut(&mut words),
        &owner,
        false,
        0,
    );

    let proposal = load_proposal(&info).expect("valid proposal account");
    assert_eq!(proposal.id, 3);
    assert_eq!(proposal.creator, deterministic_pubkey(42));
    assert_eq!(proposal.title_string(), "Layout");
    assert_eq!(proposal.description_string(), "Fixture proposal");
    assert_eq!(proposal.votes_for, 1_000);
    assert_eq!(proposal.votes_against, 2_000);
    assert_eq!(proposal.status(109), ProposalStatus::Active);
    assert_eq!(proposal.status(110), ProposalStatus::Closed);
}

#[test]
fn load_mut_writes_through_to_account_data() {
    let fixture = proposal_fixture();
    let mut words = account_image(&fixture);
    let key = Pubkey::new_unique();
    let owner = crate::ID;
    let mut lamports = 0u64;
    let info = AccountInfo::new(
        &key,
        false,
        true,
        &mut lamports,
        bytemuck::cast_slice_mut(&mut words),
        &owner,
        false,
        0,
    );

    {
        let mut proposal = load_proposal_mut(&info).expect("valid proposal account");
        proposal.tally(true, 500).expect("tally");
    }

    let data = info.try_borrow_data().expect("borrow");
    let stored: &Proposal =
        bytemuck::from_bytes(&data[DISCRIMINATOR_LEN..DISCRIMINATOR_LEN + size_of::<Proposal>()]);
    assert_eq!(stored.votes_for, 1_500);
    assert_eq!(stored.votes_against, 2_000);
}

#[test]
fn foreign_owner_is_not_a_proposal() {
    let mut words = account_image(&proposal_fixture());
    let key = Pubkey::new_unique();
    let owner = Pubkey::default();
    let mut lamports = 0u64;
    let info = AccountInfo::new(
        &key,
        false,
        true,
        &mut lamports,
        bytemuck::cast_slice_mut(&mut words),
        &owner,
        false,
        0,
    );

    assert_error(load_proposal(&info).map(|p| p.id), GovernanceError::ProposalNotFound);
}

#[test]
fn missing_discriminator_is_not_a_proposal() {
    let mut words = account_image(&proposal_fixture());
    words[0] = 0;
    let key = Pubkey::new_unique();
    let owner = crate::ID;
    let mut lamports = 0u64;
    let info = AccountInfo::new(
        &key,
        false,
        true,
        &mut lamports,
        bytemuck::cast_slice_mut(&mut words),
        &owner,
        false,
        0,
    );

    assert_error(
        load_proposal_mut(&info).map(|p| p.id),
        GovernanceError::ProposalNotFound,
    );
}

#[test]
fn empty_account_is_not_a_proposal() {
    let key = Pubkey::new_unique();
    let owner = crate::ID;
    let mut lamports = 0u64;
    let mut data: [u8; 0] = [];
    let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &owner, false, 0);

    assert_error(load_proposal(&info).map(|p| p.id), GovernanceError::ProposalNotFound);
}

#[test]
fn truncated_account_is_not_a_proposal() {
    let mut words = account_image(&proposal_fixture());
    let key = Pubkey::new_unique();
    let owner = crate::ID;
    let mut lamports = 0u64;
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
    let truncated = Proposal::ACCOUNT_LEN - 8;
    let info = AccountInfo::new(
        &key,
        false,
        false,
        &mut lamports,
        &mut bytes[..truncated],
        &owner,
        false,
        0,
    );

    assert_error(load_proposal(&info).map(|p| p.id), GovernanceError::ProposalNotFound);
}
