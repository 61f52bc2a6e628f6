use anchor_lang::prelude::*;

#[event]
pub struct TokenInitialized {
    pub token_state: Pubkey,
    pub owner: Pubkey,
    pub initial_supply: u64,
    pub decimals: u8,
}

#[event]
pub struct TokensTransferred {
    pub sender: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub memo: Option<Vec<u8>>, // carried for indexers only, no state effect
}

#[event]
pub struct TokensMinted {
    pub minted_by: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub total_supply: u64,
}

#[event]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub creator: Pubkey,
    pub title: String,
    pub start_height: u64,
    pub end_height: u64,
}

#[event]
pub struct VoteCast {
    pub proposal_id: u64,
    pub voter: Pubkey,
    pub support: bool,
    pub weight: u64,
    pub votes_for: u64,
    pub votes_against: u64,
}
