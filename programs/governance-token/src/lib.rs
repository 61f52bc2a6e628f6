#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::ProposalView;

declare_id!("2JnmA2aawnXvi9TyGHhgM5XiQ7oJSJpChDv9pKKFemxg");

#[program]
pub mod governance_token {
    use super::*;

    pub fn initialize_token(ctx: Context<InitializeToken>) -> Result<()> {
        instructions::initialize_token::initialize_token(ctx)
    }

    // Ledger

    pub fn get_name(ctx: Context<ReadMetadata>) -> Result<String> {
        instructions::queries::get_name(ctx)
    }

    pub fn get_symbol(ctx: Context<ReadMetadata>) -> Result<String> {
        instructions::queries::get_symbol(ctx)
    }

    pub fn get_decimals(ctx: Context<ReadMetadata>) -> Result<u8> {
        instructions::queries::get_decimals(ctx)
    }

    pub fn get_token_uri(ctx: Context<ReadMetadata>) -> Result<Option<String>> {
        instructions::queries::get_token_uri(ctx)
    }

    pub fn get_balance(ctx: Context<ReadBalance>, owner: Pubkey) -> Result<u64> {
        instructions::queries::get_balance(ctx, owner)
    }

    pub fn get_total_supply(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::queries::get_total_supply(ctx)
    }

    pub fn transfer(
        ctx: Context<TransferTokens>,
        amount: u64,
        sender: Pubkey,
        recipient: Pubkey,
        memo: Option<Vec<u8>>,
    ) -> Result<bool> {
        instructions::transfer::transfer(ctx, amount, sender, recipient, memo)
    }

    pub fn mint(ctx: Context<MintTokens>, amount: u64, recipient: Pubkey) -> Result<bool> {
        instructions::mint::mint(ctx, amount, recipient)
    }

    // Governance

    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        title: String,
        description: String,
        voting_period: u64,
    ) -> Result<u64> {
        let draft = ProposalDraft {
            title,
            description,
            voting_period,
        };
        instructions::create_proposal::create_proposal(ctx, draft)
    }

    pub fn vote(ctx: Context<CastVote>, proposal_id: u64, support: bool) -> Result<bool> {
        instructions::vote::vote(ctx, proposal_id, support)
    }

    pub fn get_proposal(ctx: Context<ReadProposal>, proposal_id: u64) -> Result<ProposalView> {
        instructions::queries::get_proposal(ctx, proposal_id)
    }

    pub fn get_proposal_count(ctx: Context<ReadLedger>) -> Result<u64> {
        instructions::queries::get_proposal_count(ctx)
    }

    pub fn get_vote(ctx: Context<ReadVote>, proposal_id: u64, voter: Pubkey) -> Result<Option<bool>> {
        instructions::queries::get_vote(ctx, proposal_id, voter)
    }
}
