use anchor_lang::prelude::*;

// Discriminants are the host-facing error codes; Anchor adds ERROR_CODE_OFFSET
// when the error leaves the program.

#[error_code]
pub enum TokenError {
    #[msg("Caller is not the contract owner")]
    NotContractOwner = 100,
    #[msg("Caller is not authorized to move these funds")]
    Unauthorized = 101,
    #[msg("Sender balance is lower than the transfer amount")]
    InsufficientBalance = 103,
    #[msg("Sender and recipient must differ")]
    SelfTransfer,
    #[msg("Amount must be greater than zero")]
    ZeroAmount,
    #[msg("Total supply would overflow")]
    SupplyOverflow,
    #[msg("Account balance would overflow")]
    BalanceOverflow,
    #[msg("Memo exceeds the maximum length")]
    MemoTooLong,
}

#[error_code]
pub enum GovernanceError {
    #[msg("Caller holds no governance tokens")]
    NotTokenHolder = 102,
    #[msg("Proposal does not exist")]
    ProposalNotFound = 200,
    #[msg("Caller already voted on this proposal")]
    AlreadyVoted,
    #[msg("Voting window for this proposal has closed")]
    VotingClosed,
    #[msg("Vote tally would overflow")]
    TallyOverflow,
    #[msg("Proposal title exceeds the maximum length")]
    TitleTooLong,
    #[msg("Proposal description exceeds the maximum length")]
    DescriptionTooLong,
    #[msg("Voting period pushes the end height past the maximum")]
    VotingPeriodOverflow,
    #[msg("Proposal counter would overflow")]
    ProposalCounterOverflow,
}
