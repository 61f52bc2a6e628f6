/// Token metadata
pub const TOKEN_NAME: &str = "Governance Token";
pub const TOKEN_SYMBOL: &str = "GOVN";
pub const TOKEN_DECIMALS: u8 = 6;
pub const INITIAL_SUPPLY: u64 = 1_000_000_000_000; // 1,000,000 GOVN at 6 decimals

/// Bounds on caller-supplied data
pub const MAX_TITLE_LEN: usize = 128;
pub const MAX_DESCRIPTION_LEN: usize = 512;
pub const MAX_MEMO_LEN: usize = 34;

/// PDA seed constants
pub const TOKEN_STATE_SEED: &[u8] = b"token_state";
pub const HOLDER_SEED: &[u8] = b"holder";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const VOTE_RECORD_SEED: &[u8] = b"vote_record";
