pub mod create_proposal;
pub mod initialize_token;
pub mod mint;
pub mod queries;
pub mod transfer;
pub mod vote;

pub use create_proposal::*;
pub use initialize_token::*;
pub use mint::*;
pub use queries::*;
pub use transfer::*;
pub use vote::*;
