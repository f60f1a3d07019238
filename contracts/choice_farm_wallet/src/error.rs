use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Null address")]
    NullAddress {},

    #[error("Native denom must not be empty")]
    EmptyDenom {},

    #[error("Pair code checksum must be 32 bytes")]
    InvalidChecksum {},

    #[error("Identical assets")]
    IdenticalAssets {},

    #[error("Pool id mismatch: {farm} pool {pool_id} stakes {registered}, expected {expected}")]
    PoolIdMismatch {
        farm: String,
        pool_id: u64,
        expected: String,
        registered: String,
    },

    #[error("Insufficient balance of {asset} ({available} < {required})")]
    InsufficientBalance {
        asset: String,
        required: String,
        available: String,
    },

    #[error("No liquidity minted")]
    NoLiquidityMinted {},

    #[error("Another deposit is in progress")]
    DepositInProgress {},

    #[error("No ownership proposal for you")]
    NoOwnershipProposal {},

    #[error("Unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
